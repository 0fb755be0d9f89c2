// Signatures module

pub mod models;
pub mod services;

pub use models::{Signature, SignatureDetails};
pub use services::{SignatureCache, SignatureService};
