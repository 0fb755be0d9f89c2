//! Invoice Desk client library
//!
//! Invoice drafting, pricing and submission against the invoicing backend,
//! plus the vendor, signature and company settings it depends on.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, Result, SubmissionError, ValidationError};
pub use modules::gateways;
pub use modules::invoices;
pub use modules::settings;
pub use modules::signatures;
pub use modules::taxes;
pub use modules::vendors;
