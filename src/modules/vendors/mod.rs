// Vendors module

pub mod models;
pub mod services;

pub use models::{Vendor, VendorDetails};
pub use services::{VendorCache, VendorService};
