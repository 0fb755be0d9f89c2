pub mod models;
pub mod services;

pub use models::HstGstSettings;
pub use services::TaxCalculator;
