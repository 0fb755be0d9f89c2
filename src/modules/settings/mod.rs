// Company settings module

pub mod models;
pub mod services;

pub use models::{CompanySettings, CompanySettingsUpdate};
pub use services::SettingsService;
