mod company;

pub use company::{CompanySettings, CompanySettingsUpdate};
