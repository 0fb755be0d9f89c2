// Backend gateways: the traits the services depend on and the HTTP client
// that implements them.

pub mod services;

pub use services::{HttpBackend, PersistenceGateway, SettingsApi, SignatureApi, VendorApi};
