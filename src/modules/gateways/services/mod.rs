pub mod gateway_trait;
pub mod http_backend;

pub use gateway_trait::{PersistenceGateway, SettingsApi, SignatureApi, VendorApi};
pub use http_backend::HttpBackend;
