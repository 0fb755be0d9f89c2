pub mod vendor_cache;
pub mod vendor_service;

pub use vendor_cache::VendorCache;
pub use vendor_service::VendorService;
