pub mod signature_cache;
pub mod signature_service;

pub use signature_cache::SignatureCache;
pub use signature_service::SignatureService;
