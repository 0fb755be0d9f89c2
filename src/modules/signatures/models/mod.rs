mod signature;

pub use signature::{Signature, SignatureDetails, DEFAULT_SIGNATURE_NAME};
