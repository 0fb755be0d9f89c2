pub mod error;
pub mod money;
pub mod numeric;
pub mod paths;
pub mod upload;
pub mod wire;

pub use error::{AppError, Result, SubmissionError, ValidationError};
pub use numeric::{Coerced, PricingDefaults};
pub use upload::ImageUpload;
