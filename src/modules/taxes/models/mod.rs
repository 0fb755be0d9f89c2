mod hst_gst;

pub use hst_gst::{validate_number, HstGstSettings};
