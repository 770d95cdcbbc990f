//! Conversion and extension traits at the crate's seams.

pub mod capture_ext;
pub mod into_failure;

pub use capture_ext::CaptureExt;
pub use into_failure::IntoFailure;
