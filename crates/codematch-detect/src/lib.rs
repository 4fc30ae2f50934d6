//! The `Detector` façade: tokenizes, indexes and reports on a batch of
//! source files in one call.

pub mod detector;
pub mod error;
pub mod input;
pub mod options;

pub use detector::Detector;
pub use error::DetectError;
pub use input::FileInput;
pub use options::DetectorOptions;
