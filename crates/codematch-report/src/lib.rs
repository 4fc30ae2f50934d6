//! Sorted and filtered views over a finished analysis: [`Report`] wraps a
//! built index with the warnings and language collected along the way.

pub mod report;
pub mod summary;

pub use report::{Report, DEFAULT_MIN_OCCURRENCES, DEFAULT_SUSPICIOUS_THRESHOLD};
pub use summary::Summary;
