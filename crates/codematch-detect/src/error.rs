//! Errors surfaced by [`crate::Detector::analyze`].
//!
//! A tokenizer failure on one file is not fatal to the run: it is recorded
//! as a [`crate::Report`] warning and the file is dropped. Only conditions
//! that make the whole run meaningless end up here.

use codematch_core::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("could not resolve a supported language from the given files or options")]
    UnsupportedLanguage,

    #[error("at least two files of the resolved language are required, found {0}")]
    InsufficientFiles(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("analysis cancelled")]
    Cancelled,

    #[error(transparent)]
    Domain(#[from] DomainError),
}
