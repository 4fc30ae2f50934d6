//! Errors a tokenizer can raise for a single file.

use std::path::PathBuf;

/// Tokenization failed for one file. Callers treat this as non-fatal: the
/// file is dropped and the message surfaces as a report warning.
#[derive(Debug, thiserror::Error)]
pub enum TokenizerError {
    #[error("failed to parse {path}: {message}")]
    ParseFailure { path: PathBuf, message: String },

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}
