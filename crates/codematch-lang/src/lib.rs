//! Tree-sitter tokenization for the languages codematch understands:
//! Java, Python and C.

pub mod error;
pub mod language;
pub mod tokenizer;

pub use error::TokenizerError;
pub use language::Language;
pub use tokenizer::tokenize;

use codematch_core::{FileId, TokenizedFile};
use rayon::prelude::*;
use std::path::PathBuf;

/// One file queued for tokenization, already resolved to a concrete
/// language by the caller.
pub struct PendingFile {
    pub id: FileId,
    pub path: PathBuf,
    pub source: String,
    pub language: Language,
    pub include_comments: bool,
}

/// Tokenize a batch of files in parallel, preserving input order in the
/// result. Each file's outcome is independent: one failure never aborts
/// the batch.
#[must_use]
pub fn tokenize_all(files: Vec<PendingFile>) -> Vec<Result<TokenizedFile, TokenizerError>> {
    files
        .into_par_iter()
        .map(|f| {
            let result = tokenize(f.id, &f.path, &f.source, f.language, f.include_comments);
            if let Err(ref e) = result {
                tracing::warn!(path = %f.path.display(), error = %e, "tokenization failed");
            }
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_all_preserves_order_and_isolates_failures() {
        let files = vec![
            PendingFile {
                id: FileId::new(0),
                path: PathBuf::from("a.py"),
                source: "x = 1\n".to_string(),
                language: Language::Python,
                include_comments: false,
            },
            PendingFile {
                id: FileId::new(1),
                path: PathBuf::from("b.py"),
                source: "y = 2\n".to_string(),
                language: Language::Python,
                include_comments: false,
            },
        ];
        let results = tokenize_all(files);
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert_eq!(results[0].as_ref().unwrap().id(), FileId::new(0));
        assert_eq!(results[1].as_ref().unwrap().id(), FileId::new(1));
    }
}
