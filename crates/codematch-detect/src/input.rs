//! The caller-facing shape of a file handed to [`crate::Detector::analyze`].

use std::path::PathBuf;

/// A file the caller wants analyzed. The [`codematch_core::FileId`] is
/// assigned internally by the [`crate::Detector`], not supplied here, so
/// that ids stay a monotonic sequence scoped to one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInput {
    pub path: PathBuf,
    pub content: String,
    pub metadata: Option<String>,
}

impl FileInput {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            metadata: None,
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }
}
