//! File identity: the stable handle a source file keeps through tokenizing,
//! indexing and comparing.

use std::path::{Path, PathBuf};

/// A stable, per-[`crate::IdGenerator`] integer identity for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub u64);

impl FileId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A source file as handed to the detector: identity, path, raw content and
/// any caller-supplied metadata (e.g. a label used in reports).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub id: FileId,
    pub path: PathBuf,
    pub content: String,
    pub metadata: Option<String>,
}

impl SourceFile {
    #[must_use]
    pub fn new(id: FileId, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            id,
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

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines in `content`, counting a trailing partial line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        if self.content.is_empty() {
            return 0;
        }
        let newlines = self.content.matches('\n').count();
        if self.content.ends_with('\n') {
            newlines
        } else {
            newlines + 1
        }
    }

    /// Lowercased file extension, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}
