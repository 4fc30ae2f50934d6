//! A fingerprint hash observed somewhere in the corpus, with the set of
//! files it occurs in.

use std::collections::BTreeMap;

use codematch_core::{AstRegion, FileId};

/// One appearance of a fingerprint in a specific file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub file: FileId,
    pub side: AstRegion,
}

/// The node the inverted index is built from: one entry per distinct
/// fingerprint hash observed across every ingested file (including the
/// ignored file, if any).
///
/// Owned exclusively by the [`crate::FingerprintIndex`] that created it;
/// [`FileEntry`](crate::FileEntry) only ever refers to one by hash.
#[derive(Debug, Clone)]
pub struct SharedFingerprint {
    pub hash: u32,
    occurrences_by_file: BTreeMap<FileId, Vec<Occurrence>>,
    ignored: bool,
}

impl SharedFingerprint {
    #[must_use]
    pub fn new(hash: u32) -> Self {
        Self {
            hash,
            occurrences_by_file: BTreeMap::new(),
            ignored: false,
        }
    }

    pub fn add_occurrence(&mut self, file: FileId, side: AstRegion) {
        self.occurrences_by_file
            .entry(file)
            .or_default()
            .push(Occurrence { file, side });
    }

    /// Flag this fingerprint as not contributing to similarity. Monotonic:
    /// once ignored, always ignored.
    pub fn mark_ignored(&mut self) {
        self.ignored = true;
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    #[must_use]
    pub fn occurrences_of(&self, file: FileId) -> &[Occurrence] {
        self.occurrences_by_file
            .get(&file)
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.occurrences_by_file.len()
    }
}
