//! The per-file view the index materializes once ingest is complete.

use std::collections::BTreeSet;

use codematch_core::{Fingerprint, TokenizedFile};

/// A file's fingerprints partitioned into the ones that count toward
/// similarity (`shared`) and the ones filtered out as boilerplate or too
/// common (`ignored`), both keyed by fingerprint hash.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub file: TokenizedFile,
    pub kgrams: Vec<Fingerprint>,
    pub shared: BTreeSet<u32>,
    pub ignored: BTreeSet<u32>,
}

impl FileEntry {
    #[must_use]
    pub fn new(file: TokenizedFile, kgrams: Vec<Fingerprint>) -> Self {
        Self {
            file,
            kgrams,
            shared: BTreeSet::new(),
            ignored: BTreeSet::new(),
        }
    }
}
