//! Tokenized files and the fingerprint/occurrence shapes winnowing and
//! comparison build on top of them.

use crate::file::{FileId, SourceFile};
use crate::region::Region;

/// A source file after tokenization: a flat token stream plus a parallel
/// mapping from token index to the source region it came from.
///
/// `tokens.len() == mapping.len()` is an invariant maintained by every
/// tokenizer implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedFile {
    pub file: SourceFile,
    pub tokens: Vec<String>,
    pub mapping: Vec<Region>,
}

impl TokenizedFile {
    #[must_use]
    pub fn new(file: SourceFile, tokens: Vec<String>, mapping: Vec<Region>) -> Self {
        debug_assert_eq!(
            tokens.len(),
            mapping.len(),
            "token stream and region mapping must stay parallel"
        );
        Self {
            file,
            tokens,
            mapping,
        }
    }

    #[must_use]
    pub fn id(&self) -> FileId {
        self.file.id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The source region spanned by tokens `[start, stop]`, inclusive.
    ///
    /// # Panics
    /// Panics if `start > stop` or `stop` is out of bounds.
    #[must_use]
    pub fn region_for(&self, start: usize, stop: usize) -> Region {
        Region::merge_all(&self.mapping[start..=stop])
    }
}

/// A fingerprint selected by the winnow filter: a rolling hash together with
/// the closed k-gram-index range `[start, stop]` it covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub hash: u32,
    pub start: u32,
    pub stop: u32,
    /// The underlying k-gram's tokens, retained only when the caller asked
    /// for `kgram_data` (useful for debugging hash collisions).
    pub data: Option<Vec<String>>,
}

impl Fingerprint {
    #[must_use]
    pub fn new(hash: u32, start: u32, stop: u32, data: Option<Vec<String>>) -> Self {
        Self {
            hash,
            start,
            stop,
            data,
        }
    }
}

/// One occurrence of a shared fingerprint inside a specific file: the
/// k-gram-index range it covers and the source region it maps back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstRegion {
    pub start: u32,
    pub stop: u32,
    pub index: usize,
    pub location: Region,
    pub data: Option<Vec<String>>,
}

impl AstRegion {
    #[must_use]
    pub fn new(start: u32, stop: u32, index: usize, location: Region, data: Option<Vec<String>>) -> Self {
        Self {
            start,
            stop,
            index,
            location,
            data,
        }
    }
}
