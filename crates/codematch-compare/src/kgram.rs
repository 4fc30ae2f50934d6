//! The per-side occurrence sequence a [`crate::pair::Pair`] is built from.

/// One occurrence position inside a file's emitted-fingerprint stream,
/// reduced to just what the longest-common-substring scan needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kgram {
    pub hash: u32,
    pub index: usize,
}
