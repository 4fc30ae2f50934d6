//! The inverted fingerprint index: shared fingerprints, per-file entries,
//! and the too-common cutoff that turns both into `ignored` sets.

pub mod file_entry;
pub mod index;
pub mod shared_fingerprint;

pub use file_entry::FileEntry;
pub use index::{BuiltIndex, FingerprintIndex};
pub use shared_fingerprint::{Occurrence, SharedFingerprint};
