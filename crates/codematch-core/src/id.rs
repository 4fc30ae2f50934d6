//! Monotonic id allocation, scoped per [`IdGenerator`] instance rather than
//! process-wide.
//!
//! Spec §9 leaves the File.id/Pair.id allocation strategy open ("the
//! counter should be resettable per detector instance, or IDs should be
//! derived from input ordering"). This implementation takes the
//! resettable-counter branch: each `Detector` owns one `IdGenerator`, so
//! repeated `analyze` calls on fresh `Detector`s are reproducible without
//! reaching into global mutable state.

use std::sync::atomic::{AtomicU64, Ordering};

/// A simple monotonic counter, cheap to clone and share via `&self`.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Create a generator that yields `0, 1, 2, ...`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Allocate the next id.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
