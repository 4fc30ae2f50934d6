//! The winnowing filter: picks a sparse, guaranteed subset of k-gram hashes
//! to keep as fingerprints.
//!
//! Within every window of `w` consecutive k-gram hashes, the minimum-valued
//! hash is selected; on ties the **rightmost** occurrence wins, which is
//! what gives winnowing its "prefer the newest match" and "never miss a
//! match at least `w` long" guarantees. A selected hash is only emitted
//! once even if it stays the window minimum across several slides.

use std::collections::VecDeque;

/// One hash selected by the filter, together with the k-gram index (the
/// index into the k-gram-hash array, i.e. the token position the k-gram
/// starts at) it was selected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinnowedHash {
    pub hash: u32,
    pub index: usize,
}

/// Selects local-minimum k-gram hashes over sliding windows of size `w`.
#[derive(Debug)]
pub struct WinnowFilter {
    window_size: usize,
    deque: VecDeque<WinnowedHash>,
    position: usize,
    last_emitted: Option<usize>,
}

impl WinnowFilter {
    /// Build a filter with the given window size (the spec's `w`).
    ///
    /// # Panics
    /// Panics if `window_size == 0`.
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        assert!(window_size > 0, "winnow window size must be positive");
        Self {
            window_size,
            deque: VecDeque::new(),
            position: 0,
            last_emitted: None,
        }
    }

    /// Feed the next k-gram hash. Returns a newly-selected fingerprint hash
    /// when one becomes determinable, `None` otherwise (still warming up,
    /// or the window minimum hasn't changed).
    pub fn push(&mut self, hash: u32) -> Option<WinnowedHash> {
        let index = self.position;
        self.position += 1;

        while let Some(front) = self.deque.front() {
            if front.index + self.window_size <= index {
                self.deque.pop_front();
            } else {
                break;
            }
        }

        while let Some(back) = self.deque.back() {
            if hash <= back.hash {
                self.deque.pop_back();
            } else {
                break;
            }
        }
        self.deque.push_back(WinnowedHash { hash, index });

        if index + 1 >= self.window_size {
            let min = *self.deque.front().expect("window is non-empty once filled");
            if self.last_emitted != Some(min.index) {
                self.last_emitted = Some(min.index);
                return Some(min);
            }
        }
        None
    }
}

/// Winnow a full sequence of k-gram hashes with window size `w`.
#[must_use]
pub fn winnow(kgram_hashes: &[u32], window_size: usize) -> Vec<WinnowedHash> {
    let mut filter = WinnowFilter::new(window_size);
    kgram_hashes
        .iter()
        .filter_map(|&h| filter.push(h))
        .collect()
}
