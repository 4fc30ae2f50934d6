//! A rolling hash over a fixed-size window of token hashes, producing one
//! k-gram hash per window position in `O(1)` amortized per token.

use std::collections::VecDeque;

/// Modulus shared with [`crate::token_hash`]'s per-token hash.
pub const M: u64 = 33_554_393;
/// Base used to combine token hashes into a k-gram hash.
pub const B: u64 = 4_194_301;

fn mod_pow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1u64;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        exp >>= 1;
        base = base * base % modulus;
    }
    result
}

/// Slides a window of `k` token hashes, maintaining a running polynomial
/// hash of the window's contents.
///
/// Each call to [`RollingHash::roll`] costs one multiplication, one
/// addition and one subtraction regardless of `k` — the outgoing token's
/// contribution is cancelled with a precomputed `max_base = M - B^k mod M`
/// rather than recomputed from scratch.
#[derive(Debug, Clone)]
pub struct RollingHash {
    k: usize,
    max_base: u64,
    hash: u64,
    window: VecDeque<u32>,
}

impl RollingHash {
    /// Build a rolling hash over windows of `k` token hashes.
    ///
    /// # Panics
    /// Panics if `k == 0`.
    #[must_use]
    pub fn new(k: usize) -> Self {
        assert!(k > 0, "rolling hash window size must be positive");
        let b_pow_k = mod_pow(B, k as u64, M);
        Self {
            k,
            max_base: (M - b_pow_k) % M,
            hash: 0,
            window: VecDeque::with_capacity(k),
        }
    }

    /// Feed the next token hash. Returns the k-gram hash once the window
    /// has filled (i.e. from the `k`-th call onward); `None` during warm-up.
    pub fn roll(&mut self, token_hash: u32) -> Option<u32> {
        if self.window.len() == self.k {
            let outgoing = u64::from(self.window.pop_front().expect("window is full"));
            self.hash = (self.hash * B + u64::from(token_hash) + outgoing * self.max_base) % M;
        } else {
            self.hash = (self.hash * B + u64::from(token_hash)) % M;
        }
        self.window.push_back(token_hash);

        if self.window.len() == self.k {
            Some(self.hash as u32)
        } else {
            None
        }
    }

    /// Window size this hash was constructed with.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }
}

/// Compute every k-gram hash for a full token-hash sequence in one pass.
///
/// Returns one hash per window start position `0..=tokens.len() - k`, or an
/// empty vector if `tokens.len() < k`.
#[must_use]
pub fn rolling_hashes(token_hashes: &[u32], k: usize) -> Vec<u32> {
    if token_hashes.len() < k {
        return Vec::new();
    }
    let mut roller = RollingHash::new(k);
    let mut out = Vec::with_capacity(token_hashes.len() - k + 1);
    for &h in token_hashes {
        if let Some(kgram_hash) = roller.roll(h) {
            out.push(kgram_hash);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_hash::hash_token;

    #[test]
    fn warm_up_yields_none_until_window_fills() {
        let mut roller = RollingHash::new(3);
        assert_eq!(roller.roll(1), None);
        assert_eq!(roller.roll(2), None);
        assert!(roller.roll(3).is_some());
    }

    #[test]
    fn rolling_hash_matches_recomputing_from_scratch() {
        let tokens: Vec<u32> = ["a", "b", "c", "d", "e"].iter().map(|t| hash_token(t)).collect();
        let k = 3;
        let rolled = rolling_hashes(&tokens, k);

        let recomputed: Vec<u32> = (0..=tokens.len() - k)
            .map(|i| {
                let mut h = 0u64;
                for &t in &tokens[i..i + k] {
                    h = (h * B + u64::from(t)) % M;
                }
                h as u32
            })
            .collect();

        assert_eq!(rolled, recomputed);
    }

    #[test]
    fn fewer_tokens_than_k_yields_no_hashes() {
        assert!(rolling_hashes(&[1, 2], 5).is_empty());
    }

    #[test]
    fn single_token_window_is_identity() {
        let tokens = [1u32, 2, 3];
        assert_eq!(rolling_hashes(&tokens, 1), vec![1, 2, 3]);
    }
}
