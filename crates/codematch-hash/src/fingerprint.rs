//! Wires token hashing, rolling k-gram hashing and winnowing together into
//! the single entry point the index actually calls: turn a token stream
//! into a fingerprint stream.

use codematch_core::Fingerprint;

use crate::rolling::RollingHash;
use crate::token_hash::hash_token;
use crate::winnow::WinnowFilter;

/// Select fingerprints from a token stream.
///
/// `k` is the k-gram size, `w` the winnow window size. When `kgram_data` is
/// true, each emitted fingerprint retains the literal `k` tokens it covers.
///
/// # Panics
/// Panics if `k == 0` or `w == 0`.
#[must_use]
pub fn fingerprint_tokens(tokens: &[String], k: usize, w: usize, kgram_data: bool) -> Vec<Fingerprint> {
    let mut roller = RollingHash::new(k);
    let mut filter = WinnowFilter::new(w);
    let mut fingerprints = Vec::new();

    for token in tokens {
        let token_hash = hash_token(token);
        let Some(kgram_hash) = roller.roll(token_hash) else {
            continue;
        };
        if let Some(selected) = filter.push(kgram_hash) {
            let kstart = selected.index;
            let stop = kstart + k - 1;
            let data = if kgram_data {
                Some(tokens[kstart..=stop].to_vec())
            } else {
                None
            };
            fingerprints.push(Fingerprint::new(selected.hash, kstart as u32, stop as u32, data));
        }
    }

    fingerprints
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn short_input_yields_no_fingerprints() {
        let tokens = toks(&["a", "b"]);
        assert!(fingerprint_tokens(&tokens, 5, 4, false).is_empty());
    }

    #[test]
    fn identical_token_streams_produce_identical_fingerprints() {
        let a = toks(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let b = a.clone();
        let fa = fingerprint_tokens(&a, 3, 2, false);
        let fb = fingerprint_tokens(&b, 3, 2, false);
        assert_eq!(fa, fb);
    }

    #[test]
    fn stop_is_start_plus_k_minus_one() {
        let tokens = toks(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        for fp in fingerprint_tokens(&tokens, 4, 3, false) {
            assert_eq!(fp.stop, fp.start + 3);
        }
    }

    #[test]
    fn kgram_data_carries_the_literal_tokens() {
        let tokens = toks(&["a", "b", "c", "d", "e"]);
        let fps = fingerprint_tokens(&tokens, 2, 2, true);
        for fp in &fps {
            let data = fp.data.as_ref().unwrap();
            assert_eq!(data.len(), 2);
            assert_eq!(data.as_slice(), &tokens[fp.start as usize..=fp.stop as usize]);
        }
    }
}
