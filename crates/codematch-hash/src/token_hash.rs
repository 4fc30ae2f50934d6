//! Hashing a single token string down to a `u32`.
//!
//! A token's hash is a polynomial hash over its Unicode code units, modulo
//! `M`, with base `B`. Both constants are fixed so that hashes are stable
//! across runs and across processes — callers must never change them
//! without also invalidating any stored fingerprints.

/// Modulus shared with [`crate::rolling::RollingHash`]'s k-gram hash.
pub const M: u64 = 33_554_393;
/// Base used only for hashing individual tokens.
pub const B: u64 = 747_287;

/// Hash a single token's text into `[0, M)`.
#[must_use]
pub fn hash_token(token: &str) -> u32 {
    let mut hash = 0u64;
    for code_unit in token.chars() {
        hash = ((hash + u64::from(code_unit as u32)) * B) % M;
    }
    hash as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash_token("return"), hash_token("return"));
    }

    #[test]
    fn different_tokens_usually_hash_differently() {
        assert_ne!(hash_token("return"), hash_token("break"));
    }

    #[test]
    fn hash_is_always_within_modulus() {
        for t in ["", "x", "a_long_identifier_name", "123", "内容"] {
            assert!(u64::from(hash_token(t)) < M);
        }
    }

    #[test]
    fn empty_token_hashes_to_zero() {
        assert_eq!(hash_token(""), 0);
    }
}
