//! Token hashing, rolling k-gram hashing and winnowing.
//!
//! These three pieces compose: [`token_hash::hash_token`] turns a token
//! string into a `u32`, [`rolling::RollingHash`] slides a window of `k`
//! token-hashes into a single k-gram hash, and [`winnow::WinnowFilter`]
//! selects the subset of k-gram hashes that become fingerprints.

pub mod fingerprint;
pub mod rolling;
pub mod token_hash;
pub mod winnow;

pub use fingerprint::fingerprint_tokens;
pub use rolling::RollingHash;
pub use token_hash::hash_token;
pub use winnow::{WinnowFilter, WinnowedHash};
