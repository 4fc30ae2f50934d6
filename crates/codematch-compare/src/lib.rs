//! Pairwise similarity and fragment reconstruction: turns a built
//! fingerprint index into [`Pair`] and [`Fragment`] views.

pub mod fragment;
pub mod kgram;
pub mod pair;
pub mod pairing;

pub use fragment::{build_fragments, Fragment, PairedOccurrence};
pub use kgram::Kgram;
pub use pair::{compute as compute_pair, Pair};
pub use pairing::{all_pairs, all_pairs_uncancelled};
