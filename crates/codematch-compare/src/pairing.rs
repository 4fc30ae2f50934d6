//! Enumerating every pairing of files in a built index.

use std::cmp::Ordering;

use codematch_core::Cancellation;
use codematch_core::DomainError;
use codematch_index::BuiltIndex;

use crate::pair::{self, Pair};

/// Enumerate every unordered pair of distinct files in `index`, sorted by
/// similarity descending, then by (longest desc, left id asc, right id
/// asc).
///
/// Checks `cancel` between pairs; on cancellation, returns
/// [`DomainError`] wrapped so the caller can map it to its own
/// `Cancelled` kind.
pub fn all_pairs<'a>(index: &'a BuiltIndex, cancel: &Cancellation) -> Result<Vec<Pair<'a>>, DomainError> {
    let entries: Vec<_> = index.entries().collect();
    let mut pairs = Vec::new();

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            if cancel.is_cancelled() {
                return Err(DomainError::InvariantViolation("analyze cancelled during pairing".into()));
            }
            pairs.push(pair::compute(index, entries[i], entries[j]));
        }
    }

    pairs.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.longest.cmp(&a.longest))
            .then_with(|| a.left.file.id().cmp(&b.left.file.id()))
            .then_with(|| a.right.file.id().cmp(&b.right.file.id()))
    });

    Ok(pairs)
}

/// Convenience wrapper for callers with no cancellation token: a fresh,
/// never-cancelled [`Cancellation`] cannot yield an error.
#[must_use]
pub fn all_pairs_uncancelled(index: &BuiltIndex) -> Vec<Pair<'_>> {
    all_pairs(index, &Cancellation::new()).expect("a fresh token is never cancelled")
}

#[cfg(test)]
mod tests {
    use super::*;
    use codematch_core::{FileId, Region, SourceFile, TokenizedFile};
    use codematch_index::FingerprintIndex;

    fn file(id: u64, tokens: &[&str]) -> TokenizedFile {
        let src = SourceFile::new(FileId::new(id), format!("f{id}.py"), tokens.join(" "));
        let mapping = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| Region::new(0, i as u32, 0, (i + t.len()) as u32))
            .collect();
        TokenizedFile::new(src, tokens.iter().map(|t| t.to_string()).collect(), mapping)
    }

    #[test]
    fn identical_files_yield_similarity_one() {
        let tokens = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let mut index = FingerprintIndex::new(3, 2, false);
        index.add_files(vec![file(0, &tokens), file(1, &tokens)]);
        let built = index.build();
        let pairs = all_pairs(&built, &Cancellation::new()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert!((pairs[0].similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_files_yield_similarity_zero() {
        let mut index = FingerprintIndex::new(2, 2, false);
        index.add_files(vec![file(0, &["a", "b", "c"]), file(1, &["x", "y", "z"])]);
        let built = index.build();
        let pairs = all_pairs(&built, &Cancellation::new()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].similarity, 0.0);
        assert_eq!(pairs[0].longest, 0);
    }

    #[test]
    fn cancellation_aborts_pairing() {
        let mut index = FingerprintIndex::new(2, 2, false);
        index.add_files(vec![file(0, &["a", "b"]), file(1, &["a", "b"]), file(2, &["a", "b"])]);
        let built = index.build();
        let cancel = Cancellation::new();
        cancel.cancel();
        assert!(all_pairs(&built, &cancel).is_err());
    }
}
