//! The immutable, read-only view handed back from a finished analysis.

use codematch_compare::{all_pairs, all_pairs_uncancelled, build_fragments, Fragment, Pair};
use codematch_core::{Cancellation, DomainError};
use codematch_index::BuiltIndex;

use crate::summary::Summary;

/// Default similarity threshold for [`Report::suspicious_pairs`].
pub const DEFAULT_SUSPICIOUS_THRESHOLD: f64 = 0.5;
/// Default minimum occurrence count for [`Report::fragments`].
pub const DEFAULT_MIN_OCCURRENCES: usize = 1;

/// A finished analysis: the built index plus the bookkeeping (language,
/// warnings, and whether fingerprints retained literal token data) needed
/// to answer every query over it.
#[derive(Debug)]
pub struct Report {
    index: BuiltIndex,
    language: String,
    kgram_data: bool,
    warnings: Vec<String>,
}

impl Report {
    #[must_use]
    pub fn new(index: BuiltIndex, language: impl Into<String>, kgram_data: bool, warnings: Vec<String>) -> Self {
        Self {
            index,
            language: language.into(),
            kgram_data,
            warnings,
        }
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Every pair, sorted by similarity descending.
    #[must_use]
    pub fn pairs(&self) -> Vec<Pair<'_>> {
        all_pairs_uncancelled(&self.index)
    }

    /// Every pair, checking `cancel` between each one. Use this instead of
    /// [`Report::pairs`] when pairing a large corpus needs to be abortable.
    pub fn pairs_cancellable(&self, cancel: &Cancellation) -> Result<Vec<Pair<'_>>, DomainError> {
        all_pairs(&self.index, cancel)
    }

    /// The first `n` pairs by similarity.
    #[must_use]
    pub fn top_pairs(&self, n: usize) -> Vec<Pair<'_>> {
        let mut pairs = self.pairs();
        pairs.truncate(n);
        pairs
    }

    /// Pairs at or above `threshold` similarity.
    #[must_use]
    pub fn suspicious_pairs(&self, threshold: f64) -> Vec<Pair<'_>> {
        self.pairs().into_iter().filter(|p| p.similarity >= threshold).collect()
    }

    /// Fragments for a pair, using the index's default minimum occurrence
    /// count.
    #[must_use]
    pub fn fragments(&self, pair: &Pair<'_>) -> Vec<Fragment> {
        build_fragments(pair, DEFAULT_MIN_OCCURRENCES, self.kgram_data)
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        let pairs = self.pairs();
        let total_pairs = pairs.len();
        let suspicious_pairs = pairs.iter().filter(|p| p.similarity >= DEFAULT_SUSPICIOUS_THRESHOLD).count();
        let average_similarity = if total_pairs == 0 {
            0.0
        } else {
            pairs.iter().map(|p| p.similarity).sum::<f64>() / total_pairs as f64
        };
        let max_similarity = pairs.first().map_or(0.0, |p| p.similarity);

        Summary {
            total_files: self.index.len(),
            total_pairs,
            suspicious_pairs,
            average_similarity,
            max_similarity,
            language: self.language.clone(),
            warnings: self.warnings.clone(),
        }
    }
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

    fn sample_report() -> Report {
        let tokens = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let mut index = FingerprintIndex::new(3, 2, false);
        index.add_files(vec![file(0, &tokens), file(1, &tokens)]);
        Report::new(index.build(), "python", false, vec!["dropped x.txt".into()])
    }

    #[test]
    fn summary_reflects_the_single_identical_pair() {
        let report = sample_report();
        let summary = report.summary();
        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.total_pairs, 1);
        assert_eq!(summary.suspicious_pairs, 1);
        assert!((summary.max_similarity - 1.0).abs() < 1e-9);
        assert_eq!(summary.warnings, vec!["dropped x.txt".to_string()]);
    }

    #[test]
    fn top_pairs_truncates() {
        let report = sample_report();
        assert_eq!(report.top_pairs(0).len(), 0);
        assert_eq!(report.top_pairs(10).len(), 1);
    }

    #[test]
    fn suspicious_pairs_respects_threshold() {
        let report = sample_report();
        assert_eq!(report.suspicious_pairs(0.99).len(), 1);
        assert_eq!(report.suspicious_pairs(1.01).len(), 0);
    }
}
