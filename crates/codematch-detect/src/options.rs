//! Tunable parameters for a single [`crate::Detector::analyze`] run.

use crate::error::DetectError;

/// Configuration for one analysis run.
///
/// `max_fingerprint_count` and `max_fingerprint_percentage` both express
/// the "too common" cutoff; when both are set, `max_fingerprint_count`
/// wins. The percentage is resolved against the number of files that
/// survive language filtering, not the raw input count.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorOptions {
    /// Language name (as accepted by `codematch_lang::Language::from_name`).
    /// `None` auto-detects from the first file's extension.
    pub language: Option<String>,
    pub kgram_length: usize,
    pub kgrams_in_window: usize,
    pub kgram_data: bool,
    pub include_comments: bool,
    pub max_fingerprint_count: Option<usize>,
    pub max_fingerprint_percentage: Option<f64>,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            language: None,
            kgram_length: 23,
            kgrams_in_window: 17,
            kgram_data: false,
            include_comments: false,
            max_fingerprint_count: None,
            max_fingerprint_percentage: None,
        }
    }
}

impl DetectorOptions {
    /// Explicit language name, overriding extension-based auto-detection.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// The winnow k-gram size (spec `k`).
    #[must_use]
    pub fn with_kgram_length(mut self, k: usize) -> Self {
        self.kgram_length = k;
        self
    }

    /// The winnow window size (spec `w`).
    #[must_use]
    pub fn with_window(mut self, w: usize) -> Self {
        self.kgrams_in_window = w;
        self
    }

    /// Retain each fingerprint's literal token slice, for display.
    #[must_use]
    pub fn with_kgram_data(mut self, enabled: bool) -> Self {
        self.kgram_data = enabled;
        self
    }

    /// Whether the tokenizer should keep comment nodes.
    #[must_use]
    pub fn with_include_comments(mut self, enabled: bool) -> Self {
        self.include_comments = enabled;
        self
    }

    /// Absolute cutoff on distinct-file count per fingerprint.
    #[must_use]
    pub fn with_max_fingerprint_count(mut self, max: usize) -> Self {
        self.max_fingerprint_count = Some(max);
        self
    }

    /// Fractional cutoff (of the filtered file count), used only when
    /// `max_fingerprint_count` is unset.
    #[must_use]
    pub fn with_max_fingerprint_percentage(mut self, max: f64) -> Self {
        self.max_fingerprint_percentage = Some(max);
        self
    }

    pub fn validate(&self) -> Result<(), DetectError> {
        if self.kgram_length == 0 {
            return Err(DetectError::InvalidConfiguration("kgram_length must be positive".into()));
        }
        if self.kgrams_in_window == 0 {
            return Err(DetectError::InvalidConfiguration(
                "kgrams_in_window must be positive".into(),
            ));
        }
        if let Some(p) = self.max_fingerprint_percentage {
            if !(0.0..=1.0).contains(&p) {
                return Err(DetectError::InvalidConfiguration(
                    "max_fingerprint_percentage must be between 0.0 and 1.0".into(),
                ));
            }
        }
        Ok(())
    }

    /// The effective "too common" file-count cutoff, given a corpus of
    /// `file_count` files surviving language filtering.
    #[must_use]
    pub fn effective_max_fingerprint_file_count(&self, file_count: usize) -> Option<usize> {
        self.max_fingerprint_count
            .or_else(|| self.max_fingerprint_percentage.map(|p| (p * file_count as f64).floor() as usize))
    }
}
