//! The façade: turns a batch of raw files into a finished [`Report`].

use codematch_core::{Cancellation, FileId, IdGenerator};
use codematch_index::FingerprintIndex;
use codematch_lang::{tokenize, Language};
use codematch_report::Report;

use crate::error::DetectError;
use crate::input::FileInput;
use crate::options::DetectorOptions;

/// Owns the id sequence for a run; construct one `Detector` per logical
/// analysis session so that file ids stay reproducible across `analyze`
/// calls on a fresh instance.
#[derive(Debug, Default)]
pub struct Detector {
    ids: IdGenerator,
}

impl Detector {
    #[must_use]
    pub fn new() -> Self {
        Self { ids: IdGenerator::new() }
    }

    /// Run one analysis: resolve the language, filter and tokenize the
    /// input files, build the fingerprint index, and return a [`Report`]
    /// over it.
    ///
    /// `ignored_file`, if given, is tokenized and fingerprinted like any
    /// other file, but every fingerprint it contributes is excluded from
    /// similarity scoring across the whole corpus and the file itself
    /// never appears in a pair.
    pub fn analyze(
        &self,
        files: Vec<FileInput>,
        ignored_file: Option<FileInput>,
        options: &DetectorOptions,
        cancel: &Cancellation,
    ) -> Result<Report, DetectError> {
        options.validate()?;

        let language = self.resolve_language(&files, options)?;

        let original_count = files.len();
        let filtered: Vec<FileInput> = files
            .into_iter()
            .filter(|f| Language::from_path(&f.path) == Some(language))
            .collect();

        let mut warnings = Vec::new();
        let dropped = original_count - filtered.len();
        if dropped > 0 {
            warnings.push(format!(
                "dropped {dropped} file(s) not matching language '{}'",
                language.name()
            ));
        }

        if filtered.len() < 2 {
            return Err(DetectError::InsufficientFiles(filtered.len()));
        }

        let cutoff = options.effective_max_fingerprint_file_count(filtered.len());
        let mut index = FingerprintIndex::new(options.kgram_length, options.kgrams_in_window, options.kgram_data);
        index.update_max_fingerprint_file_count(cutoff);

        let mut tokenized = Vec::new();
        for input in filtered {
            if cancel.is_cancelled() {
                return Err(DetectError::Cancelled);
            }
            let id = FileId::new(self.ids.next_id());
            match tokenize(id, &input.path, &input.content, language, options.include_comments) {
                Ok(mut tf) => {
                    if let Some(metadata) = input.metadata {
                        tf.file.metadata = Some(metadata);
                    }
                    tokenized.push(tf);
                }
                Err(err) => {
                    tracing::warn!(path = %input.path.display(), error = %err, "skipping file that failed to tokenize");
                    warnings.push(format!("skipped {}: {err}", input.path.display()));
                }
            }
        }

        if tokenized.len() < 2 {
            return Err(DetectError::InsufficientFiles(tokenized.len()));
        }

        index.add_files(tokenized);

        if let Some(ignored) = ignored_file {
            if cancel.is_cancelled() {
                return Err(DetectError::Cancelled);
            }
            let id = FileId::new(self.ids.next_id());
            match tokenize(id, &ignored.path, &ignored.content, language, options.include_comments) {
                Ok(tf) => index.add_ignored_file(tf),
                Err(err) => {
                    tracing::warn!(path = %ignored.path.display(), error = %err, "ignored file failed to tokenize");
                    warnings.push(format!("ignored file {} failed to tokenize: {err}", ignored.path.display()));
                }
            }
        }

        let built = index.build();
        Ok(Report::new(built, language.name(), options.kgram_data, warnings))
    }

    fn resolve_language(&self, files: &[FileInput], options: &DetectorOptions) -> Result<Language, DetectError> {
        if let Some(name) = &options.language {
            return Language::from_name(name).ok_or(DetectError::UnsupportedLanguage);
        }
        let first = files.first().ok_or(DetectError::UnsupportedLanguage)?;
        Language::from_path(&first.path).ok_or(DetectError::UnsupportedLanguage)
    }
}
