//! Supported source languages and extension-based detection.

use std::path::Path;

/// A language this crate knows how to tokenize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Java,
    Python,
    C,
}

impl Language {
    /// Detect a language from a (case-insensitive) file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "java" => Some(Self::Java),
            "py" => Some(Self::Python),
            "c" | "h" => Some(Self::C),
            _ => None,
        }
    }

    /// Detect a language from a file path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Parse a language from its display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "java" => Some(Self::Java),
            "python" => Some(Self::Python),
            "c" => Some(Self::C),
            _ => None,
        }
    }

    /// Canonical lowercase name, as accepted by [`Language::from_name`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Python => "python",
            Self::C => "c",
        }
    }

    /// The tree-sitter grammar for this language.
    #[must_use]
    pub fn ts_language(self) -> tree_sitter::Language {
        match self {
            Self::Java => tree_sitter_java::LANGUAGE.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
            Self::C => tree_sitter_c::LANGUAGE.into(),
        }
    }

    /// Node kinds treated as comments for this grammar, skipped when the
    /// caller tokenizes with `include_comments = false`.
    #[must_use]
    pub fn comment_kinds(self) -> &'static [&'static str] {
        match self {
            Self::Java => &["line_comment", "block_comment"],
            Self::Python => &["comment"],
            Self::C => &["comment"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_all_three_supported_extensions() {
        assert_eq!(Language::from_extension("java"), Some(Language::Java));
        assert_eq!(Language::from_extension("PY"), Some(Language::Python));
        assert_eq!(Language::from_extension("c"), Some(Language::C));
        assert_eq!(Language::from_extension("h"), Some(Language::C));
    }

    #[test]
    fn unknown_extension_is_none() {
        assert_eq!(Language::from_extension("rs"), None);
    }

    #[test]
    fn from_path_reads_the_extension() {
        let p = PathBuf::from("src/Main.java");
        assert_eq!(Language::from_path(&p), Some(Language::Java));
    }

    #[test]
    fn name_round_trips_through_from_name() {
        for lang in [Language::Java, Language::Python, Language::C] {
            assert_eq!(Language::from_name(lang.name()), Some(lang));
        }
    }

    #[test]
    fn from_path_resolves_a_real_file_on_disk_by_its_extension() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("Solution.java");
        std::fs::write(&path, "class Solution {}").expect("failed to write temp file");
        assert_eq!(Language::from_path(&path), Some(Language::Java));
    }
}
