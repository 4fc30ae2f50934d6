//! The central inverted index: ingests tokenized files, enforces the
//! too-common cutoff, and hands back per-file views for pairing.

use std::collections::BTreeMap;

use codematch_core::{AstRegion, FileId, Fingerprint, TokenizedFile};
use codematch_hash::fingerprint_tokens;

use crate::file_entry::FileEntry;
use crate::shared_fingerprint::SharedFingerprint;

/// Write-phase handle: ingest every file, then call [`FingerprintIndex::build`]
/// to get the read-only [`BuiltIndex`]. Splitting the two phases at the type
/// level makes the "no read may overlap a write" rule a compile-time fact
/// rather than a runtime contract.
#[derive(Debug)]
pub struct FingerprintIndex {
    k: usize,
    w: usize,
    kgram_data: bool,
    max_fingerprint_file_count: Option<usize>,
    fingerprints: BTreeMap<u32, SharedFingerprint>,
    pending: BTreeMap<FileId, (TokenizedFile, Vec<Fingerprint>)>,
    order: Vec<FileId>,
}

impl FingerprintIndex {
    /// Build an empty index with the given winnow parameters.
    ///
    /// # Panics
    /// Panics if `k == 0` or `w == 0`.
    #[must_use]
    pub fn new(k: usize, w: usize, kgram_data: bool) -> Self {
        assert!(k > 0 && w > 0, "k and w must be positive");
        Self {
            k,
            w,
            kgram_data,
            max_fingerprint_file_count: None,
            fingerprints: BTreeMap::new(),
            pending: BTreeMap::new(),
            order: Vec::new(),
        }
    }

    /// Set the "too common" cutoff. `None` disables it. Must be called
    /// before any `add_*` call.
    pub fn update_max_fingerprint_file_count(&mut self, n: Option<usize>) {
        debug_assert!(
            self.pending.is_empty() && self.fingerprints.is_empty(),
            "max fingerprint file count must be set before ingest starts"
        );
        self.max_fingerprint_file_count = n;
    }

    fn entry_for_hash(&mut self, hash: u32) -> &mut SharedFingerprint {
        self.fingerprints
            .entry(hash)
            .or_insert_with(|| SharedFingerprint::new(hash))
    }

    /// Ingest files that participate in pairing.
    pub fn add_files(&mut self, files: Vec<TokenizedFile>) {
        for file in files {
            let kgrams = fingerprint_tokens(&file.tokens, self.k, self.w, self.kgram_data);
            let id = file.id();
            for (emission_index, fp) in kgrams.iter().enumerate() {
                let location = file.region_for(fp.start as usize, fp.stop as usize);
                let side = AstRegion::new(fp.start, fp.stop, emission_index, location, fp.data.clone());
                self.entry_for_hash(fp.hash).add_occurrence(id, side);
            }
            self.pending.insert(id, (file, kgrams));
            self.order.push(id);
        }
    }

    /// Ingest a boilerplate file: every fingerprint it emits is marked
    /// ignored everywhere in the corpus, but the file itself never
    /// participates in pairing.
    pub fn add_ignored_file(&mut self, file: TokenizedFile) {
        let kgrams = fingerprint_tokens(&file.tokens, self.k, self.w, self.kgram_data);
        for fp in &kgrams {
            self.entry_for_hash(fp.hash).mark_ignored();
        }
    }

    /// Finalize ingest: derive each file's `shared`/`ignored` fingerprint
    /// sets against the fully-populated corpus.
    #[must_use]
    pub fn build(self) -> BuiltIndex {
        let max_count = self.max_fingerprint_file_count;
        let fingerprints = self.fingerprints;
        let mut pending = self.pending;
        let mut entries = BTreeMap::new();

        for id in self.order {
            let (file, kgrams) = pending.remove(&id).expect("every ordered id was ingested");
            let mut entry = FileEntry::new(file, kgrams);
            for fp in &entry.kgrams {
                let sf = &fingerprints[&fp.hash];
                let too_common = max_count.is_some_and(|max| sf.file_count() > max);
                if sf.is_ignored() || too_common {
                    entry.ignored.insert(fp.hash);
                } else {
                    entry.shared.insert(fp.hash);
                }
            }
            entries.insert(id, entry);
        }

        BuiltIndex { entries, fingerprints }
    }
}

/// Read-only view produced by [`FingerprintIndex::build`].
#[derive(Debug)]
pub struct BuiltIndex {
    entries: BTreeMap<FileId, FileEntry>,
    fingerprints: BTreeMap<u32, SharedFingerprint>,
}

impl BuiltIndex {
    #[must_use]
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn entry(&self, id: FileId) -> Option<&FileEntry> {
        self.entries.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn fingerprint(&self, hash: u32) -> Option<&SharedFingerprint> {
        self.fingerprints.get(&hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codematch_core::{FileId as Id, Region, SourceFile};

    fn file(id: u64, tokens: &[&str]) -> TokenizedFile {
        let src = SourceFile::new(Id::new(id), format!("f{id}.py"), tokens.join(" "));
        let mapping = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| Region::new(0, i as u32, 0, (i + t.len()) as u32))
            .collect();
        TokenizedFile::new(src, tokens.iter().map(|t| t.to_string()).collect(), mapping)
    }

    #[test]
    fn shared_fingerprint_is_created_once_per_hash() {
        let mut index = FingerprintIndex::new(2, 2, false);
        let f1 = file(0, &["a", "b", "c", "d"]);
        let f2 = file(1, &["a", "b", "c", "d"]);
        index.add_files(vec![f1, f2]);
        let built = index.build();
        let e0 = built.entry(Id::new(0)).unwrap();
        for hash in &e0.shared {
            assert!(built.fingerprint(*hash).is_some());
        }
    }

    #[test]
    fn ignored_file_marks_fingerprints_without_adding_occurrences() {
        let mut index = FingerprintIndex::new(2, 2, false);
        let ignored = file(99, &["a", "b", "c"]);
        let f1 = file(0, &["a", "b", "c", "d"]);
        index.add_ignored_file(ignored);
        index.add_files(vec![f1]);
        let built = index.build();
        let e0 = built.entry(Id::new(0)).unwrap();
        assert!(built.entry(Id::new(99)).is_none());
        assert!(!e0.ignored.is_empty());
        assert!(e0.shared.is_empty() || e0.shared.len() < e0.kgrams.len());
    }

    #[test]
    fn too_common_fingerprint_is_moved_to_ignored() {
        let mut index = FingerprintIndex::new(1, 1, false);
        index.update_max_fingerprint_file_count(Some(1));
        let files: Vec<_> = (0..3).map(|i| file(i, &["shared_token"])).collect();
        index.add_files(files);
        let built = index.build();
        for id in 0..3u64 {
            let entry = built.entry(Id::new(id)).unwrap();
            assert!(entry.shared.is_empty());
            assert_eq!(entry.ignored.len(), 1);
        }
    }
}
