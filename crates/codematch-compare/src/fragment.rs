//! Reconstructing maximal contiguous matching fragments between two files.

use std::collections::HashMap;

use codematch_core::{AstRegion, Range, Region};

use crate::pair::Pair;

/// A single matched pair of occurrences, one per side, on the same
/// fingerprint.
#[derive(Debug, Clone)]
pub struct PairedOccurrence {
    pub left: AstRegion,
    pub right: AstRegion,
    pub fingerprint: u32,
}

/// A maximal contiguous run of matched occurrences between two files.
/// Immutable once returned from [`build_fragments`].
#[derive(Debug, Clone)]
pub struct Fragment {
    pub pairs: Vec<PairedOccurrence>,
    pub left_kgrams: Range,
    pub right_kgrams: Range,
    pub left_selection: Region,
    pub right_selection: Region,
    pub merged_data: Option<Vec<String>>,
    /// Last left-side token index folded into `merged_data`, tracked
    /// separately from `left_kgrams` since that range counts k-gram
    /// (emission) indices, not token positions.
    merged_stop: Option<u32>,
}

impl Fragment {
    fn seed(p: PairedOccurrence, kgram_data: bool) -> Self {
        let left_kgrams = Range::point(p.left.index as u32);
        let right_kgrams = Range::point(p.right.index as u32);
        let left_selection = p.left.location;
        let right_selection = p.right.location;
        let merged_data = if kgram_data { p.left.data.clone() } else { None };
        let merged_stop = if kgram_data { Some(p.left.stop) } else { None };
        Self {
            pairs: vec![p],
            left_kgrams,
            right_kgrams,
            left_selection,
            right_selection,
            merged_data,
            merged_stop,
        }
    }

    fn extendable(&self, p: &PairedOccurrence) -> bool {
        self.left_kgrams.to + 1 == p.left.index as u32 && self.right_kgrams.to + 1 == p.right.index as u32
    }

    fn extend_with(&mut self, p: PairedOccurrence, kgram_data: bool) {
        debug_assert!(self.extendable(&p), "fragment is not extendable with this occurrence");
        self.left_kgrams = self.left_kgrams.merge(&Range::point(p.left.index as u32));
        self.right_kgrams = self.right_kgrams.merge(&Range::point(p.right.index as u32));
        self.left_selection = self.left_selection.merge(&p.left.location);
        self.right_selection = self.right_selection.merge(&p.right.location);
        if kgram_data {
            let (start, stop) = (p.left.start, p.left.stop);
            self.merge_data(p.left.data.as_ref(), start, stop);
        }
        self.pairs.push(p);
    }

    fn extend_with_fragment(&mut self, mut other: Fragment) {
        debug_assert!(
            self.left_kgrams.to + 1 == other.left_kgrams.from && self.right_kgrams.to + 1 == other.right_kgrams.from,
            "fragments being merged must be exactly adjacent"
        );
        self.left_kgrams = self.left_kgrams.merge(&other.left_kgrams);
        self.right_kgrams = self.right_kgrams.merge(&other.right_kgrams);
        self.left_selection = self.left_selection.merge(&other.left_selection);
        self.right_selection = self.right_selection.merge(&other.right_selection);
        if let (Some(mine), Some(theirs)) = (self.merged_data.take(), other.merged_data.take()) {
            let mut merged = mine;
            merged.extend(theirs);
            self.merged_data = Some(merged);
            self.merged_stop = other.merged_stop.or(self.merged_stop);
        }
        self.pairs.append(&mut other.pairs);
    }

    /// Fold one occurrence's token slice into `merged_data`, inserting `"?"`
    /// placeholders for any gap since the last included token, or skipping
    /// the overlapping prefix if the new slice overlaps what's there.
    fn merge_data(&mut self, data: Option<&Vec<String>>, start: u32, stop: u32) {
        let Some(data) = data else {
            self.merged_data = None;
            self.merged_stop = None;
            return;
        };
        let Some(existing) = self.merged_data.as_mut() else {
            return;
        };
        let prev_stop = self.merged_stop.unwrap_or(start.saturating_sub(1));
        if start > prev_stop + 1 {
            for _ in 0..(start - prev_stop - 1) {
                existing.push("?".to_string());
            }
            existing.extend(data.iter().cloned());
        } else if start <= prev_stop {
            let overlap = (prev_stop - start + 1) as usize;
            if overlap < data.len() {
                existing.extend(data[overlap..].iter().cloned());
            }
        } else {
            existing.extend(data.iter().cloned());
        }
        self.merged_stop = Some(stop.max(prev_stop));
    }
}

/// Build the maximal contiguous fragments for a pair, squashing any
/// fragment fully contained (on both sides) within another, and dropping
/// fragments shorter than `min_occurrences`.
#[must_use]
pub fn build_fragments(pair: &Pair<'_>, min_occurrences: usize, kgram_data: bool) -> Vec<Fragment> {
    let mut occurrences = collect_paired_occurrences(pair);
    occurrences.sort_by_key(|p| (p.left.index, p.right.index));

    let mut arena: Vec<Option<Fragment>> = Vec::new();
    let mut fragment_start: HashMap<(usize, usize), usize> = HashMap::new();
    let mut fragment_end: HashMap<(usize, usize), usize> = HashMap::new();

    for p in occurrences {
        let start_key = (p.left.index, p.right.index);
        let end_key = (p.left.index + 1, p.right.index + 1);

        let current = if let Some(idx) = fragment_end.remove(&start_key) {
            arena[idx]
                .as_mut()
                .expect("fragment_end only points at live fragments")
                .extend_with(p, kgram_data);
            idx
        } else {
            let idx = arena.len();
            arena.push(Some(Fragment::seed(p, kgram_data)));
            fragment_start.insert(start_key, idx);
            idx
        };

        if let Some(other_idx) = fragment_start.remove(&end_key) {
            if other_idx != current {
                let other = arena[other_idx].take().expect("fragment_start only points at live fragments");
                let other_trailing = (other.left_kgrams.to as usize + 1, other.right_kgrams.to as usize + 1);
                fragment_end.remove(&other_trailing);
                arena[current]
                    .as_mut()
                    .expect("current fragment is always live here")
                    .extend_with_fragment(other);
                fragment_end.insert(other_trailing, current);
            }
        } else {
            let trailing = {
                let f = arena[current].as_ref().expect("current fragment is always live here");
                (f.left_kgrams.to as usize + 1, f.right_kgrams.to as usize + 1)
            };
            fragment_end.insert(trailing, current);
        }
    }

    let fragments: Vec<Fragment> = arena.into_iter().flatten().collect();
    let squashed = squash(fragments);

    let mut result: Vec<Fragment> = squashed.into_iter().filter(|f| f.pairs.len() >= min_occurrences).collect();
    result.sort_by_key(|f| f.left_kgrams);
    result
}

fn collect_paired_occurrences(pair: &Pair<'_>) -> Vec<PairedOccurrence> {
    let mut out = Vec::new();
    for &hash in &pair.shared {
        let sf = pair
            .index
            .fingerprint(hash)
            .expect("a shared hash always has a backing SharedFingerprint");
        let left_occs = sf.occurrences_of(pair.left.file.id());
        let right_occs = sf.occurrences_of(pair.right.file.id());
        for l in left_occs {
            for r in right_occs {
                out.push(PairedOccurrence {
                    left: l.side.clone(),
                    right: r.side.clone(),
                    fingerprint: hash,
                });
            }
        }
    }
    out
}

/// Remove any fragment contained on both axes within another fragment.
fn squash(fragments: Vec<Fragment>) -> Vec<Fragment> {
    let mut keep = vec![true; fragments.len()];
    for i in 0..fragments.len() {
        if !keep[i] {
            continue;
        }
        for j in 0..fragments.len() {
            if i == j || !keep[j] {
                continue;
            }
            let contains_j = fragments[i].left_kgrams.contains(&fragments[j].left_kgrams)
                && fragments[i].right_kgrams.contains(&fragments[j].right_kgrams);
            let contains_i = fragments[j].left_kgrams.contains(&fragments[i].left_kgrams)
                && fragments[j].right_kgrams.contains(&fragments[i].right_kgrams);
            if contains_j && !contains_i {
                keep[j] = false;
            }
        }
    }
    fragments.into_iter().zip(keep).filter_map(|(f, k)| k.then_some(f)).collect()
}
