//! A derived view over two files: their shared fingerprints, longest
//! common run, and similarity score.

use codematch_index::{BuiltIndex, FileEntry};

use crate::kgram::Kgram;

/// A similarity comparison between two files, borrowed from the index that
/// produced them. Never stored past the index's lifetime.
#[derive(Debug)]
pub struct Pair<'a> {
    pub index: &'a BuiltIndex,
    pub left: &'a FileEntry,
    pub right: &'a FileEntry,
    pub left_covered: usize,
    pub right_covered: usize,
    pub left_total: usize,
    pub right_total: usize,
    pub left_ignored: usize,
    pub right_ignored: usize,
    pub longest: usize,
    pub similarity: f64,
    /// Hashes present in both files' `shared` sets, ascending.
    pub shared: Vec<u32>,
}

/// Compute the similarity view for `left` and `right`.
#[must_use]
pub fn compute<'a>(index: &'a BuiltIndex, left: &'a FileEntry, right: &'a FileEntry) -> Pair<'a> {
    let shared = intersect_smaller_first(&left.shared, &right.shared);

    let mut left_list = Vec::new();
    let mut right_list = Vec::new();
    for &hash in &shared {
        let sf = index
            .fingerprint(hash)
            .expect("a shared hash always has a backing SharedFingerprint");
        for occ in sf.occurrences_of(left.file.id()) {
            left_list.push(Kgram {
                hash,
                index: occ.side.index,
            });
        }
        for occ in sf.occurrences_of(right.file.id()) {
            right_list.push(Kgram {
                hash,
                index: occ.side.index,
            });
        }
    }
    left_list.sort_by_key(|k| k.index);
    right_list.sort_by_key(|k| k.index);

    let left_ignored = left.kgrams.iter().filter(|fp| left.ignored.contains(&fp.hash)).count();
    let right_ignored = right.kgrams.iter().filter(|fp| right.ignored.contains(&fp.hash)).count();
    let left_total = left.kgrams.len();
    let right_total = right.kgrams.len();
    let left_covered = left_list.len();
    let right_covered = right_list.len();

    let denominator = (left_total + right_total).saturating_sub(left_ignored + right_ignored);
    let similarity = if denominator > 0 {
        (left_covered + right_covered) as f64 / denominator as f64
    } else {
        0.0
    };

    let longest = longest_common_run(&left_list, &right_list);

    Pair {
        index,
        left,
        right,
        left_covered,
        right_covered,
        left_total,
        right_total,
        left_ignored,
        right_ignored,
        longest,
        similarity,
        shared,
    }
}

fn intersect_smaller_first(
    a: &std::collections::BTreeSet<u32>,
    b: &std::collections::BTreeSet<u32>,
) -> Vec<u32> {
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut result: Vec<u32> = smaller.iter().copied().filter(|h| larger.contains(h)).collect();
    result.sort_unstable();
    result
}

/// Longest common contiguous run of two `Kgram` sequences, compared by hash.
///
/// `prev`/`curr` are keyed by the short side's raw occurrence `index`, not
/// by its position in the (already-filtered-to-shared) slice: a run only
/// extends when the short side's indices are themselves consecutive
/// (`sh.index - 1` has an entry), so a non-shared fingerprint sitting
/// between two shared occurrences on the short side correctly breaks the
/// run instead of being silently skipped over.
fn longest_common_run(left: &[Kgram], right: &[Kgram]) -> usize {
    let (long, short) = if left.len() >= right.len() {
        (left, right)
    } else {
        (right, left)
    };
    if short.is_empty() {
        return 0;
    }

    let mut prev: std::collections::HashMap<usize, usize> = std::collections::HashMap::new();
    let mut curr: std::collections::HashMap<usize, usize> = std::collections::HashMap::new();
    let mut best = 0;

    for l in long {
        curr.clear();
        for s in short {
            if l.hash != s.hash {
                continue;
            }
            let run = s
                .index
                .checked_sub(1)
                .and_then(|prev_index| prev.get(&prev_index))
                .copied()
                .unwrap_or(0)
                + 1;
            curr.insert(s.index, run);
            best = best.max(run);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}
