//! Pair and fragment invariants from spec §8 items 5-9: similarity range
//! and symmetry, identity, disjointness, fragment containment elimination,
//! and fragment contiguity.

use codematch_compare::{build_fragments, compute_pair};
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
fn similarity_is_within_unit_range_and_symmetric_under_swap() {
    let mut index = FingerprintIndex::new(3, 2, false);
    let a = ["a", "b", "c", "d", "e", "f", "shared1", "shared2", "shared3"];
    let b = ["shared1", "shared2", "shared3", "x", "y", "z", "w", "q"];
    index.add_files(vec![file(0, &a), file(1, &b)]);
    let built = index.build();
    let left = built.entry(FileId::new(0)).unwrap();
    let right = built.entry(FileId::new(1)).unwrap();

    let forward = compute_pair(&built, left, right);
    let backward = compute_pair(&built, right, left);

    assert!((0.0..=1.0).contains(&forward.similarity));
    assert!((forward.similarity - backward.similarity).abs() < 1e-12);
    assert_eq!(forward.longest, backward.longest);
}

#[test]
fn identical_files_are_fully_similar() {
    let mut index = FingerprintIndex::new(3, 2, false);
    let tokens = ["a", "b", "c", "d", "e", "f", "g", "h"];
    index.add_files(vec![file(0, &tokens), file(1, &tokens)]);
    let built = index.build();
    let pair = compute_pair(&built, built.entry(FileId::new(0)).unwrap(), built.entry(FileId::new(1)).unwrap());

    assert!((pair.similarity - 1.0).abs() < 1e-9);
}

#[test]
fn disjoint_files_share_nothing() {
    let mut index = FingerprintIndex::new(2, 2, false);
    index.add_files(vec![file(0, &["a", "b", "c"]), file(1, &["x", "y", "z"])]);
    let built = index.build();
    let pair = compute_pair(&built, built.entry(FileId::new(0)).unwrap(), built.entry(FileId::new(1)).unwrap());

    assert_eq!(pair.similarity, 0.0);
    assert_eq!(pair.longest, 0);
    assert!(build_fragments(&pair, 1, false).is_empty());
}

#[test]
fn no_kept_fragment_is_contained_within_another_on_both_axes() {
    let mut index = FingerprintIndex::new(3, 2, false);
    // A long shared run plus an unrelated shared triple elsewhere: if the
    // triple's k-gram range ever nested fully inside the long run's range
    // on both axes it would have to be squashed away.
    let shared_run: Vec<String> = (0..40).map(|i| format!("run{i}")).collect();
    let mut a: Vec<&str> = shared_run.iter().map(String::as_str).collect();
    a.extend(["left_only_1", "left_only_2"]);
    let mut b: Vec<&str> = shared_run.iter().map(String::as_str).collect();
    b.extend(["right_only_1", "right_only_2"]);

    index.add_files(vec![file(0, &a), file(1, &b)]);
    let built = index.build();
    let pair = compute_pair(&built, built.entry(FileId::new(0)).unwrap(), built.entry(FileId::new(1)).unwrap());
    let fragments = build_fragments(&pair, 1, false);

    for i in 0..fragments.len() {
        for j in 0..fragments.len() {
            if i == j {
                continue;
            }
            let contained = fragments[i].left_kgrams.contains(&fragments[j].left_kgrams)
                && fragments[i].right_kgrams.contains(&fragments[j].right_kgrams);
            assert!(!contained, "fragment {j} is fully contained within fragment {i}");
        }
    }
}

#[test]
fn each_fragments_pairs_are_strictly_contiguous_on_both_sides() {
    let mut index = FingerprintIndex::new(3, 2, false);
    let tokens: Vec<String> = (0..30).map(|i| format!("tok{i}")).collect();
    let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
    index.add_files(vec![file(0, &refs), file(1, &refs)]);
    let built = index.build();
    let pair = compute_pair(&built, built.entry(FileId::new(0)).unwrap(), built.entry(FileId::new(1)).unwrap());
    let fragments = build_fragments(&pair, 1, false);

    for fragment in &fragments {
        let mut pairs = fragment.pairs.clone();
        pairs.sort_by_key(|p| p.left.index);
        for window in pairs.windows(2) {
            assert_eq!(window[1].left.index, window[0].left.index + 1);
            assert_eq!(window[1].right.index, window[0].right.index + 1);
        }
    }
}
