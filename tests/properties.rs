//! Property tests for the diff engine.

use list_diff::{apply_patches, diff, distance, DiffOptions, Patch, PatchKind};
use proptest::prelude::*;

/// Independent two-row Levenshtein used as an oracle.
fn levenshtein(a: &[u8], b: &[u8]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, x) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, y) in b.iter().enumerate() {
            let sub = prev[j] + usize::from(x != y);
            curr[j + 1] = sub.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Small alphabet so sequences share elements often.
fn seq_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..5, 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: diffing a sequence against itself yields no patches.
    #[test]
    fn identity_is_empty(a in seq_strategy()) {
        prop_assert!(diff(&a, &a).is_empty());
    }

    /// Property: applying diff(a, b) to a copy of a yields b.
    #[test]
    fn round_trip(a in seq_strategy(), b in seq_strategy()) {
        let patches = diff(&a, &b);
        prop_assert_eq!(apply_patches(&a, &patches).unwrap(), b);
    }

    /// Property: the distance is the Levenshtein distance and the patch list
    /// spends exactly that many edits.
    #[test]
    fn minimality(a in seq_strategy(), b in seq_strategy()) {
        let expected = levenshtein(&a, &b);
        prop_assert_eq!(distance(&a, &b), expected);
        prop_assert_eq!(diff(&a, &b).len(), expected);
    }

    /// Property: the first row and column of the matrix count up from zero.
    #[test]
    fn boundary_rows(a in seq_strategy(), b in seq_strategy()) {
        let matrix = DiffOptions::<u8>::new().matrix(&a, &b).unwrap();
        for j in 0..matrix.cols() {
            prop_assert_eq!(matrix.get(0, j), j);
        }
        for i in 0..matrix.rows() {
            prop_assert_eq!(matrix.get(i, 0), i);
        }
    }

    /// Property: patches run tail first. Indices never increase along the list.
    #[test]
    fn patches_are_tail_first(a in seq_strategy(), b in seq_strategy()) {
        let patches = diff(&a, &b);
        for pair in patches.windows(2) {
            prop_assert!(pair[0].index() >= pair[1].index());
        }
    }

    /// Property: diffing text round-trips through its characters.
    #[test]
    fn text_round_trip(a in "[a-d]{0,16}", b in "[a-d]{0,16}") {
        let old: Vec<char> = a.chars().collect();
        let patches = diff(a.as_str(), b.as_str());
        let rebuilt: String = apply_patches(&old, &patches).unwrap().into_iter().collect();
        prop_assert_eq!(rebuilt, b);
    }

    /// Property: a keyed diff of records that only changed content is all
    /// substitutions and still round-trips.
    #[test]
    fn keyed_updates_round_trip(values in prop::collection::vec((0u8..3, 0u8..3), 0..12)) {
        let old: Vec<Vec<u8>> = values.iter().enumerate().map(|(i, (x, _))| vec![i as u8, *x]).collect();
        let new: Vec<Vec<u8>> = values.iter().enumerate().map(|(i, (_, y))| vec![i as u8, *y]).collect();

        let patches = DiffOptions::new().key_by(|r: &Vec<u8>| r[0]).diff(&old, &new).unwrap();
        prop_assert!(patches.iter().all(|p| p.kind() == PatchKind::Substitution));
        let changed = values.iter().filter(|(x, y)| x != y).count();
        prop_assert_eq!(patches.len(), changed);
        prop_assert_eq!(apply_patches(&old, &patches).unwrap(), new);
    }
}

#[test]
fn oracle_sanity() {
    assert_eq!(levenshtein(b"kitten", b"sitting"), 3);
    assert_eq!(levenshtein(b"", b"abc"), 3);
    assert_eq!(levenshtein(b"same", b"same"), 0);
    assert!(matches!(diff(&[1u8], &[2u8])[0], Patch::Substitution { index: 0, item: 2 }));
}
