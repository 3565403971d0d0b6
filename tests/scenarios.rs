//! End-to-end diff scenarios.

use std::collections::HashMap;

use list_diff::{
    apply_in_place, apply_patches, diff, ContentHash, DiffConfig, DiffError, DiffOptions, Item, Patch,
    PatchKind, PatchStats, Sequence, Value,
};
use rustc_hash::FxHashMap;

#[test]
fn kitten_to_sitting() {
    let patches = diff("kitten", "sitting");

    let stats = PatchStats::from_patches(&patches);
    assert_eq!(patches.len(), 3);
    assert_eq!(stats.substitutions, 2);
    assert_eq!(stats.insertions, 1);
    assert_eq!(stats.deletions, 0);

    let mut text: Vec<char> = "kitten".chars().collect();
    apply_in_place(&mut text, &patches).unwrap();
    assert_eq!(text.into_iter().collect::<String>(), "sitting");
}

#[test]
fn kitten_to_sitting_exact_script() {
    // Tail first: append 'g', then 'e' -> 'i', then 'k' -> 's'
    assert_eq!(
        diff("kitten", "sitting"),
        vec![
            Patch::Insertion { index: 6, item: 'g' },
            Patch::Substitution { index: 4, item: 'i' },
            Patch::Substitution { index: 0, item: 's' },
        ]
    );
}

#[test]
fn pure_insertion() {
    let patches = diff(&[] as &[i32], &[1, 2, 3]);
    assert!(patches.iter().all(|p| p.kind() == PatchKind::Insertion && p.index() == 0));
    assert_eq!(
        patches.iter().filter_map(Patch::item).copied().collect::<Vec<_>>(),
        vec![3, 2, 1]
    );
    assert_eq!(apply_patches(&[], &patches).unwrap(), vec![1, 2, 3]);
}

#[test]
fn pure_deletion() {
    let patches = diff(&[1, 2, 3], &[] as &[i32]);
    assert_eq!(
        patches,
        vec![
            Patch::Deletion { index: 2 },
            Patch::Deletion { index: 1 },
            Patch::Deletion { index: 0 },
        ]
    );
    assert!(apply_patches(&[1, 2, 3], &patches).unwrap().is_empty());
}

#[test]
fn scalar_inputs_are_singletons() {
    let patches = diff(Sequence::single("a"), Sequence::single("b"));
    assert_eq!(patches, vec![Patch::Substitution { index: 0, item: "b" }]);

    let patches = diff(Value::Int(1), Value::list([1, 2]));
    assert_eq!(patches, vec![Patch::Insertion { index: 1, item: Value::Int(2) }]);
}

#[test]
fn value_text_diffs_per_character() {
    let patches = diff(Value::from("abc"), Value::from("axc"));
    assert_eq!(patches, vec![Patch::Substitution { index: 1, item: Value::from('x') }]);
}

#[test]
fn keyed_records_substitute_instead_of_replace() {
    let old = vec![
        Value::record([("id", Value::from(1)), ("title", Value::from("draft"))]),
        Value::record([("id", Value::from(2)), ("title", Value::from("review"))]),
    ];
    let new = vec![
        Value::record([("id", Value::from(1)), ("title", Value::from("draft"))]),
        Value::record([("id", Value::from(2)), ("title", Value::from("publish"))]),
    ];

    let keyed = DiffOptions::<Value>::new().key_field("id");
    let patches = keyed.diff(&old, &new).unwrap();
    assert_eq!(patches, vec![Patch::Substitution { index: 1, item: new[1].clone() }]);
}

#[test]
fn key_match_avoids_deletion_insertion_pair() {
    let a = Value::record([("id", Value::from(1)), ("v", Value::from(0))]);
    let b = Value::record([("id", Value::from(2)), ("v", Value::from(0))]);
    let b2 = Value::record([("id", Value::from(2)), ("v", Value::from(9))]);

    let old = vec![a, b];
    let new = vec![b2.clone()];

    let plain = DiffOptions::<Value>::new().diff(&old, &new).unwrap();
    let keyed = DiffOptions::<Value>::new().key_field("id").diff(&old, &new).unwrap();

    // Plain: 2 edits; keyed: 1 deletion plus the carried update
    assert_eq!(plain.len(), 2);
    assert_eq!(
        keyed,
        vec![Patch::Substitution { index: 1, item: b2 }, Patch::Deletion { index: 0 }]
    );
    assert_eq!(apply_patches(&old, &keyed).unwrap(), new);
}

#[test]
fn missing_key_field_falls_back_to_value_equality() {
    let old = vec![Value::record([("name", "x")])];
    let new = vec![Value::record([("name", "y")])];

    let patches = DiffOptions::<Value>::new().key_field("id").diff(&old, &new).unwrap();
    assert_eq!(patches, vec![Patch::Substitution { index: 0, item: new[0].clone() }]);
}

#[test]
fn content_hash_as_hash_extractor() {
    let old = vec![Value::list([1, 2]), Value::list([3])];
    let new = vec![Value::list([3])];

    let patches = DiffOptions::new()
        .hash_by(|v: &Value| v.content_hash())
        .diff(&old, &new)
        .unwrap();
    assert_eq!(patches, vec![Patch::Deletion { index: 0 }]);
}

#[test]
fn hash_map_records_with_field_key() {
    #[derive(Debug, Clone, PartialEq)]
    struct Row(FxHashMap<String, u32>);

    impl Item for Row {}

    impl list_diff::FieldAccess for Row {
        type Field = u32;

        fn field(&self, name: &str) -> Option<u32> {
            self.0.get(name).copied()
        }
    }

    let row = |id, n| Row(FxHashMap::from_iter([("id".to_string(), id), ("n".to_string(), n)]));
    let old = vec![row(1, 1), row(2, 2)];
    let new = vec![row(2, 3)];

    let patches = DiffOptions::<Row>::new().key_field("id").diff(&old, &new).unwrap();
    assert_eq!(apply_patches(&old, &patches).unwrap(), new);
    assert_eq!(PatchStats::from_patches(&patches).substitutions, 1);

    // Plain std maps work directly
    let maps: Vec<HashMap<String, u32>> = vec![HashMap::from([("id".to_string(), 1)])];
    let patches = DiffOptions::<HashMap<String, u32>>::new()
        .key_field("id")
        .diff(&maps, &maps)
        .unwrap();
    assert!(patches.is_empty());
}

#[test]
fn size_guard_reports_dimensions() {
    let options = DiffOptions::<u8>::new().config(DiffConfig::bounded(100));
    let old = vec![0u8; 20];
    let new = vec![1u8; 20];

    let err = options.diff(&old, &new).unwrap_err();
    assert_eq!(err, DiffError::TooLarge { old_len: 20, new_len: 20, limit: 100 });
    assert!(err.to_string().contains("20x20"));
}

#[test]
fn patch_list_must_be_applied_in_order() {
    let old = [1, 2];
    let new = [2, 1];
    let mut patches = diff(&old, &new);
    assert_eq!(
        patches,
        vec![Patch::Deletion { index: 1 }, Patch::Insertion { index: 0, item: 2 }]
    );
    assert_eq!(apply_patches(&old, &patches).unwrap(), new);

    patches.reverse();
    assert_eq!(apply_patches(&old, &patches).unwrap(), vec![2, 2]);
}
