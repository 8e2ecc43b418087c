//! Serde integration tests for frozen sets.

#![cfg(feature = "serde")]

use frozen_set::{EmptyFrozenSet, FrozenSet, Greater};
use rstest::rstest;

#[rstest]
fn test_serialize_in_sorted_order() {
    let set = FrozenSet::new([3, 1, 2]);
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[rstest]
fn test_serialize_empty() {
    let set: EmptyFrozenSet<i32> = EmptyFrozenSet::new();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[]");
}

#[rstest]
fn test_deserialize_sorts_keys() {
    let set: FrozenSet<String, 3> = serde_json::from_str(r#"["c","a","b"]"#).unwrap();
    assert_eq!(
        set.as_slice(),
        &["a".to_string(), "b".to_string(), "c".to_string()]
    );
}

#[rstest]
fn test_deserialize_with_default_comparator() {
    let set: FrozenSet<i32, 3, Greater> = serde_json::from_str("[1,3,2]").unwrap();
    assert_eq!(set.as_slice(), &[3, 2, 1]);
}

#[rstest]
#[case("[1,2]")]
#[case("[1,2,3,4]")]
#[case("[]")]
fn test_deserialize_wrong_length_fails(#[case] json: &str) {
    let result: Result<FrozenSet<i32, 3>, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[rstest]
fn test_deserialize_empty() {
    let set: EmptyFrozenSet<i32> = serde_json::from_str("[]").unwrap();
    assert!(set.is_empty());

    let result: Result<EmptyFrozenSet<i32>, _> = serde_json::from_str("[1]");
    assert!(result.is_err());
}

#[rstest]
fn test_roundtrip_preserves_lookups() {
    let original = FrozenSet::new([50_u16, 10, 40, 20, 30]);
    let json = serde_json::to_string(&original).unwrap();
    let restored: FrozenSet<u16, 5> = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
    assert_eq!(restored.lower_bound(&40), 3);
}
