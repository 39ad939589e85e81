#![cfg(feature = "serde")]

//! Integration tests for serde support in uniset.
//!
//! These tests verify that sets serialize as JSON arrays and deserialize
//! back with duplicates collapsed.

use rstest::rstest;
use uniset::{Set, set};

#[rstest]
fn test_set_json_roundtrip() {
    let set = set![1, 2, 3, 4, 5];
    let json = serde_json::to_string(&set).unwrap();
    let restored: Set<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_empty_set_serializes_as_empty_array() {
    let set: Set<i32> = Set::new();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[]");
}

#[rstest]
fn test_single_element_serializes_as_array() {
    let set = set!["only".to_string()];
    assert_eq!(serde_json::to_string(&set).unwrap(), r#"["only"]"#);
}

#[rstest]
fn test_deserialize_collapses_duplicates() {
    let set: Set<i32> = serde_json::from_str("[1, 1, 2, 2, 3]").unwrap();
    assert_eq!(set, set![1, 2, 3]);
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<Set<i32>, _> = serde_json::from_str(r#"{"a": 1}"#);
    assert!(result.is_err());
}

#[rstest]
fn test_nested_sets_roundtrip() {
    let outer: Vec<Set<String>> = vec![
        set!["a".to_string(), "b".to_string()],
        set![],
        set!["c".to_string()],
    ];

    let json = serde_json::to_string(&outer).unwrap();
    let restored: Vec<Set<String>> = serde_json::from_str(&json).unwrap();

    assert_eq!(outer, restored);
}
