//! Integration tests for Set.
//!
//! These tests exercise the public API end to end, including the
//! multi-set scenarios intersection and diff are expected to handle.

use rstest::rstest;
use std::collections::HashSet;
use uniset::prelude::*;

fn sorted(set: &Set<i32>) -> Vec<i32> {
    let mut list = set.to_list();
    list.sort_unstable();
    list
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_from_slice_matches_add() {
    let mut added = Set::new();
    added.add([1, 2, 3]);

    assert_eq!(Set::from_slice(&[1, 2, 3]), added);
}

#[rstest]
fn test_new_with_duplicates_collapses() {
    let mut set = Set::with_capacity(0);
    set.add([1, 1, 2, 3, 4, 4, 5]);

    assert_eq!(sorted(&set), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_collect_and_extend() {
    let mut set: Set<i32> = (0..3).collect();
    set.extend([2, 3]);
    set.extend(&[4, 4]);

    assert_eq!(sorted(&set), vec![0, 1, 2, 3, 4]);
}

#[rstest]
fn test_default_is_empty() {
    let set: Set<String> = Set::default();
    assert!(set.is_empty());
    assert_eq!(set.to_string(), "[0]{}");
}

// =============================================================================
// Fluent Mutation
// =============================================================================

#[rstest]
fn test_chained_mutations_act_on_one_instance() {
    let mut set = set![1, 2];
    set.add([3, 4]).remove([1]).merge([&set![9]]).add([10]);

    assert_eq!(sorted(&set), vec![2, 3, 4, 9, 10]);
}

#[rstest]
fn test_remove_absent_leaves_set_unchanged() {
    let mut set = set![1, 2];
    set.remove([3]);

    assert_eq!(set, set![1, 2]);
}

// =============================================================================
// Multi-Set Scenarios
// =============================================================================

#[rstest]
fn test_intersection_without_common_element_is_empty() {
    let intersection = set![1, 2, 3].intersection([&set![3], &set![1, 3], &set![2, 4]]);
    assert!(intersection.is_empty());
}

#[rstest]
fn test_intersection_with_equal_set_is_identity() {
    let intersection = set![1, 2, 3].intersection([&set![1, 2, 3]]);
    assert_eq!(sorted(&intersection), vec![1, 2, 3]);
}

#[rstest]
fn test_intersection_with_empty_operand_is_empty() {
    let empty: Set<i32> = set![];
    let intersection = set![1, 2, 3].intersection([&set![1, 2], &empty]);
    assert!(intersection.is_empty());
}

#[rstest]
fn test_intersection_is_independent_of_operands() {
    let source = set![1, 2, 3];
    let other = set![2, 3];

    let mut intersection = source.intersection([&other]);
    intersection.add([100]).remove([2]);

    assert_eq!(sorted(&source), vec![1, 2, 3]);
    assert_eq!(sorted(&other), vec![2, 3]);
}

#[rstest]
fn test_diff_keeps_elements_absent_from_all_others() {
    let difference = set![1, 2, 3].diff([&set![1, 4, 5], &set![3, 6, 7], &set![4]]);
    assert_eq!(sorted(&difference), vec![2]);
}

#[rstest]
fn test_diff_with_self_is_empty() {
    let set = set![1, 2, 3];
    assert!(set.diff([&set]).is_empty());
}

#[rstest]
#[case(set![2, 4], set![1, 3], true)]
#[case(set![2, 4], set![2, 5], false)]
#[case(set![2, 4, 6, 8, 10], set![10], false)]
fn test_is_disjoint(#[case] source: Set<i32>, #[case] target: Set<i32>, #[case] expected: bool) {
    assert_eq!(source.is_disjoint(&target), expected);
}

#[rstest]
fn test_larger_set_is_never_subset_of_smaller() {
    let larger = set![1, 2, 3];
    let smaller = set![1, 2];

    assert!(!larger.is_subset(&smaller));
    assert!(smaller.is_subset(&larger));
    assert!(larger.is_superset(&smaller));
}

// =============================================================================
// Conversion and Rendering
// =============================================================================

#[rstest]
fn test_to_string_renders_count_and_elements() {
    let set = set![7];
    assert_eq!(set.to_string(), "[1]{7}");

    let rendered = set![1, 2].to_string();
    assert!(rendered == "[2]{1,2}" || rendered == "[2]{2,1}");
}

#[rstest]
fn test_into_iterator_yields_every_element() {
    let set = set![1, 2, 3];

    let borrowed: HashSet<&i32> = (&set).into_iter().collect();
    assert_eq!(borrowed.len(), 3);

    let owned: HashSet<i32> = set.into_iter().collect();
    assert_eq!(owned, HashSet::from([1, 2, 3]));
}

#[rstest]
fn test_pop_on_empty_returns_none() {
    let mut set: Set<&str> = Set::new();
    assert_eq!(set.pop(), None);
}

#[rstest]
fn test_pop_returns_owned_reference_types() {
    let shared = std::rc::Rc::new(5);
    let mut set = Set::new();
    set.add([std::rc::Rc::clone(&shared)]);

    let cloned = set.clone();
    assert_eq!(std::rc::Rc::strong_count(&shared), 3);

    let popped = set.pop();
    assert!(popped.is_some_and(|element| std::rc::Rc::ptr_eq(&element, &shared)));
    assert_eq!(cloned.len(), 1);
}

#[rstest]
fn test_find_extremes_over_sets() {
    let sets = [set![1, 2], set![1], set![1, 2, 3], set![4]];
    assert_eq!(
        find_extremes(&sets),
        SizeExtremes {
            smallest: 1,
            largest: 2
        }
    );
}
