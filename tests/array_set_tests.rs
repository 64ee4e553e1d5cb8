//! Unit tests for ArraySet.
//!
//! These tests cover construction, deduplication, removal, traversal order
//! and the derived operations inherited from the capability traits.

use capsets::prelude::*;
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: ArraySet<i32> = ArraySet::new();
    assert!(set.is_empty());
    assert_eq!(set.size(), 0);
    assert!(set.to_vec().is_empty());
}

#[rstest]
fn test_default_creates_empty_set() {
    let set: ArraySet<String> = ArraySet::default();
    assert!(set.is_empty());
}

#[rstest]
fn test_from_array_deduplicates() {
    let set = ArraySet::from([1, 2, 1, 3, 2]);
    assert_eq!(set.as_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_collect_deduplicates() {
    let set: ArraySet<char> = "mississippi".chars().collect();
    assert_eq!(set.as_slice(), &['m', 'i', 's', 'p']);
}

// =============================================================================
// Insertion
// =============================================================================

#[rstest]
fn test_add_is_idempotent() {
    let mut set = ArraySet::new();
    set.add([7]).unwrap().add([7]).unwrap();
    assert_eq!(set.size(), 1);
}

#[rstest]
#[case(vec![], 0)]
#[case(vec![1], 1)]
#[case(vec![1, 1, 1], 1)]
#[case(vec![3, 1, 2, 1, 3], 3)]
fn test_add_counts_distinct_values(#[case] values: Vec<i32>, #[case] expected: usize) {
    let mut set = ArraySet::new();
    set.add(values).unwrap();
    assert_eq!(set.size(), expected);
}

#[rstest]
fn test_add_appends_in_insertion_order() {
    let mut set = ArraySet::new();
    set.add(["b", "a"]).unwrap().add(["c", "a"]).unwrap();
    assert_eq!(set.to_vec(), vec!["b", "a", "c"]);
}

#[rstest]
fn test_add_returns_same_set_for_chaining() {
    let mut set = ArraySet::new();
    let size = set.add([1]).unwrap().add([2]).unwrap().size();
    assert_eq!(size, 2);
}

#[rstest]
fn test_extend_ignores_duplicates() {
    let mut set = ArraySet::from([1, 2]);
    set.extend([2, 3, 3]);
    assert_eq!(set.as_slice(), &[1, 2, 3]);
}

// =============================================================================
// Removal
// =============================================================================

#[rstest]
fn test_remove_present_values() {
    let mut set = ArraySet::from([1, 2, 3, 4]);
    set.remove(&[1, 3]).unwrap();
    assert_eq!(set.as_slice(), &[2, 4]);
}

#[rstest]
fn test_remove_absent_values_is_noop() {
    let mut set = ArraySet::from([1, 2]);
    set.remove(&[5, 6]).unwrap();
    assert_eq!(set.as_slice(), &[1, 2]);
}

#[rstest]
fn test_remove_then_add_moves_to_end() {
    let mut set = ArraySet::from([1, 2, 3]);
    set.remove(&[1]).unwrap().add([1]).unwrap();
    assert_eq!(set.as_slice(), &[2, 3, 1]);
}

// =============================================================================
// Membership and traversal
// =============================================================================

#[rstest]
fn test_contains_uses_value_equality() {
    let set = ArraySet::from([String::from("alpha"), String::from("beta")]);
    assert!(set.contains(&String::from("alpha")));
    assert!(!set.contains(&String::from("gamma")));
}

#[rstest]
fn test_for_each_visits_in_storage_order() {
    let set = ArraySet::from([30, 10, 20]);
    let mut seen = Vec::new();
    set.for_each(&mut |value| seen.push(*value));
    assert_eq!(seen, vec![30, 10, 20]);
}

#[rstest]
fn test_iter_matches_for_each() {
    let set = ArraySet::from([1, 2, 3]);
    let iterated: Vec<i32> = set.iter().copied().collect();
    assert_eq!(iterated, set.to_vec());
}

#[rstest]
fn test_reference_into_iterator() {
    let set = ArraySet::from([1, 2, 3]);
    let mut sum = 0;
    for value in &set {
        sum += value;
    }
    assert_eq!(sum, 6);
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn test_equals_is_order_independent() {
    let left = ArraySet::from([1, 2, 3]);
    let right = ArraySet::from([3, 2, 1]);
    assert!(left.equals(&right));
    assert!(right.equals(&left));
    assert_eq!(left.set_equals(&right), Ok(true));
}

#[rstest]
fn test_equals_detects_size_difference() {
    let left = ArraySet::from([1, 2]);
    let right = ArraySet::from([1, 2, 3]);
    assert!(!left.equals(&right));
    assert!(!right.equals(&left));
}

#[rstest]
fn test_equals_detects_different_members() {
    let left = ArraySet::from([1, 2]);
    let right = ArraySet::from([1, 3]);
    assert!(!left.equals(&right));
}

#[rstest]
fn test_empty_sets_are_equal() {
    let left: ArraySet<i32> = ArraySet::new();
    let right: ArraySet<i32> = ArraySet::new();
    assert!(left.equals(&right));
    assert_eq!(left, right);
}

// =============================================================================
// Set algebra
// =============================================================================

#[rstest]
fn test_union_intersection_difference_scenario() {
    let a = ArraySet::from([1, 2, 3]);
    let b = ArraySet::from([2, 3, 4]);

    let mut union = a.clone();
    union.union(&b).unwrap();
    assert!(union.equals(&ArraySet::from([1, 2, 3, 4])));

    let mut intersection = a.clone();
    intersection.intersection(&b).unwrap();
    assert!(intersection.equals(&ArraySet::from([2, 3])));

    let mut difference = a.clone();
    difference.difference(&b).unwrap();
    assert!(difference.equals(&ArraySet::from([1])));

    // The original is untouched by operations on its clones.
    assert_eq!(a.as_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_algebra_chains() {
    let mut set = ArraySet::from([1, 2]);
    set.union(&ArraySet::from([3, 4]))
        .unwrap()
        .difference(&ArraySet::from([1]))
        .unwrap()
        .intersection(&ArraySet::from([2, 3, 9]))
        .unwrap();
    assert_eq!(set.to_vec(), vec![2, 3]);
}

#[rstest]
fn test_union_with_empty_is_identity() {
    let mut set = ArraySet::from([1, 2]);
    set.union(&ArraySet::new()).unwrap();
    assert_eq!(set.as_slice(), &[1, 2]);
}

#[rstest]
fn test_intersection_with_empty_empties() {
    let mut set = ArraySet::from([1, 2]);
    set.intersection(&ArraySet::<i32>::new()).unwrap();
    assert!(set.is_empty());
}
