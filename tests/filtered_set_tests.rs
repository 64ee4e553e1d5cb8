//! Unit tests for FilteredSet.
//!
//! These tests focus on the all-or-nothing admission rule and on forwarding
//! to a shared inner set.

use std::rc::Rc;

use capsets::prelude::*;
use rstest::{fixture, rstest};

type Base = Shared<ArraySet<i32>>;

#[fixture]
fn base() -> Base {
    shared(ArraySet::new())
}

fn non_negative(base: &Base) -> FilteredSet<i32, ArraySet<i32>> {
    FilteredSet::new(Rc::clone(base), |value: &i32| *value >= 0)
}

// =============================================================================
// Admission
// =============================================================================

#[rstest]
fn test_add_admits_passing_values(base: Base) {
    let mut view = non_negative(&base);
    view.add([0, 1, 2]).unwrap();
    assert_eq!(base.borrow().as_slice(), &[0, 1, 2]);
}

#[rstest]
#[case(vec![-1])]
#[case(vec![1, -1])]
#[case(vec![1, 2, 3, -4])]
#[case(vec![-5, 5])]
fn test_add_is_all_or_nothing(base: Base, #[case] values: Vec<i32>) {
    let mut view = non_negative(&base);
    view.add([10]).unwrap();
    let size_before = base.borrow().size();

    let result = view.add(values);

    assert!(matches!(result, Err(SetError::PredicateRejection { .. })));
    assert_eq!(base.borrow().size(), size_before);
    assert_eq!(base.borrow().as_slice(), &[10]);
}

#[rstest]
fn test_rejection_position_is_first_failure(base: Base) {
    let mut view = non_negative(&base);
    assert_eq!(
        view.add([4, -1, -2]).unwrap_err(),
        SetError::PredicateRejection {
            set_name: "FilteredSet",
            position: 1,
        }
    );
}

#[rstest]
fn test_duplicates_still_deduplicated_by_inner(base: Base) {
    let mut view = non_negative(&base);
    view.add([1, 1]).unwrap().add([1]).unwrap();
    assert_eq!(view.size(), 1);
}

#[rstest]
fn test_try_add_goes_through_predicate(base: Base) {
    let mut view = non_negative(&base);
    assert!(view.try_add(vec![-3]).is_err());
    assert!(view.try_add(vec![3]).is_ok());
    assert_eq!(view.to_vec(), vec![3]);
}

// =============================================================================
// Forwarding
// =============================================================================

#[rstest]
fn test_contains_size_for_each_forward(base: Base) {
    base.borrow_mut().add([1, 2, 3]).unwrap();
    let view = non_negative(&base);

    assert!(view.contains(&2));
    assert!(!view.contains(&4));
    assert_eq!(view.size(), 3);

    let mut seen = Vec::new();
    view.for_each(&mut |value| seen.push(*value));
    assert_eq!(seen, vec![1, 2, 3]);
}

#[rstest]
fn test_remove_forwards_without_predicate(base: Base) {
    base.borrow_mut().add([-1, 1]).unwrap();
    let mut view = non_negative(&base);

    view.remove(&[-1]).unwrap();

    assert_eq!(base.borrow().as_slice(), &[1]);
}

#[rstest]
fn test_view_observes_external_mutation(base: Base) {
    let view = non_negative(&base);
    assert!(view.is_empty());

    base.borrow_mut().add([5]).unwrap();

    assert!(view.contains(&5));
    assert_eq!(view.size(), 1);
}

#[rstest]
fn test_direct_inner_mutation_bypasses_predicate(base: Base) {
    let view = non_negative(&base);
    base.borrow_mut().add([-9]).unwrap();

    assert!(view.contains(&-9));
    assert!(!view.admits(&-9));
}

// =============================================================================
// Derived operations
// =============================================================================

#[rstest]
fn test_union_is_all_or_nothing(base: Base) {
    let mut view = non_negative(&base);
    view.add([1]).unwrap();

    let result = view.union(&ArraySet::from([2, -2]));

    assert!(result.is_err());
    assert_eq!(view.to_vec(), vec![1]);
}

#[rstest]
fn test_intersection_and_difference(base: Base) {
    let mut view = non_negative(&base);
    view.add([1, 2, 3, 4]).unwrap();

    view.intersection(&ArraySet::from([2, 3, 4, 5]))
        .unwrap()
        .difference(&SingletonSet::new(3))
        .unwrap();

    assert_eq!(base.borrow().as_slice(), &[2, 4]);
}

#[rstest]
fn test_equals_inner(base: Base) {
    let mut view = non_negative(&base);
    view.add([1, 2]).unwrap();
    assert!(view.equals(&ArraySet::from([2, 1])));
    assert!(base.borrow().equals(&view));
}

#[rstest]
fn test_display(base: Base) {
    let mut view = non_negative(&base);
    view.add([3, 1]).unwrap();
    assert_eq!(format!("{view}"), "{3, 1}");
}

// =============================================================================
// Stacking and variants
// =============================================================================

#[rstest]
fn test_stacked_filters_apply_every_predicate(base: Base) {
    let outer_inner = shared(non_negative(&base));
    let mut below_ten = FilteredSet::new(Rc::clone(&outer_inner), |value: &i32| *value < 10);

    below_ten.add([1, 9]).unwrap();
    assert!(below_ten.add([10]).is_err());
    assert!(below_ten.add([-1]).is_err());
    assert!(below_ten.add([5, -1]).is_err());

    assert_eq!(base.borrow().as_slice(), &[1, 9]);
}

#[rstest]
fn test_rejecting_none() {
    let inner = shared(ArraySet::<Option<&str>>::new());
    let mut present = FilteredSet::rejecting_none(Rc::clone(&inner));

    present.add([Some("a"), Some("b")]).unwrap();
    let error = present.add([Some("c"), None]).unwrap_err();

    assert_eq!(
        error,
        SetError::PredicateRejection {
            set_name: "FilteredSet",
            position: 1,
        }
    );
    assert_eq!(inner.borrow().as_slice(), &[Some("a"), Some("b")]);
}

#[rstest]
fn test_wrap_owns_fresh_handle() {
    let mut view = FilteredSet::wrap(ArraySet::<i32>::new(), |value: &i32| value % 2 == 1);
    view.add([1, 3]).unwrap();
    assert_eq!(Rc::strong_count(view.inner()), 1);
    assert_eq!(view.inner().borrow().as_slice(), &[1, 3]);
}

#[rstest]
fn test_mutating_while_inner_borrowed_reports_error(base: Base) {
    let mut view = non_negative(&base);
    let reader = base.borrow();

    assert_eq!(
        view.remove(&[1]).unwrap_err(),
        SetError::InnerSetBorrowed {
            set_name: "FilteredSet",
            operation: "remove",
        }
    );
    drop(reader);
}
