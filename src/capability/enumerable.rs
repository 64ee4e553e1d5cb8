//! The enumeration capability and the operations derived from it.

use std::fmt::Display;
use std::ops::ControlFlow;

use super::Set;
use crate::error::SetResult;

/// A set with a finite traversal and a member count.
///
/// # Required Methods
///
/// - `size`: Number of members
/// - `visit`: Traverses the members until the visitor breaks
///
/// # Provided Methods
///
/// Everything else is derived from `size`, `visit` and
/// [`Set::contains`]:
///
/// - `for_each`: Visits every member
/// - `is_empty`: Checks for zero members
/// - `all`: Checks a predicate against every member, stopping at the first failure
/// - `to_vec`: Copies the members out in traversal order
/// - `to_string_with`: Renders the members with a custom renderer
/// - `to_display_string`: Renders the members with [`Display`]
/// - `equals`: Structural, order-independent equality
///
/// Implementors should also override [`Set::as_enumerable`] to return
/// `Some(self)` so capability-checked calls reach this layer.
///
/// # Examples
///
/// ```rust
/// use capsets::prelude::*;
///
/// let left = ArraySet::from([1, 2, 3]);
/// let right = ArraySet::from([3, 2, 1]);
///
/// assert!(left.equals(&right));
/// assert_eq!(left.to_display_string(), "{1, 2, 3}");
/// assert_eq!(right.to_vec(), vec![3, 2, 1]);
/// ```
pub trait EnumerableSet<T>: Set<T> {
    /// Returns the number of members.
    fn size(&self) -> usize;

    /// Invokes `visitor` on each member in traversal order until it returns
    /// [`ControlFlow::Break`].
    ///
    /// Returns `Break` if the traversal was cut short.
    fn visit(&self, visitor: &mut dyn FnMut(&T) -> ControlFlow<()>) -> ControlFlow<()>;

    /// Like [`visit`](EnumerableSet::visit), but reports a failure to reach
    /// the members instead of panicking.
    ///
    /// # Errors
    ///
    /// Views return [`SetError::InnerSetBorrowed`](crate::error::SetError::InnerSetBorrowed)
    /// while their inner set is mutably borrowed.
    fn try_visit(
        &self,
        visitor: &mut dyn FnMut(&T) -> ControlFlow<()>,
    ) -> SetResult<ControlFlow<()>> {
        Ok(self.visit(visitor))
    }

    /// Invokes `visitor` once per member.
    fn for_each(&self, visitor: &mut dyn FnMut(&T)) {
        let flow = self.visit(&mut |value| {
            visitor(value);
            ControlFlow::Continue(())
        });
        // The visitor never breaks.
        debug_assert!(flow.is_continue());
    }

    /// Returns `true` if the set has no members.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if `predicate` holds for every member.
    ///
    /// The traversal stops at the first member that fails.
    fn all(&self, predicate: &mut dyn FnMut(&T) -> bool) -> bool {
        self.visit(&mut |value| {
            if predicate(value) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_continue()
    }

    /// Copies the members into a `Vec` in traversal order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut members = Vec::with_capacity(self.size());
        self.for_each(&mut |value| members.push(value.clone()));
        members
    }

    /// Copies the members into a `Vec`, reporting a failure to reach them.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`try_visit`](EnumerableSet::try_visit).
    fn try_to_vec(&self) -> SetResult<Vec<T>>
    where
        T: Clone,
    {
        let mut members = Vec::new();
        let flow = self.try_visit(&mut |value| {
            members.push(value.clone());
            ControlFlow::Continue(())
        })?;
        debug_assert!(flow.is_continue());
        Ok(members)
    }

    /// Renders the set as `{e1, e2, ...}` using `render` for each member.
    fn to_string_with(&self, render: &mut dyn FnMut(&T) -> String) -> String {
        let mut rendered = String::from("{");
        let mut first = true;
        self.for_each(&mut |value| {
            if first {
                first = false;
            } else {
                rendered.push_str(", ");
            }
            rendered.push_str(&render(value));
        });
        rendered.push('}');
        rendered
    }

    /// Renders the set as `{e1, e2, ...}`, or `{}` when empty.
    fn to_display_string(&self) -> String
    where
        T: Display,
    {
        self.to_string_with(&mut |value| value.to_string())
    }

    /// Returns `true` if `other` is enumerable, has the same size, and
    /// contains every member of this set.
    fn equals(&self, other: &dyn Set<T>) -> bool {
        let Some(other) = other.as_enumerable() else {
            return false;
        };
        if self.size() != other.size() {
            return false;
        }
        self.all(&mut |value| other.contains(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concrete::{ArraySet, SingletonSet};
    use crate::view::{NotSet, shared};
    use rstest::rstest;

    #[rstest]
    fn test_all_stops_at_first_failure() {
        let set = ArraySet::from([1, 2, 3, 4]);
        let mut seen = Vec::new();

        let result = set.all(&mut |value| {
            seen.push(*value);
            *value < 2
        });

        assert!(!result);
        assert_eq!(seen, vec![1, 2]);
    }

    #[rstest]
    fn test_to_string_with_custom_renderer() {
        let set = ArraySet::from([1, 2]);
        let rendered = set.to_string_with(&mut |value| format!("#{value}"));
        assert_eq!(rendered, "{#1, #2}");
    }

    #[rstest]
    fn test_equals_against_non_enumerable_is_false() {
        let set = ArraySet::from([1]);
        let complement = NotSet::new(shared(ArraySet::from([1])));
        assert!(!set.equals(&complement));
    }

    #[rstest]
    fn test_equals_across_concrete_types() {
        let array = ArraySet::from([7]);
        let singleton = SingletonSet::new(7);
        assert!(array.equals(&singleton));
        assert!(singleton.equals(&array));
    }

    #[rstest]
    fn test_equals_size_mismatch() {
        let smaller = ArraySet::from([1, 2]);
        let larger = ArraySet::from([1, 2, 3]);
        assert!(!smaller.equals(&larger));
        assert!(!larger.equals(&smaller));
    }

    #[rstest]
    fn test_enumerable_set_is_object_safe() {
        let set = ArraySet::from([1, 2, 3]);
        let erased: &dyn EnumerableSet<i32> = &set;
        assert_eq!(erased.size(), 3);
        assert_eq!(erased.to_vec(), vec![1, 2, 3]);
    }
}
