//! The membership capability.

use std::cell::Ref;
use std::fmt::Display;

use super::{EnumerableSet, WritableSet};
use crate::error::{SetError, SetResult};

/// A collection that can answer whether a value belongs to it.
///
/// `Set` is the leaf of the capability hierarchy. A type implementing only
/// `Set` supports nothing but [`contains`](Set::contains); the remaining
/// provided methods reach the richer layers through the capability hooks
/// and fail with [`SetError::UnsupportedOperation`] when a layer is absent.
///
/// # Required Methods
///
/// - `contains`: Membership test, free of side effects
/// - `name`: Type name used in error reports
///
/// # Capability Hooks
///
/// Enumerable and writable types override [`as_enumerable`](Set::as_enumerable)
/// and [`as_writable`](Set::as_writable) to return themselves. Complement
/// views override [`complement`](Set::complement).
///
/// # Examples
///
/// ```rust
/// use capsets::prelude::*;
///
/// let base = shared(ArraySet::from([1, 2]));
/// let outside = NotSet::new(base);
///
/// assert!(outside.contains(&3));
/// assert_eq!(
///     outside.try_size(),
///     Err(SetError::UnsupportedOperation {
///         set_name: "NotSet",
///         operation: "size",
///     })
/// );
/// ```
pub trait Set<T> {
    /// Returns `true` if `value` is a member of this set.
    fn contains(&self, value: &T) -> bool;

    /// Returns the name of the concrete set type.
    fn name(&self) -> &'static str;

    /// Returns this set as an enumerable set, if it is one.
    fn as_enumerable(&self) -> Option<&dyn EnumerableSet<T>> {
        None
    }

    /// Returns this set as a writable set, if it is one.
    fn as_writable(&mut self) -> Option<&mut dyn WritableSet<T>> {
        None
    }

    /// Returns the set this one is the complement of, if it is a complement
    /// view.
    fn complement(&self) -> Option<Ref<'_, dyn Set<T>>> {
        None
    }

    /// Like [`contains`](Set::contains), but reports a failure to reach the
    /// members instead of panicking.
    ///
    /// # Errors
    ///
    /// Views return [`SetError::InnerSetBorrowed`] while their inner set is
    /// mutably borrowed.
    fn try_contains(&self, value: &T) -> SetResult<bool> {
        Ok(self.contains(value))
    }

    /// Returns the number of members.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::UnsupportedOperation`] if this set is not enumerable.
    fn try_size(&self) -> SetResult<usize> {
        self.as_enumerable()
            .map(|set| set.size())
            .ok_or_else(|| SetError::unsupported(self.name(), "size"))
    }

    /// Invokes `visitor` once per member.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::UnsupportedOperation`] if this set is not enumerable.
    fn try_for_each(&self, visitor: &mut dyn FnMut(&T)) -> SetResult<()> {
        let set = self
            .as_enumerable()
            .ok_or_else(|| SetError::unsupported(self.name(), "for_each"))?;
        set.for_each(visitor);
        Ok(())
    }

    /// Inserts every value of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::UnsupportedOperation`] if this set is not writable,
    /// [`SetError::ReadOnlyViolation`] if it is immutable, or whatever the
    /// writable set's own insertion reports.
    fn try_add(&mut self, values: Vec<T>) -> SetResult<()> {
        let name = self.name();
        match self.as_writable() {
            Some(set) => set.insert_values(values),
            None => Err(SetError::unsupported(name, "add")),
        }
    }

    /// Removes every value of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::UnsupportedOperation`] if this set is not writable,
    /// or [`SetError::ReadOnlyViolation`] if it is immutable.
    fn try_remove(&mut self, values: &[T]) -> SetResult<()> {
        let name = self.name();
        match self.as_writable() {
            Some(set) => set.remove_values(values),
            None => Err(SetError::unsupported(name, "remove")),
        }
    }

    /// Compares this set with `other`.
    ///
    /// An enumerable set equals `other` when `other` is enumerable, has the
    /// same size, and contains every member of this set.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::UnsupportedOperation`] if this set can be neither
    /// enumerated nor compared structurally.
    fn set_equals(&self, other: &dyn Set<T>) -> SetResult<bool> {
        self.as_enumerable()
            .map(|set| set.equals(other))
            .ok_or_else(|| SetError::unsupported(self.name(), "equals"))
    }

    /// Renders this set as `{e1, e2, ...}`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::UnsupportedOperation`] if this set has no finite
    /// representation.
    fn try_display_string(&self) -> SetResult<String>
    where
        T: Display,
    {
        self.as_enumerable()
            .map(|set| set.to_display_string())
            .ok_or_else(|| SetError::unsupported(self.name(), "to_display_string"))
    }
}
