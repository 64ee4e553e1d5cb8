//! A read-only set of exactly one member.

use std::fmt;
use std::ops::ControlFlow;

use crate::capability::{EnumerableSet, Set};
use crate::error::{SetError, SetResult};

/// An immutable enumerable set wrapping one fixed value.
///
/// `SingletonSet` is enumerable but deliberately not a
/// [`WritableSet`](crate::capability::WritableSet); capability-checked
/// mutation through [`Set::try_add`] or [`Set::try_remove`] fails with
/// [`SetError::ReadOnlyViolation`].
///
/// # Examples
///
/// ```rust
/// use capsets::prelude::*;
///
/// let mut set = SingletonSet::new("only");
/// assert!(set.contains(&"only"));
/// assert!(!set.contains(&"other"));
/// assert_eq!(set.size(), 1);
///
/// assert!(set.try_add(vec!["other"]).is_err());
/// assert_eq!(set.to_display_string(), "{only}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SingletonSet<T> {
    member: T,
}

impl<T> SingletonSet<T> {
    /// Creates a set whose only member is `member`.
    pub const fn new(member: T) -> Self {
        Self { member }
    }

    /// Returns the member.
    pub const fn member(&self) -> &T {
        &self.member
    }

    /// Consumes the set and returns the member.
    pub fn into_inner(self) -> T {
        self.member
    }
}

impl<T: PartialEq> Set<T> for SingletonSet<T> {
    fn contains(&self, value: &T) -> bool {
        &self.member == value
    }

    fn name(&self) -> &'static str {
        "SingletonSet"
    }

    fn as_enumerable(&self) -> Option<&dyn EnumerableSet<T>> {
        Some(self)
    }

    fn try_add(&mut self, _values: Vec<T>) -> SetResult<()> {
        Err(SetError::read_only(self.name(), "add"))
    }

    fn try_remove(&mut self, _values: &[T]) -> SetResult<()> {
        Err(SetError::read_only(self.name(), "remove"))
    }
}

impl<T: PartialEq> EnumerableSet<T> for SingletonSet<T> {
    fn size(&self) -> usize {
        1
    }

    fn visit(&self, visitor: &mut dyn FnMut(&T) -> ControlFlow<()>) -> ControlFlow<()> {
        visitor(&self.member)
    }
}

impl<T: fmt::Display> fmt::Display for SingletonSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{{}}}", self.member)
    }
}

static_assertions::assert_not_impl_any!(
    SingletonSet<i32>: crate::capability::WritableSet<i32>
);
