//! A writable view that enforces an admission predicate.
//!
//! [`FilteredSet`] forwards every operation to an inner writable set held
//! through a [`Shared`] handle. Insertions are checked against a predicate
//! first: if any value in a call fails, the call fails with
//! [`SetError::PredicateRejection`] and nothing is inserted.
//!
//! The predicate only guards insertions made through the view. Values added
//! to the inner set directly by another holder of the handle are not
//! re-validated.
//!
//! # Examples
//!
//! ```rust
//! use capsets::prelude::*;
//!
//! let base = shared(ArraySet::<i32>::new());
//! let mut positives = FilteredSet::new(base.clone(), |value: &i32| *value > 0);
//!
//! positives.add([1, 2])?;
//! assert_eq!(
//!     positives.add([3, -4]).unwrap_err(),
//!     SetError::PredicateRejection {
//!         set_name: "FilteredSet",
//!         position: 1,
//!     }
//! );
//!
//! // The rejected call inserted nothing, not even the admissible 3.
//! assert_eq!(base.borrow().to_vec(), vec![1, 2]);
//! # Ok::<(), SetError>(())
//! ```

use std::fmt;
use std::ops::ControlFlow;
use std::rc::Rc;

use super::shared::{Shared, shared};
use crate::capability::{EnumerableSet, Set, WritableSet};
use crate::error::{SetError, SetResult};

/// A writable set decorator rejecting values that fail a predicate.
///
/// # Type Parameters
///
/// * `T` - The element type
/// * `S` - The inner writable set, possibly `dyn WritableSet<T>`
///
/// Cloning a `FilteredSet` yields a second view over the same inner set.
pub struct FilteredSet<T, S: ?Sized> {
    inner: Shared<S>,
    predicate: Rc<dyn Fn(&T) -> bool>,
}

impl<T, S: ?Sized> FilteredSet<T, S> {
    /// Creates a view over `inner` admitting only values for which
    /// `predicate` returns `true`.
    pub fn new<P>(inner: Shared<S>, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self {
            inner,
            predicate: Rc::new(predicate),
        }
    }

    /// Returns the handle to the inner set.
    pub const fn inner(&self) -> &Shared<S> {
        &self.inner
    }

    /// Returns `true` if `value` satisfies the admission predicate.
    pub fn admits(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T, S> FilteredSet<T, S> {
    /// Creates a view over a fresh handle wrapping `inner`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use capsets::prelude::*;
    ///
    /// let mut short_words = FilteredSet::wrap(ArraySet::<&str>::new(), |word: &&str| word.len() < 5);
    /// short_words.add(["cat", "dog"])?;
    /// assert!(short_words.add(["elephant"]).is_err());
    /// assert_eq!(short_words.size(), 2);
    /// # Ok::<(), SetError>(())
    /// ```
    pub fn wrap<P>(inner: S, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::new(shared(inner), predicate)
    }
}

impl<U: 'static, S: ?Sized> FilteredSet<Option<U>, S> {
    /// Creates a view over `inner` that refuses `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use capsets::prelude::*;
    ///
    /// let mut present = FilteredSet::rejecting_none(shared(ArraySet::<Option<i32>>::new()));
    /// present.add([Some(1), Some(2)])?;
    /// assert!(present.add([Some(3), None]).is_err());
    /// assert_eq!(present.size(), 2);
    /// # Ok::<(), SetError>(())
    /// ```
    pub fn rejecting_none(inner: Shared<S>) -> Self {
        Self::new(inner, Option::<U>::is_some)
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<T, S: WritableSet<T> + ?Sized> Set<T> for FilteredSet<T, S> {
    /// # Panics
    ///
    /// Panics if the inner set is mutably borrowed. Use
    /// [`try_contains`](Set::try_contains) to get an error instead.
    fn contains(&self, value: &T) -> bool {
        self.inner.borrow().contains(value)
    }

    fn try_contains(&self, value: &T) -> SetResult<bool> {
        let inner = self
            .inner
            .try_borrow()
            .map_err(|_| SetError::inner_borrowed(self.name(), "contains"))?;
        inner.try_contains(value)
    }

    fn name(&self) -> &'static str {
        "FilteredSet"
    }

    fn as_enumerable(&self) -> Option<&dyn EnumerableSet<T>> {
        Some(self)
    }

    fn as_writable(&mut self) -> Option<&mut dyn WritableSet<T>> {
        Some(self)
    }
}

impl<T, S: WritableSet<T> + ?Sized> EnumerableSet<T> for FilteredSet<T, S> {
    /// # Panics
    ///
    /// Panics if the inner set is mutably borrowed.
    fn size(&self) -> usize {
        self.inner.borrow().size()
    }

    /// # Panics
    ///
    /// Panics if the inner set is mutably borrowed, or if `visitor` mutates
    /// it through another handle. Use [`try_visit`](EnumerableSet::try_visit)
    /// to get an error for the former.
    fn visit(&self, visitor: &mut dyn FnMut(&T) -> ControlFlow<()>) -> ControlFlow<()> {
        self.inner.borrow().visit(visitor)
    }

    fn try_visit(
        &self,
        visitor: &mut dyn FnMut(&T) -> ControlFlow<()>,
    ) -> SetResult<ControlFlow<()>> {
        let inner = self
            .inner
            .try_borrow()
            .map_err(|_| SetError::inner_borrowed(self.name(), "visit"))?;
        inner.try_visit(visitor)
    }
}

impl<T, S: WritableSet<T> + ?Sized> WritableSet<T> for FilteredSet<T, S> {
    fn insert_values(&mut self, values: Vec<T>) -> SetResult<()> {
        if let Some(position) = values.iter().position(|value| !self.admits(value)) {
            return Err(SetError::rejected(self.name(), position));
        }
        let mut inner = self
            .inner
            .try_borrow_mut()
            .map_err(|_| SetError::inner_borrowed(self.name(), "add"))?;
        inner.insert_values(values)
    }

    fn remove_values(&mut self, values: &[T]) -> SetResult<()> {
        let mut inner = self
            .inner
            .try_borrow_mut()
            .map_err(|_| SetError::inner_borrowed(self.name(), "remove"))?;
        inner.remove_values(values)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: ?Sized> Clone for FilteredSet<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<T, S: fmt::Debug + ?Sized> fmt::Debug for FilteredSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FilteredSet")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display, S: WritableSet<T> + ?Sized> fmt::Display for FilteredSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(inner) => formatter.write_str(&inner.to_display_string()),
            Err(_) => formatter.write_str("<borrowed>"),
        }
    }
}
