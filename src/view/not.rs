//! The complement of a set.
//!
//! [`NotSet`] contains exactly the values its inner set does not. It has no
//! finite representation, so it supports membership only: it implements
//! [`Set`] but neither [`EnumerableSet`](crate::capability::EnumerableSet)
//! nor [`WritableSet`](crate::capability::WritableSet), and the
//! capability-checked operations fail with
//! [`SetError::UnsupportedOperation`].

use std::cell::Ref;
use std::fmt;
use std::rc::Rc;

use super::shared::{Shared, shared};
use crate::capability::Set;
use crate::error::{SetError, SetResult};

/// A membership-only view negating its inner set.
///
/// The inner set may sit at any capability level and is read on each call,
/// so mutations made through other handles are observed immediately.
///
/// # Examples
///
/// ```rust
/// use capsets::prelude::*;
///
/// let vowels = shared(ArraySet::from(['a', 'e', 'i', 'o', 'u']));
/// let mut consonants = NotSet::new(vowels.clone());
///
/// assert!(consonants.contains(&'k'));
/// assert!(!consonants.contains(&'e'));
/// assert!(consonants.try_add(vec!['z']).is_err());
///
/// vowels.borrow_mut().add(['y'])?;
/// assert!(!consonants.contains(&'y'));
/// # Ok::<(), SetError>(())
/// ```
pub struct NotSet<T> {
    inner: Shared<dyn Set<T>>,
}

impl<T> NotSet<T> {
    /// Creates the complement of the set behind `inner`.
    pub fn new<S>(inner: Shared<S>) -> Self
    where
        S: Set<T> + 'static,
    {
        Self { inner }
    }

    /// Creates the complement of `set`, moving it behind a fresh handle.
    pub fn of<S>(set: S) -> Self
    where
        S: Set<T> + 'static,
    {
        Self::new(shared(set))
    }

    /// Returns the handle to the inner set.
    pub const fn inner(&self) -> &Shared<dyn Set<T>> {
        &self.inner
    }
}

impl<T> Set<T> for NotSet<T> {
    /// # Panics
    ///
    /// Panics if the inner set is mutably borrowed. Use
    /// [`try_contains`](Set::try_contains) to get an error instead.
    fn contains(&self, value: &T) -> bool {
        !self.inner.borrow().contains(value)
    }

    fn try_contains(&self, value: &T) -> SetResult<bool> {
        let inner = self
            .inner
            .try_borrow()
            .map_err(|_| SetError::inner_borrowed(self.name(), "contains"))?;
        inner.try_contains(value).map(|member| !member)
    }

    fn name(&self) -> &'static str {
        "NotSet"
    }

    /// # Panics
    ///
    /// Panics if the inner set is mutably borrowed.
    fn complement(&self) -> Option<Ref<'_, dyn Set<T>>> {
        Some(self.inner.borrow())
    }

    /// Two complements are equal when their inner sets are.
    ///
    /// Anything that is not a complement compares unequal. The comparison is
    /// symmetric: swapping the operands gives the same answer.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::UnsupportedOperation`] naming the first inner set
    /// that is neither enumerable nor itself a complement, or
    /// [`SetError::InnerSetBorrowed`] if this set's inner set is mutably
    /// borrowed.
    fn set_equals(&self, other: &dyn Set<T>) -> SetResult<bool> {
        let Some(that) = other.complement() else {
            return Ok(false);
        };
        let this = self
            .inner
            .try_borrow()
            .map_err(|_| SetError::inner_borrowed(self.name(), "equals"))?;
        compare_complemented(&*this, &*that)
    }

    /// Renders the complement as `~` followed by the inner set, e.g. `~{1, 2}`.
    fn try_display_string(&self) -> SetResult<String>
    where
        T: fmt::Display,
    {
        let inner = self
            .inner
            .try_borrow()
            .map_err(|_| SetError::inner_borrowed(self.name(), "to_display_string"))?;
        let rendered = inner.try_display_string()?;
        Ok(format!("~{rendered}"))
    }
}

/// Compares the inner sets of two complements.
///
/// Both sides must be enumerable or complements themselves; nested
/// complements are unwrapped pairwise.
fn compare_complemented<T>(this: &dyn Set<T>, that: &dyn Set<T>) -> SetResult<bool> {
    match (this.as_enumerable(), that.as_enumerable()) {
        (Some(left), Some(_)) => Ok(left.equals(that)),
        (None, _) if this.complement().is_none() => {
            Err(SetError::unsupported(this.name(), "equals"))
        }
        (_, None) if that.complement().is_none() => {
            Err(SetError::unsupported(that.name(), "equals"))
        }
        _ => match (this.complement(), that.complement()) {
            (Some(left), Some(right)) => compare_complemented(&*left, &*right),
            _ => Ok(false),
        },
    }
}

impl<T> Clone for NotSet<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for NotSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NotSet")
            .field(
                "inner",
                &self
                    .inner
                    .try_borrow()
                    .map_or("<borrowed>", |inner| inner.name()),
            )
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for NotSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_display_string() {
            Ok(rendered) => formatter.write_str(&rendered),
            Err(_) => match self.inner.try_borrow() {
                Ok(inner) => write!(formatter, "~<{}>", inner.name()),
                Err(_) => formatter.write_str("~<borrowed>"),
            },
        }
    }
}

static_assertions::assert_not_impl_any!(
    NotSet<i32>: crate::capability::EnumerableSet<i32>,
    crate::capability::WritableSet<i32>,
    Send,
    Sync
);
