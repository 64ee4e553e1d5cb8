//! The mutation capability and the set algebra derived from it.

use std::ops::ControlFlow;

use super::{EnumerableSet, Set};
use crate::error::SetResult;

/// An enumerable set that supports insertion and deletion.
///
/// # Required Methods
///
/// - `insert_values`: Inserts a batch of values
/// - `remove_values`: Removes a batch of values, ignoring absent ones
///
/// # Provided Methods
///
/// - `add` / `remove`: Fluent forms of the primitives
/// - `union`: Adds every member of another enumerable set
/// - `intersection`: Removes every member not contained in another set
/// - `difference`: Removes every member of another enumerable set
///
/// The algebra mutates `self` in place and is written only against the
/// primitives and the other set's contract, so every writable set gets it.
/// Implementors should override [`Set::as_writable`] to return `Some(self)`.
///
/// # Examples
///
/// ```rust
/// use capsets::prelude::*;
///
/// let left = ArraySet::from([1, 2, 3]);
/// let right = ArraySet::from([2, 3, 4]);
///
/// let mut union = left.clone();
/// union.union(&right).unwrap();
/// assert_eq!(union.to_vec(), vec![1, 2, 3, 4]);
///
/// let mut intersection = left.clone();
/// intersection.intersection(&right).unwrap();
/// assert_eq!(intersection.to_vec(), vec![2, 3]);
///
/// let mut difference = left;
/// difference.difference(&right).unwrap();
/// assert_eq!(difference.to_vec(), vec![1]);
/// ```
pub trait WritableSet<T>: EnumerableSet<T> {
    /// Inserts every value of `values` not already present.
    ///
    /// # Errors
    ///
    /// Implementations that restrict admission report the refusal here and
    /// leave the set unchanged.
    fn insert_values(&mut self, values: Vec<T>) -> SetResult<()>;

    /// Removes every value of `values` that is present.
    ///
    /// # Errors
    ///
    /// Views report a failure to reach their inner set here.
    fn remove_values(&mut self, values: &[T]) -> SetResult<()>;

    /// Inserts `values` and returns the set for chaining.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`insert_values`](WritableSet::insert_values).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use capsets::prelude::*;
    ///
    /// let mut set = ArraySet::new();
    /// set.add([1, 2])?.add([2, 3])?;
    /// assert_eq!(set.size(), 3);
    /// # Ok::<(), SetError>(())
    /// ```
    fn add<I>(&mut self, values: I) -> SetResult<&mut Self>
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        self.insert_values(values.into_iter().collect())?;
        Ok(self)
    }

    /// Removes `values` and returns the set for chaining.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`remove_values`](WritableSet::remove_values).
    fn remove(&mut self, values: &[T]) -> SetResult<&mut Self>
    where
        Self: Sized,
    {
        self.remove_values(values)?;
        Ok(self)
    }

    /// Adds every member of `other` to this set.
    ///
    /// # Errors
    ///
    /// Propagates the insertion error, or the error of reading `other`; the
    /// set is left unchanged in either case.
    fn union<O>(&mut self, other: &O) -> SetResult<&mut Self>
    where
        O: EnumerableSet<T> + ?Sized,
        T: Clone,
        Self: Sized,
    {
        let members = other.try_to_vec()?;
        tracing::trace!(set_name = self.name(), incoming = members.len(), "union");
        self.insert_values(members)?;
        Ok(self)
    }

    /// Removes every member of this set that `other` does not contain.
    ///
    /// `other` only needs the membership capability.
    ///
    /// # Errors
    ///
    /// Propagates the removal error, or the first failure to query `other`.
    /// Nothing is removed if `other` cannot be queried.
    fn intersection<O>(&mut self, other: &O) -> SetResult<&mut Self>
    where
        O: Set<T> + ?Sized,
        T: Clone,
        Self: Sized,
    {
        let mut outside = Vec::new();
        let mut failure = None;
        let flow = self.try_visit(&mut |value| match other.try_contains(value) {
            Ok(true) => ControlFlow::Continue(()),
            Ok(false) => {
                outside.push(value.clone());
                ControlFlow::Continue(())
            }
            Err(error) => {
                failure = Some(error);
                ControlFlow::Break(())
            }
        })?;
        if let Some(error) = failure {
            debug_assert!(flow.is_break());
            return Err(error);
        }
        tracing::trace!(set_name = self.name(), dropped = outside.len(), "intersection");
        self.remove_values(&outside)?;
        Ok(self)
    }

    /// Removes every member of `other` from this set.
    ///
    /// # Errors
    ///
    /// Propagates the removal error, or the error of reading `other`.
    fn difference<O>(&mut self, other: &O) -> SetResult<&mut Self>
    where
        O: EnumerableSet<T> + ?Sized,
        T: Clone,
        Self: Sized,
    {
        let members = other.try_to_vec()?;
        tracing::trace!(set_name = self.name(), incoming = members.len(), "difference");
        self.remove_values(&members)?;
        Ok(self)
    }
}
