//! A writable set backed by a deduplicated sequence.
//!
//! [`ArraySet`] keeps its members in insertion order and answers membership
//! with a linear scan. It suits small sets; up to [`INLINE_CAPACITY`]
//! members are stored inline without a heap allocation.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `contains` | O(n)       |
//! | `add`      | O(n) per value |
//! | `remove`   | O(n) per value |
//! | `size`     | O(1)       |
//! | `visit`    | O(n)       |
//!
//! # Examples
//!
//! ```rust
//! use capsets::prelude::*;
//!
//! let mut set = ArraySet::new();
//! set.add([3, 1, 3, 2])?;
//!
//! assert_eq!(set.size(), 3);
//! assert_eq!(set.to_display_string(), "{3, 1, 2}");
//!
//! set.remove(&[1, 42])?;
//! assert_eq!(set.as_slice(), &[3, 2]);
//! # Ok::<(), SetError>(())
//! ```

use std::fmt;
use std::ops::ControlFlow;

use smallvec::SmallVec;

use crate::capability::{EnumerableSet, Set, WritableSet};
use crate::error::SetResult;

/// Number of members an [`ArraySet`] stores inline before spilling to the heap.
pub const INLINE_CAPACITY: usize = 8;

/// A writable set stored as an ordered sequence without duplicates.
///
/// Members are compared with [`PartialEq`]. Traversal follows insertion
/// order; removing a member keeps the relative order of the rest.
///
/// # Examples
///
/// ```rust
/// use capsets::prelude::*;
///
/// let set: ArraySet<&str> = ["b", "a", "b"].into_iter().collect();
/// assert_eq!(set.as_slice(), &["b", "a"]);
/// assert!(set.contains(&"a"));
/// ```
#[derive(Clone)]
pub struct ArraySet<T> {
    members: SmallVec<[T; INLINE_CAPACITY]>,
}

impl<T> ArraySet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            members: SmallVec::new(),
        }
    }

    /// Returns the members in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.members
    }

    /// Returns an iterator over the members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    /// Returns `true` while the members still fit in inline storage.
    pub fn is_inline(&self) -> bool {
        !self.members.spilled()
    }
}

impl<T> Default for ArraySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<T: PartialEq> Set<T> for ArraySet<T> {
    fn contains(&self, value: &T) -> bool {
        self.members.contains(value)
    }

    fn name(&self) -> &'static str {
        "ArraySet"
    }

    fn as_enumerable(&self) -> Option<&dyn EnumerableSet<T>> {
        Some(self)
    }

    fn as_writable(&mut self) -> Option<&mut dyn WritableSet<T>> {
        Some(self)
    }
}

impl<T: PartialEq> EnumerableSet<T> for ArraySet<T> {
    fn size(&self) -> usize {
        self.members.len()
    }

    fn visit(&self, visitor: &mut dyn FnMut(&T) -> ControlFlow<()>) -> ControlFlow<()> {
        self.members.iter().try_for_each(visitor)
    }
}

impl<T: PartialEq> WritableSet<T> for ArraySet<T> {
    fn insert_values(&mut self, values: Vec<T>) -> SetResult<()> {
        let before = self.members.len();
        let offered = values.len();
        self.extend(values);
        tracing::trace!(
            offered,
            inserted = self.members.len() - before,
            "ArraySet insert"
        );
        Ok(())
    }

    fn remove_values(&mut self, values: &[T]) -> SetResult<()> {
        let before = self.members.len();
        for value in values {
            if let Some(position) = self.members.iter().position(|member| member == value) {
                self.members.remove(position);
            }
        }
        tracing::trace!(removed = before - self.members.len(), "ArraySet remove");
        Ok(())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: PartialEq> Extend<T> for ArraySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if !self.contains(&value) {
                self.members.push(value);
            }
        }
    }
}

impl<T: PartialEq> FromIterator<T> for ArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for ArraySet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for ArraySet<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; INLINE_CAPACITY]>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArraySet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for ArraySet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.members.len() == other.members.len()
            && self.members.iter().all(|member| other.contains(member))
    }
}

impl<T: Eq> Eq for ArraySet<T> {}

impl<T: fmt::Debug> fmt::Debug for ArraySet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.members.iter()).finish()
    }
}

impl<T: PartialEq + fmt::Display> fmt::Display for ArraySet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_display_string())
    }
}
