//! A writable set backed by a hash table.
//!
//! [`HashedSet`] keys its members by their own [`Hash`] and [`Eq`]
//! implementations, giving expected O(1) membership. Traversal order is
//! unspecified. The hashing strategy is a type parameter; the `fxhash` and
//! `ahash` features add [`FxHashedSet`] and [`AHashedSet`].
//!
//! # Examples
//!
//! ```rust
//! use capsets::prelude::*;
//!
//! let mut set: HashedSet<&str> = HashedSet::new();
//! set.add(["apple", "pear", "apple"])?;
//!
//! assert_eq!(set.size(), 2);
//! assert!(set.contains(&"pear"));
//! assert!(set.equals(&ArraySet::from(["pear", "apple"])));
//! # Ok::<(), SetError>(())
//! ```

use std::collections::HashSet;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::ControlFlow;

use crate::capability::{EnumerableSet, Set, WritableSet};
use crate::error::SetResult;

/// A writable set stored in a [`HashSet`] with a pluggable hasher.
#[derive(Clone)]
pub struct HashedSet<T, S = RandomState> {
    members: HashSet<T, S>,
}

/// A [`HashedSet`] using the `rustc-hash` Fx hasher.
#[cfg(feature = "fxhash")]
pub type FxHashedSet<T> = HashedSet<T, rustc_hash::FxBuildHasher>;

/// A [`HashedSet`] using the `ahash` hasher.
#[cfg(feature = "ahash")]
pub type AHashedSet<T> = HashedSet<T, ahash::RandomState>;

impl<T> HashedSet<T, RandomState> {
    /// Creates an empty set with the default hasher.
    pub fn new() -> Self {
        Self {
            members: HashSet::new(),
        }
    }
}

impl<T, S> HashedSet<T, S> {
    /// Creates an empty set using `hasher` to hash members.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            members: HashSet::with_hasher(hasher),
        }
    }

    /// Returns an iterator over the members in unspecified order.
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        self.members.iter()
    }
}

impl<T, S: Default> Default for HashedSet<T, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<T: Hash + Eq, S: BuildHasher> Set<T> for HashedSet<T, S> {
    fn contains(&self, value: &T) -> bool {
        self.members.contains(value)
    }

    fn name(&self) -> &'static str {
        "HashedSet"
    }

    fn as_enumerable(&self) -> Option<&dyn EnumerableSet<T>> {
        Some(self)
    }

    fn as_writable(&mut self) -> Option<&mut dyn WritableSet<T>> {
        Some(self)
    }
}

impl<T: Hash + Eq, S: BuildHasher> EnumerableSet<T> for HashedSet<T, S> {
    fn size(&self) -> usize {
        self.members.len()
    }

    fn visit(&self, visitor: &mut dyn FnMut(&T) -> ControlFlow<()>) -> ControlFlow<()> {
        self.members.iter().try_for_each(visitor)
    }
}

impl<T: Hash + Eq, S: BuildHasher> WritableSet<T> for HashedSet<T, S> {
    fn insert_values(&mut self, values: Vec<T>) -> SetResult<()> {
        let before = self.members.len();
        let offered = values.len();
        self.members.extend(values);
        tracing::trace!(
            offered,
            inserted = self.members.len() - before,
            "HashedSet insert"
        );
        Ok(())
    }

    fn remove_values(&mut self, values: &[T]) -> SetResult<()> {
        let mut removed = 0_usize;
        for value in values {
            if self.members.remove(value) {
                removed += 1;
            }
        }
        tracing::trace!(removed, "HashedSet remove");
        Ok(())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for HashedSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for HashedSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for HashedSet<T, RandomState> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T, S> IntoIterator for &'a HashedSet<T, S> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for HashedSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for HashedSet<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for HashedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.members.iter()).finish()
    }
}

impl<T: Hash + Eq + fmt::Display, S: BuildHasher> fmt::Display for HashedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_display_string())
    }
}
