//! Identity-compared elements.
//!
//! Sets in this crate compare members with [`PartialEq`]: values are equal
//! when their contents are. [`ByIdentity`] opts a composite value into
//! identity semantics instead, so two handles are the same member only if
//! they point at the same allocation.
//!
//! # Examples
//!
//! ```rust
//! use capsets::prelude::*;
//!
//! let first = ByIdentity::new(vec![1, 2]);
//! let twin = ByIdentity::new(vec![1, 2]);
//!
//! let mut set = ArraySet::new();
//! set.add([first.clone(), twin.clone(), first.clone()])?;
//!
//! // Equal contents, distinct allocations: two members.
//! assert_eq!(set.size(), 2);
//! assert!(set.contains(&first));
//! assert!(!set.contains(&ByIdentity::new(vec![1, 2])));
//! # Ok::<(), SetError>(())
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

/// A shared value compared and hashed by pointer identity.
///
/// Cloning a `ByIdentity` yields another handle to the same allocation,
/// which compares equal to the original.
pub struct ByIdentity<A: ?Sized>(Rc<A>);

impl<A> ByIdentity<A> {
    /// Moves `value` into a new allocation.
    #[inline]
    pub fn new(value: A) -> Self {
        Self(Rc::new(value))
    }
}

impl<A: ?Sized> ByIdentity<A> {
    /// Wraps an existing shared value without reallocating.
    #[inline]
    pub const fn from_rc(value: Rc<A>) -> Self {
        Self(value)
    }

    /// Returns the shared value.
    #[inline]
    pub const fn as_rc(&self) -> &Rc<A> {
        &self.0
    }
}

impl<A: ?Sized> Clone for ByIdentity<A> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A: ?Sized> PartialEq for ByIdentity<A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<A: ?Sized> Eq for ByIdentity<A> {}

impl<A: ?Sized> Hash for ByIdentity<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).cast::<()>().hash(state);
    }
}

impl<A: ?Sized> Deref for ByIdentity<A> {
    type Target = A;

    fn deref(&self) -> &A {
        &self.0
    }
}

impl<A: ?Sized + fmt::Debug> fmt::Debug for ByIdentity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ByIdentity").field(&&*self.0).finish()
    }
}

impl<A: ?Sized + fmt::Display> fmt::Display for ByIdentity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, formatter)
    }
}
