//! Shared handles to inner sets.
//!
//! Views such as [`FilteredSet`](super::FilteredSet) and
//! [`NotSet`](super::NotSet) never own the set they wrap. They hold a
//! [`Shared`] handle, read through it on every call, and therefore observe
//! mutations made by any other holder of the same handle.

use std::cell::RefCell;
use std::rc::Rc;

/// A shared, interior-mutable handle to a set.
///
/// The handle is single-threaded. Callers needing cross-thread access must
/// serialize it themselves.
pub type Shared<S> = Rc<RefCell<S>>;

/// Moves `set` behind a new [`Shared`] handle.
///
/// # Examples
///
/// ```rust
/// use capsets::prelude::*;
///
/// let base = shared(ArraySet::from([1, 2]));
/// let complement = NotSet::new(base.clone());
/// assert!(!complement.contains(&1));
///
/// base.borrow_mut().remove(&[1])?;
/// assert!(complement.contains(&1));
/// # Ok::<(), SetError>(())
/// ```
pub fn shared<S>(set: S) -> Shared<S> {
    Rc::new(RefCell::new(set))
}
