//! Views that derive a set from another one without owning it.
//!
//! - [`FilteredSet`]: Writable decorator enforcing an admission predicate
//! - [`NotSet`]: Membership-only complement
//!
//! Both hold a [`Shared`] handle to their inner set and read through it on
//! every call; neither caches derived state.

mod filtered;
mod not;
mod shared;

pub use filtered::FilteredSet;
pub use not::NotSet;
pub use shared::{Shared, shared};
