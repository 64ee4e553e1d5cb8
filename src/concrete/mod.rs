//! Concrete set representations.
//!
//! - [`ArraySet`]: Writable, insertion-ordered, linear-scan membership
//! - [`SingletonSet`]: Read-only, exactly one member
//! - [`HashedSet`]: Writable, hash-table membership (feature `hashed`)

mod array;
#[cfg(feature = "hashed")]
mod hashed;
mod singleton;

pub use array::{ArraySet, INLINE_CAPACITY};
pub use singleton::SingletonSet;

#[cfg(feature = "hashed")]
pub use hashed::HashedSet;

#[cfg(feature = "fxhash")]
pub use hashed::FxHashedSet;

#[cfg(feature = "ahash")]
pub use hashed::AHashedSet;
