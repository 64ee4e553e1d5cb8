//! # capsets
//!
//! Set abstractions layered by capability.
//!
//! ## Overview
//!
//! A set is described by what it can do rather than by how it is stored:
//!
//! - **Membership** ([`capability::Set`]): decide whether a value belongs
//! - **Enumeration** ([`capability::EnumerableSet`]): count and traverse the
//!   members; emptiness, display and structural equality come for free
//! - **Mutation** ([`capability::WritableSet`]): insert and remove; union,
//!   intersection and difference come for free
//!
//! Concrete representations implement only the primitives of their layer:
//!
//! - [`concrete::ArraySet`]: Writable, insertion-ordered sequence
//! - [`concrete::SingletonSet`]: Read-only, exactly one member
//! - [`concrete::HashedSet`]: Writable, hash-table backed
//! - [`view::FilteredSet`]: Writable view enforcing an admission predicate
//! - [`view::NotSet`]: Membership-only complement of another set
//!
//! ## Feature Flags
//!
//! - `hashed` (default): [`concrete::HashedSet`]
//! - `fxhash`: `FxHashedSet` using `rustc-hash`
//! - `ahash`: `AHashedSet` using `ahash`
//!
//! ## Example
//!
//! ```rust
//! use capsets::prelude::*;
//!
//! let a = ArraySet::from([1, 2, 3]);
//! let b = ArraySet::from([2, 3, 4]);
//!
//! let mut union = a.clone();
//! union.union(&b)?;
//! assert_eq!(union.to_display_string(), "{1, 2, 3, 4}");
//!
//! let outside_a = NotSet::new(shared(a));
//! assert!(outside_a.contains(&4));
//! assert!(outside_a.try_size().is_err());
//! # Ok::<(), SetError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every capability trait, set type and the error type.
///
/// # Usage
///
/// ```rust
/// use capsets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::capability::*;
    pub use crate::concrete::*;
    pub use crate::error::*;
    pub use crate::identity::*;
    pub use crate::view::*;
}

pub mod capability;
pub mod concrete;
pub mod error;
pub mod identity;
pub mod view;
