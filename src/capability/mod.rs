//! Capability contracts for sets.
//!
//! Sets are layered by what they can do:
//!
//! - [`Set`]: Membership only
//! - [`EnumerableSet`]: Membership plus a finite traversal and a count
//! - [`WritableSet`]: Enumeration plus insertion and deletion
//!
//! Each layer adds a handful of required primitives. Everything else
//! (emptiness, display, structural equality, union, intersection,
//! difference) is a provided method written once against the narrower
//! contract and inherited by every implementor.
//!
//! All three traits are object safe, so sets of different concrete types can
//! be mixed behind `&dyn Set<T>` and friends. Methods that need `Self: Sized`
//! (the fluent mutators and the set algebra) are simply unavailable on trait
//! objects; `insert_values` and `remove_values` remain callable there.
//!
//! # Examples
//!
//! ```rust
//! use capsets::prelude::*;
//!
//! fn describe(set: &dyn Set<i32>) -> String {
//!     set.try_display_string()
//!         .unwrap_or_else(|error| format!("<{error}>"))
//! }
//!
//! let array = ArraySet::from([1, 2]);
//! let singleton = SingletonSet::new(3);
//! let complement = NotSet::new(shared(ArraySet::from([4])));
//!
//! assert_eq!(describe(&array), "{1, 2}");
//! assert_eq!(describe(&singleton), "{3}");
//! assert_eq!(describe(&complement), "~{4}");
//! ```

mod enumerable;
mod membership;
mod writable;

pub use enumerable::EnumerableSet;
pub use membership::Set;
pub use writable::WritableSet;
