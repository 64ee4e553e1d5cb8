//! Error types for set operations.
//!
//! Every fallible operation in this crate returns [`SetResult`]. Errors are
//! raised synchronously at the offending call and never retried internally.
//!
//! # Examples
//!
//! ```rust
//! use capsets::prelude::*;
//!
//! let mut singleton = SingletonSet::new(1);
//! let error = singleton.try_add(vec![2]).unwrap_err();
//! assert_eq!(
//!     error,
//!     SetError::ReadOnlyViolation {
//!         set_name: "SingletonSet",
//!         operation: "add",
//!     }
//! );
//! assert_eq!(format!("{error}"), "SingletonSet::add: set is read-only");
//! ```

use thiserror::Error;

/// Result alias used by every fallible set operation.
pub type SetResult<T> = Result<T, SetError>;

/// Represents the ways a set operation can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetError {
    /// The operation is not provided at this capability level, such as
    /// asking a membership-only set for its size.
    #[error("{set_name}::{operation}: operation not supported at this capability level")]
    UnsupportedOperation {
        /// The set type that refused the call.
        set_name: &'static str,
        /// The refused operation.
        operation: &'static str,
    },

    /// A mutation was attempted on an immutable set.
    #[error("{set_name}::{operation}: set is read-only")]
    ReadOnlyViolation {
        /// The set type that refused the call.
        set_name: &'static str,
        /// The refused operation.
        operation: &'static str,
    },

    /// An inserted value failed the admission predicate of a filtered set.
    /// Nothing was inserted.
    #[error("{set_name}::add: value at position {position} rejected by admission predicate")]
    PredicateRejection {
        /// The set type that refused the call.
        set_name: &'static str,
        /// Zero-based position of the first rejected argument.
        position: usize,
    },

    /// The shared handle to an inner set was already borrowed when a view
    /// tried to mutate through it.
    #[error("{set_name}::{operation}: inner set is already borrowed")]
    InnerSetBorrowed {
        /// The view that attempted the mutation.
        set_name: &'static str,
        /// The refused operation.
        operation: &'static str,
    },
}

impl SetError {
    pub(crate) fn unsupported(set_name: &'static str, operation: &'static str) -> Self {
        tracing::debug!(set_name, operation, "operation not supported");
        Self::UnsupportedOperation {
            set_name,
            operation,
        }
    }

    pub(crate) fn read_only(set_name: &'static str, operation: &'static str) -> Self {
        tracing::debug!(set_name, operation, "mutation refused on read-only set");
        Self::ReadOnlyViolation {
            set_name,
            operation,
        }
    }

    pub(crate) fn rejected(set_name: &'static str, position: usize) -> Self {
        tracing::debug!(set_name, position, "value rejected by admission predicate");
        Self::PredicateRejection { set_name, position }
    }

    pub(crate) fn inner_borrowed(set_name: &'static str, operation: &'static str) -> Self {
        tracing::debug!(set_name, operation, "inner set already borrowed");
        Self::InnerSetBorrowed {
            set_name,
            operation,
        }
    }

    /// Returns the name of the set type that raised this error.
    pub const fn set_name(&self) -> &'static str {
        match self {
            Self::UnsupportedOperation { set_name, .. }
            | Self::ReadOnlyViolation { set_name, .. }
            | Self::PredicateRejection { set_name, .. }
            | Self::InnerSetBorrowed { set_name, .. } => set_name,
        }
    }
}
