//! Storage and contract types shared by [`Attempt`](crate::Attempt) and
//! [`Validation`](crate::Validation).
//!
//! # Examples
//!
//! ```
//! use attempt_rail::types::{Accumulator, ErrorVec};
//!
//! let mut errors: Accumulator<&str> = Accumulator::new();
//! errors.push("too short");
//! errors.extend(["missing digit"]);
//!
//! let inner: ErrorVec<&str> = errors.into_inner();
//! assert_eq!(inner.as_slice(), &["too short", "missing digit"]);
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod alloc_type;
pub mod contract;

pub use accumulator::*;
pub use contract::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for a single element to avoid heap allocations
/// in the common case where only one rule is violated.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
