//! Validation types and utilities for accumulating errors.
//!
//! This module provides the [`Validation`] type, which pairs a subject with
//! every error found while checking it. It's particularly useful for
//! validating complex data structures where you want to report all problems
//! at once rather than failing on the first one.
//!
//! # Key Components
//!
//! - [`Validation`] - A subject plus its accumulated, ordered errors
//! - Iterator adapters for traversing errors and collecting validations
//! - Trait implementations for composing validations
//!
//! # Examples
//!
//! ```
//! use attempt_rail::validation::Validation;
//!
//! let v = Validation::valid("test test test")
//!     .validate(|s| !s.is_empty(), 0)
//!     .validate(|s| s.len() < 10, 1)
//!     .validate(|s| !s.contains('e'), 2);
//!
//! assert_eq!(v.errors(), &[1, 2]);
//! assert_eq!(v.iter_errors().count(), 2);
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
