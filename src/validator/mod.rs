//! Reusable validation rules.
//!
//! A [`Validator`] turns a subject into a [`Validation`] of that subject. Any
//! `Fn(S) -> Validation<S, E>` closure is a validator; the constructors below
//! build validators from predicates and compose existing ones.
//!
//! # Key Components
//!
//! - [`ensuring_predicate`] - One predicate, one error
//! - [`validating_all`] / [`validating_all!`](crate::validating_all) - Runs every listed rule, in order
//! - [`validating_field`] - Lifts a rule over a projection of the subject
//!
//! # Examples
//!
//! ```
//! use attempt_rail::validating_all;
//! use attempt_rail::validator::{ensuring_predicate, Validator};
//!
//! let rules = validating_all![
//!     ensuring_predicate(|s: &&str| !s.is_empty(), 0),
//!     ensuring_predicate(|s: &&str| s.len() < 10, 1),
//!     ensuring_predicate(|s: &&str| !s.contains('e'), 2),
//! ];
//!
//! assert_eq!(rules.validate("").errors(), &[0]);
//! assert_eq!(rules.validate("test test test").errors(), &[1, 2]);
//! assert!(rules.validate("potato").is_valid());
//! ```
mod combinators;

pub use self::combinators::*;

use crate::validation::Validation;

/// A rule applied to a subject, reporting every violation as an error of the
/// returned [`Validation`].
///
/// Validators are total: a rule failure is an accumulated error, never a
/// panic. Composed validators report errors against the subject they were
/// given; the subject inside a nested rule's validation is not kept.
///
/// # Examples
///
/// ```
/// use attempt_rail::validation::Validation;
/// use attempt_rail::validator::Validator;
///
/// let even = |n: u32| Validation::valid(n).validate(|n| n % 2 == 0, "odd");
///
/// assert!(even.validate(4).is_valid());
/// assert_eq!(even.validate(3).errors(), &["odd"]);
/// ```
pub trait Validator<S, E> {
    /// Checks `subject`, returning it with every error found.
    fn validate(&self, subject: S) -> Validation<S, E>;
}

impl<S, E, F> Validator<S, E> for F
where
    F: Fn(S) -> Validation<S, E>,
{
    #[inline]
    fn validate(&self, subject: S) -> Validation<S, E> {
        self(subject)
    }
}
