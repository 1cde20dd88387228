//! Conversion helpers between `Result`, [`Attempt`] and [`Validation`].
//!
//! These adapters make it straightforward to move between the standard
//! library's fail-fast `Result`, the crate's [`Attempt`], and the
//! accumulating [`Validation`], e.g. when calling into or returning to code
//! that only speaks `Result`.
//!
//! # Examples
//!
//! ```
//! use attempt_rail::convert::*;
//! use attempt_rail::validation::Validation;
//!
//! let attempt = result_to_attempt("42".parse::<i32>());
//! assert!(attempt.is_success());
//!
//! let checked = Validation::invalid_with("subject", "a", ["b"]);
//! let result = validation_to_result(checked);
//! assert_eq!(result.unwrap_err().as_slice(), &["a", "b"]);
//! ```

use crate::attempt::Attempt;
use crate::types::ErrorVec;
use crate::validation::Validation;
use core::iter::FusedIterator;

/// Converts a `Validation` into an `Attempt` holding the subject or every error.
///
/// Same as [`Validation::to_attempt`].
///
/// # Examples
///
/// ```
/// use attempt_rail::convert::validation_to_attempt;
/// use attempt_rail::validation::Validation;
/// use attempt_rail::Attempt;
///
/// let valid = Validation::<_, &str>::valid(42);
/// assert_eq!(validation_to_attempt(valid), Attempt::success(42));
/// ```
#[inline]
pub fn validation_to_attempt<S, E>(validation: Validation<S, E>) -> Attempt<S, ErrorVec<E>> {
    validation.to_attempt()
}

/// Converts a `Validation` into a `Result` holding the subject or every error.
///
/// # Examples
///
/// ```
/// use attempt_rail::convert::validation_to_result;
/// use attempt_rail::validation::Validation;
///
/// let invalid = Validation::invalid(7, "error");
/// assert_eq!(validation_to_result(invalid).unwrap_err().as_slice(), &["error"]);
/// ```
#[inline]
pub fn validation_to_result<S, E>(validation: Validation<S, E>) -> Result<S, ErrorVec<E>> {
    validation.to_attempt().to_result()
}

/// Converts a `Result` to an `Attempt`.
///
/// # Examples
///
/// ```
/// use attempt_rail::convert::result_to_attempt;
/// use attempt_rail::Attempt;
///
/// let err_result: Result<i32, &str> = Err("failed");
/// assert_eq!(result_to_attempt(err_result), Attempt::failure("failed"));
/// ```
#[inline]
pub fn result_to_attempt<T, E>(result: Result<T, E>) -> Attempt<T, E> {
    Attempt::from_result(result)
}

/// Converts an `Attempt` to a `Result`.
#[inline]
pub fn attempt_to_result<T, E>(attempt: Attempt<T, E>) -> Result<T, E> {
    attempt.to_result()
}

impl<R, E> From<Result<R, E>> for Attempt<R, E> {
    #[inline]
    fn from(result: Result<R, E>) -> Self {
        Attempt::from_result(result)
    }
}

impl<R, E> From<Attempt<R, E>> for Result<R, E> {
    #[inline]
    fn from(attempt: Attempt<R, E>) -> Self {
        attempt.to_result()
    }
}

impl<S, E> From<Validation<S, E>> for Attempt<S, ErrorVec<E>> {
    #[inline]
    fn from(validation: Validation<S, E>) -> Self {
        validation.to_attempt()
    }
}

/// Iterator returned by [`split_validation_errors`].
pub enum SplitValidationIter<S, E> {
    Valid(Option<S>),
    Invalid(<ErrorVec<E> as IntoIterator>::IntoIter),
}

impl<S, E> Iterator for SplitValidationIter<S, E> {
    type Item = Result<S, E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Valid(subject) => subject.take().map(Ok),
            Self::Invalid(iter) => iter.next().map(Err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Valid(subject) => {
                let len = usize::from(subject.is_some());
                (len, Some(len))
            },
            Self::Invalid(iter) => iter.size_hint(),
        }
    }
}

impl<S, E> ExactSizeIterator for SplitValidationIter<S, E> {}
impl<S, E> FusedIterator for SplitValidationIter<S, E> {}

/// Splits a `Validation` into individual `Result` values.
///
/// # Returns
///
/// An iterator that yields:
/// * `Ok(subject)` once if the validation is valid
/// * `Err(e)` for each error, in order, if the validation is invalid
///
/// # Examples
///
/// ```
/// use attempt_rail::convert::split_validation_errors;
/// use attempt_rail::validation::Validation;
///
/// let valid = Validation::<_, &str>::valid(42);
/// let results: Vec<_> = split_validation_errors(valid).collect();
/// assert_eq!(results, vec![Ok(42)]);
///
/// let invalid = Validation::invalid_with(42, "err1", ["err2"]);
/// let results: Vec<_> = split_validation_errors(invalid).collect();
/// assert_eq!(results, vec![Err("err1"), Err("err2")]);
/// ```
pub fn split_validation_errors<S, E>(validation: Validation<S, E>) -> SplitValidationIter<S, E> {
    if validation.is_valid() {
        SplitValidationIter::Valid(Some(validation.into_subject()))
    } else {
        SplitValidationIter::Invalid(validation.into_errors().into_iter())
    }
}
