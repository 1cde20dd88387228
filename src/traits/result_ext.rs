//! Extension trait bridging `Result` into the crate's containers.
//!
//! # Examples
//!
//! ```
//! use attempt_rail::traits::ResultExt;
//!
//! let port = "8080".parse::<u16>().into_attempt().map_result(|p| p + 1);
//! assert_eq!(port.into_value(), Some(8081));
//! ```

use crate::attempt::Attempt;
use crate::validation::Validation;

/// Extension methods turning a `Result` into an [`Attempt`] or a [`Validation`].
pub trait ResultExt<T, E> {
    /// Wraps the result as an [`Attempt`]: `Ok` becomes `Success`, `Err` becomes `Failure`.
    fn into_attempt(self) -> Attempt<T, E>;

    /// Records the error, if any, as a validation of `subject`.
    ///
    /// The success value is discarded; use this to fold the outcome of a
    /// fallible check into the validation of a larger subject.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::traits::ResultExt;
    ///
    /// let v = "x".parse::<u16>().map_err(|_| "port").into_validation("config");
    /// assert_eq!(v.errors(), &["port"]);
    /// ```
    fn into_validation<S>(self, subject: S) -> Validation<S, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_attempt(self) -> Attempt<T, E> {
        Attempt::from_result(self)
    }

    #[inline]
    fn into_validation<S>(self, subject: S) -> Validation<S, E> {
        match self {
            Ok(_) => Validation::valid(subject),
            Err(error) => Validation::invalid(subject, error),
        }
    }
}
