//! Shorthand macros for the variadic constructors.
//!
//! - [`macro@crate::invalid`] - Builds an invalid [`Validation`](crate::Validation)
//!   from one or more errors; at least one error is required by the syntax.
//! - [`macro@crate::validating_all`] - Combines any number of validators into one
//!   that runs them all, in listing order.
//!
//! # Examples
//!
//! ```
//! use attempt_rail::{invalid, validating_all};
//! use attempt_rail::validator::{ensuring_predicate, Validator};
//!
//! let v = invalid!("subject"; 0, 1);
//! assert_eq!(v.errors(), &[0, 1]);
//!
//! let rules = validating_all![
//!     ensuring_predicate(|n: &u8| *n != 0, "zero"),
//!     ensuring_predicate(|n: &u8| *n < 100, "too large"),
//! ];
//! assert_eq!(rules.validate(0).errors(), &["zero"]);
//! ```

/// Creates an invalid [`Validation`](crate::Validation) of a subject from one
/// or more errors, kept in the listed order.
///
/// # Syntax
///
/// - `invalid!(subject; error)`
/// - `invalid!(subject; error, more, ...)`
///
/// # Examples
///
/// ```
/// use attempt_rail::invalid;
/// use attempt_rail::validation::Validation;
///
/// assert_eq!(invalid!("s"; "a"), Validation::invalid("s", "a"));
/// assert_eq!(invalid!(12345; 0, 1, 2).errors(), &[0, 1, 2]);
/// ```
#[macro_export]
macro_rules! invalid {
    ($subject:expr; $error:expr $(, $more:expr)* $(,)?) => {
        $crate::validation::Validation::invalid_with($subject, $error, [$($more),*])
    };
}

/// Combines validators into a [`ValidatingAll`](crate::validator::ValidatingAll)
/// that runs every one of them against the subject, in listing order.
///
/// Each argument may be any [`Validator`](crate::validator::Validator),
/// including plain closures; they do not need to share a concrete type.
///
/// # Examples
///
/// ```
/// use attempt_rail::validating_all;
/// use attempt_rail::validation::Validation;
/// use attempt_rail::validator::{ensuring_predicate, Validator};
///
/// let rules = validating_all![
///     ensuring_predicate(|s: &String| !s.is_empty(), "empty"),
///     |s: String| Validation::valid(s).validate(|s| s.is_ascii(), "not ascii"),
/// ];
///
/// assert_eq!(rules.validate(String::new()).errors(), &["empty"]);
/// ```
#[macro_export]
macro_rules! validating_all {
    ($($validator:expr),* $(,)?) => {
        $crate::validator::ValidatingAll::new()$(.and($validator))*
    };
}
