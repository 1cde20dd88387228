//! Fail-fast [`Attempt`] and error-accumulating [`Validation`] containers,
//! with reusable [`Validator`](validator::Validator) rules.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `attempt_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Fail-fast composition
//!
//! ```
//! use attempt_rail::Attempt;
//!
//! let port = Attempt::attempt(|| "8080".parse::<u16>())
//!     .map_error(|e| e.to_string())
//!     .transform_result(|port| {
//!         if port >= 1024 {
//!             Attempt::success(port)
//!         } else {
//!             Attempt::failure("privileged port".to_string())
//!         }
//!     });
//!
//! assert_eq!(port, Attempt::success(8080));
//! ```
//!
//! ## Validation Accumulation
//!
//! ```
//! use attempt_rail::validation::Validation;
//!
//! let checked = Validation::valid("subject")
//!     .validate(|s| s.is_empty(), 0)
//!     .validate_field(|s| s.len(), |len| *len > 0, 1)
//!     .validate_with(|_| [2, 3]);
//!
//! assert!(checked.is_invalid());
//! assert_eq!(checked.errors(), &[0, 2, 3]);
//! ```
//!
//! ## Bridging to fail-fast
//!
//! ```
//! use attempt_rail::validation::Validation;
//!
//! let attempt = Validation::invalid_with("subject", "a", ["b"]).to_attempt();
//! assert_eq!(attempt.into_error().unwrap().as_slice(), &["a", "b"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// The fail-fast Attempt container
pub mod attempt;
/// Conversions between Result, Attempt, and Validation
pub mod convert;
/// Variadic constructor macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits shared by the containers
pub mod traits;
/// Error storage and contract violation types
pub mod types;
/// Validation type for error accumulation
pub mod validation;
/// Reusable, composable validation rules
pub mod validator;

#[cfg(feature = "std")]
pub use attempt::Fault;
pub use attempt::Attempt;
pub use convert::*;
pub use traits::{ResultExt, WithError};
pub use types::{ContractViolation, ErrorVec};
pub use validation::Validation;
pub use validator::Validator;
