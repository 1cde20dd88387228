//! The fail-fast [`Attempt`] container.
//!
//! An [`Attempt`] holds exactly one of a result or an error. Result-side
//! combinators stop running at the first failure; error-side combinators stop
//! running once a success is reached.
//!
//! # Key Components
//!
//! - [`Attempt`] - The `Success`/`Failure` container and its combinators
//! - [`Attempt::attempt`] - Captures the outcome of a fallible thunk
//! - `Attempt::attempt_unwind` / `Fault` - Panic capture (requires `std`)
//!
//! # Examples
//!
//! ```
//! use attempt_rail::attempt::Attempt;
//!
//! let total = Attempt::<i32, String>::success(40)
//!     .map_result(|n| n + 2)
//!     .if_failure(|_| unreachable!());
//!
//! assert_eq!(total.get_result(), &42);
//! ```
pub mod capture;
pub mod core;

#[cfg(feature = "std")]
pub use self::capture::Fault;
pub use self::core::*;
