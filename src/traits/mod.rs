//! Traits shared by the crate's containers.
//!
//! - [`WithError`]: Abstraction for types that carry remappable errors
//! - [`ResultExt`]: Bridges `Result` into [`Attempt`](crate::Attempt) and
//!   [`Validation`](crate::Validation)
//!
//! # Examples
//!
//! ```
//! use attempt_rail::traits::{ResultExt, WithError};
//!
//! let attempt = Err::<i32, &str>("boom").into_attempt();
//! assert_eq!(attempt.fmap_error(str::len).into_error(), Some(4));
//! ```

pub mod result_ext;
pub mod with_error;

pub use result_ext::ResultExt;
pub use with_error::WithError;
