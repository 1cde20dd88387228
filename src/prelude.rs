//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use attempt_rail::prelude::*;
//!
//! let rule = validating_all![
//!     ensuring_predicate(|s: &&str| !s.is_empty(), "empty"),
//!     validating_field(|s: &&str| s.len(), ensuring_predicate(|n: &usize| *n <= 8, "too long")),
//! ];
//!
//! let outcome: Attempt<&str, _> = rule.validate("overlong name").to_attempt();
//! assert!(outcome.is_failure());
//! ```

// Macros
pub use crate::{invalid, validating_all};

// Core types
pub use crate::attempt::Attempt;
pub use crate::types::{ContractViolation, ErrorVec};
pub use crate::validation::Validation;
pub use crate::validator::{ensuring_predicate, validating_all, validating_field, Validator};

// Traits
pub use crate::traits::{ResultExt, WithError};
