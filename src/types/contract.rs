use core::fmt::{self, Display};

/// Which side of an [`Attempt`](crate::Attempt) an accessor expected to find.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Success,
    Failure,
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Success => f.write_str("success"),
            Variant::Failure => f.write_str("failure"),
        }
    }
}

/// A programming error in the use of the combinator algebra.
///
/// Contract violations never travel through the business error channel of
/// [`Attempt`](crate::Attempt) or [`Validation`](crate::Validation). The
/// panicking accessors raise them immediately; the `try_*` accessors hand
/// them back as a plain `Result`.
///
/// With the `std` feature the violation itself is the panic payload, so it can
/// be recovered with `downcast_ref::<ContractViolation>()` and is always
/// re-raised by [`Attempt::attempt_unwind`](crate::Attempt::attempt_unwind).
///
/// # Examples
///
/// ```
/// use attempt_rail::types::{ContractViolation, Variant};
/// use attempt_rail::Attempt;
///
/// let attempt: Attempt<i32, &str> = Attempt::failure("boom");
/// assert_eq!(
///     attempt.try_result(),
///     Err(ContractViolation::EmptyAccess { expected: Variant::Success })
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContractViolation {
    /// The accessed variant is not the one held.
    EmptyAccess { expected: Variant },
    /// An argument breaks a precondition of the operation.
    InvalidArgument { reason: &'static str },
}

impl Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::EmptyAccess { expected } => {
                write!(f, "empty access: attempt does not hold a {expected}")
            },
            ContractViolation::InvalidArgument { reason } => {
                write!(f, "invalid argument: {reason}")
            },
        }
    }
}

impl core::error::Error for ContractViolation {}

/// Raises `violation` as a panic.
#[cold]
#[track_caller]
pub(crate) fn raise(violation: ContractViolation) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(%violation, "contract violation");

    #[cfg(feature = "std")]
    {
        std::panic::panic_any(violation)
    }
    #[cfg(not(feature = "std"))]
    {
        panic!("{}", violation)
    }
}
