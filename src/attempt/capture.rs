//! The boundary where raised faults become [`Attempt::Failure`] values.
//!
//! Rust signals recoverable faults by returning `Err` (usually through `?`),
//! so [`Attempt::attempt`] runs a `Result`-returning thunk. With the `std`
//! feature, [`Attempt::attempt_unwind`] also absorbs panics, except the ones
//! carrying a [`ContractViolation`](crate::types::ContractViolation).
use crate::attempt::core::Attempt;

#[cfg(feature = "std")]
use crate::types::alloc_type::Box;
#[cfg(feature = "std")]
use crate::types::ContractViolation;
#[cfg(feature = "std")]
use core::any::Any;
#[cfg(feature = "std")]
use core::fmt;

impl<R, E> Attempt<R, E> {
    /// Runs `thunk` and captures its outcome.
    ///
    /// `Ok(value)` becomes `Success(value)`; any error returned, including one
    /// propagated with `?` from inside the thunk, becomes `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::Attempt;
    ///
    /// let parsed = Attempt::attempt(|| {
    ///     let n: i32 = "21".parse()?;
    ///     Ok::<_, std::num::ParseIntError>(n * 2)
    /// });
    /// assert_eq!(parsed, Attempt::success(42));
    ///
    /// let failed = Attempt::attempt(|| "x".parse::<i32>());
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub fn attempt<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Result<R, E>,
    {
        match thunk() {
            Ok(result) => Self::Success(result),
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("attempt captured a failure");
                Self::Failure(error)
            },
        }
    }
}

#[cfg(feature = "std")]
impl<R> Attempt<R, Fault> {
    /// Runs `thunk`, capturing a panic raised inside it as `Failure(Fault)`.
    ///
    /// Panics raised by contract violations (wrong-variant access, invalid
    /// arguments) are not captured: they are resumed as they were raised.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::Attempt;
    ///
    /// let ok = Attempt::attempt_unwind(|| 1 + 1);
    /// assert_eq!(ok.into_value(), Some(2));
    ///
    /// let failed = Attempt::attempt_unwind(|| -> i32 { panic!("boom") });
    /// assert_eq!(failed.get_error().message(), Some("boom"));
    /// ```
    pub fn attempt_unwind<F>(thunk: F) -> Self
    where
        F: FnOnce() -> R + std::panic::UnwindSafe,
    {
        match std::panic::catch_unwind(thunk) {
            Ok(result) => Self::Success(result),
            Err(payload) if payload.is::<ContractViolation>() => {
                #[cfg(feature = "tracing")]
                tracing::trace!("re-raising contract violation");
                std::panic::resume_unwind(payload)
            },
            Err(payload) => {
                let fault = Fault { payload };
                #[cfg(feature = "tracing")]
                tracing::warn!(panic_message = fault.message(), "attempt captured a panic");
                Self::Failure(fault)
            },
        }
    }
}

/// A panic captured by [`Attempt::attempt_unwind`].
#[cfg(feature = "std")]
pub struct Fault {
    payload: Box<dyn Any + Send + 'static>,
}

#[cfg(feature = "std")]
impl Fault {
    /// The panic message, when the panic was raised with a string payload.
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            return Some(message);
        }
        self.payload.downcast_ref::<String>().map(String::as_str)
    }

    /// The raw panic payload.
    pub fn payload(&self) -> &(dyn Any + Send + 'static) {
        &*self.payload
    }

    /// Consumes the fault and returns the raw payload, e.g. to resume the panic.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }
}

#[cfg(feature = "std")]
impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "std")]
impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "panicked: {message}"),
            None => f.write_str("panicked with a non-string payload"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Fault {}
