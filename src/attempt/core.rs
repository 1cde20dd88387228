use crate::types::contract::{raise, ContractViolation, Variant};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fail-fast container holding either a result or a single error.
///
/// `Attempt<R, E>` short-circuits: once it is a `Failure`, every result-side
/// combinator (`map_result`, `transform_result`, ...) passes the error through
/// untouched, and dually every error-side combinator (`map_error`,
/// `recover_error`, ...) leaves a `Success` untouched.
///
/// # Type Parameters
///
/// * `R` - The result type
/// * `E` - The error type
///
/// # Variants
///
/// * `Success(R)` - Holds the result of a successful computation
/// * `Failure(E)` - Holds the error of a failed computation
///
/// # Examples
///
/// ```
/// use attempt_rail::Attempt;
///
/// let parsed = Attempt::<&str, &str>::success("42")
///     .transform_result(|s| match s.parse::<i32>() {
///         Ok(n) => Attempt::success(n),
///         Err(_) => Attempt::failure("not a number"),
///     })
///     .map_result(|n| n * 2);
///
/// assert_eq!(parsed, Attempt::success(84));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Attempt<R, E> {
    Success(R),
    Failure(E),
}

impl<R, E> Attempt<R, E> {
    /// Creates a successful attempt wrapping `result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::Attempt;
    ///
    /// let a = Attempt::<_, ()>::success("result");
    /// assert!(a.is_success());
    /// assert_eq!(a.get_result(), &"result");
    /// ```
    #[inline]
    pub fn success(result: R) -> Self {
        Self::Success(result)
    }

    /// Creates a failed attempt wrapping `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::Attempt;
    ///
    /// let a = Attempt::<(), _>::failure(404);
    /// assert!(a.is_failure());
    /// assert_eq!(a.get_error(), &404);
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the attempt holds a result.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the attempt holds an error.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the held result.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::EmptyAccess`] if the attempt is a failure.
    /// Use [`try_result`](Self::try_result) to check without panicking.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn get_result(&self) -> &R {
        match self.try_result() {
            Ok(result) => result,
            Err(violation) => raise(violation),
        }
    }

    /// Returns the held error.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::EmptyAccess`] if the attempt is a success.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn get_error(&self) -> &E {
        match self.try_error() {
            Ok(error) => error,
            Err(violation) => raise(violation),
        }
    }

    /// Returns the held result, or the access violation if this is a failure.
    #[inline]
    pub fn try_result(&self) -> Result<&R, ContractViolation> {
        match self {
            Self::Success(result) => Ok(result),
            Self::Failure(_) => Err(ContractViolation::EmptyAccess { expected: Variant::Success }),
        }
    }

    /// Returns the held error, or the access violation if this is a success.
    #[inline]
    pub fn try_error(&self) -> Result<&E, ContractViolation> {
        match self {
            Self::Success(_) => Err(ContractViolation::EmptyAccess { expected: Variant::Failure }),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Extracts the result, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<R> {
        match self {
            Self::Success(result) => Some(result),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the error, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows both sides of the attempt.
    #[inline]
    pub fn as_ref(&self) -> Attempt<&R, &E> {
        match self {
            Self::Success(result) => Attempt::Success(result),
            Self::Failure(error) => Attempt::Failure(error),
        }
    }

    /// Calls `f` with the result if this is a success, then returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::Attempt;
    ///
    /// let mut seen = None;
    /// let a = Attempt::<i32, &str>::success(7).if_success(|r| seen = Some(*r));
    /// assert_eq!(seen, Some(7));
    /// assert_eq!(a, Attempt::success(7));
    /// ```
    #[inline]
    pub fn if_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Success(result) = &self {
            f(result);
        }
        self
    }

    /// Calls `f` with the error if this is a failure, then returns `self` unchanged.
    #[inline]
    pub fn if_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Maps the result, leaving a failure untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::Attempt;
    ///
    /// assert_eq!(Attempt::<i32, &str>::success(2).map_result(|x| x + 1), Attempt::success(3));
    /// assert_eq!(Attempt::<i32, &str>::failure("e").map_result(|x| x + 1), Attempt::failure("e"));
    /// ```
    #[inline]
    pub fn map_result<RR, F>(self, f: F) -> Attempt<RR, E>
    where
        F: FnOnce(R) -> RR,
    {
        self.transform_result(|result| Attempt::Success(f(result)))
    }

    /// Maps the error, leaving a success untouched.
    #[inline]
    pub fn map_error<EE, F>(self, f: F) -> Attempt<R, EE>
    where
        F: FnOnce(E) -> EE,
    {
        self.recover_error(|error| Attempt::Failure(f(error)))
    }

    /// Chains a computation that may itself fail, invoked only on success.
    ///
    /// A failure is passed through with its error unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::Attempt;
    ///
    /// fn half(n: i32) -> Attempt<i32, &'static str> {
    ///     if n % 2 == 0 { Attempt::success(n / 2) } else { Attempt::failure("odd") }
    /// }
    ///
    /// assert_eq!(Attempt::success(8).transform_result(half).transform_result(half), Attempt::success(2));
    /// assert_eq!(Attempt::success(6).transform_result(half).transform_result(half), Attempt::failure("odd"));
    /// ```
    #[inline]
    pub fn transform_result<RR, F>(self, f: F) -> Attempt<RR, E>
    where
        F: FnOnce(R) -> Attempt<RR, E>,
    {
        match self {
            Self::Success(result) => f(result),
            Self::Failure(error) => Attempt::Failure(error),
        }
    }

    /// Like [`transform_result`](Self::transform_result), for a step whose
    /// error type `IE` differs from this attempt's; `adapter` converts it back.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::Attempt;
    ///
    /// let a = Attempt::<&str, String>::success("x1")
    ///     .transform_result_adapting(
    ///         |s| match s.parse::<u8>() {
    ///             Ok(n) => Attempt::success(n),
    ///             Err(e) => Attempt::failure(e),
    ///         },
    ///         |e: std::num::ParseIntError| e.to_string(),
    ///     );
    ///
    /// assert!(a.is_failure());
    /// ```
    #[inline]
    pub fn transform_result_adapting<RR, IE, F, A>(self, f: F, adapter: A) -> Attempt<RR, E>
    where
        F: FnOnce(R) -> Attempt<RR, IE>,
        A: FnOnce(IE) -> E,
    {
        self.transform_result(|result| f(result).map_error(adapter))
    }

    /// Chains a recovery computation, invoked only on failure.
    ///
    /// A success is passed through with its result unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::Attempt;
    ///
    /// let recovered = Attempt::<i32, &str>::failure("missing")
    ///     .recover_error(|_| Attempt::<i32, ()>::success(0));
    /// assert_eq!(recovered, Attempt::success(0));
    /// ```
    #[inline]
    pub fn recover_error<EE, F>(self, f: F) -> Attempt<R, EE>
    where
        F: FnOnce(E) -> Attempt<R, EE>,
    {
        match self {
            Self::Success(result) => Attempt::Success(result),
            Self::Failure(error) => f(error),
        }
    }

    /// Like [`recover_error`](Self::recover_error), for a recovery whose
    /// result type `IR` differs from this attempt's; `adapter` converts it back.
    #[inline]
    pub fn recover_error_adapting<IR, EE, F, A>(self, f: F, adapter: A) -> Attempt<R, EE>
    where
        F: FnOnce(E) -> Attempt<IR, EE>,
        A: FnOnce(IR) -> R,
    {
        self.recover_error(|error| f(error).map_result(adapter))
    }

    /// Total pattern match: exactly one of the two branches runs.
    ///
    /// This is the combinator to reach for when both type parameters change.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::Attempt;
    ///
    /// let flipped: Attempt<&str, bool> = Attempt::<String, &str>::failure("fail")
    ///     .transform(|_| Attempt::failure(false), |_| Attempt::success("0"));
    /// assert_eq!(flipped, Attempt::success("0"));
    /// ```
    #[inline]
    pub fn transform<RR, EE, FR, FE>(self, on_result: FR, on_failure: FE) -> Attempt<RR, EE>
    where
        FR: FnOnce(R) -> Attempt<RR, EE>,
        FE: FnOnce(E) -> Attempt<RR, EE>,
    {
        match self {
            Self::Success(result) => on_result(result),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Applies `f` to the whole container.
    #[inline]
    pub fn flat_map<RR, EE, F>(self, f: F) -> Attempt<RR, EE>
    where
        F: FnOnce(Self) -> Attempt<RR, EE>,
    {
        f(self)
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn to_result(self) -> Result<R, E> {
        match self {
            Self::Success(result) => Ok(result),
            Self::Failure(error) => Err(error),
        }
    }

    /// Wraps a standard `Result`.
    #[inline]
    pub fn from_result(result: Result<R, E>) -> Self {
        match result {
            Ok(result) => Self::Success(result),
            Err(error) => Self::Failure(error),
        }
    }
}
