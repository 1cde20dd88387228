use crate::attempt::Attempt;

/// Abstraction over types that carry an error side which can be remapped.
///
/// Implemented for `Result`, [`Attempt`] and
/// [`Validation`](crate::validation::Validation), so code that only needs to
/// rewrite errors or fall back to a plain `Result` can stay generic over the
/// container.
///
/// # Type Parameters
///
/// * `E` - The current error type contained in the implementor
///
/// # Associated Types
///
/// * `Success` - The value held when no error is present
/// * `Failure` - The error side of [`to_result`](WithError::to_result)
/// * `ErrorOutput<G>` - The output type after mapping the error to type `G`
///
/// # Examples
///
/// ```
/// use attempt_rail::traits::WithError;
/// use attempt_rail::Attempt;
///
/// let attempt: Attempt<i32, u32> = Attempt::failure(404);
/// let mapped = attempt.fmap_error(|code| format!("HTTP {}", code));
/// assert_eq!(mapped, Attempt::failure("HTTP 404".to_string()));
/// ```
pub trait WithError<E> {
    type Success;

    type Failure;

    type ErrorOutput<G>;

    /// Maps every error using `f`, leaving the success side untouched.
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(E) -> G;

    /// Converts the container into a `Result`.
    ///
    /// For types that are already `Result`, this is a no-op.
    fn to_result(self) -> Result<Self::Success, Self::Failure>;
}

impl<T, E> WithError<E> for Result<T, E> {
    type Success = T;
    type Failure = E;
    type ErrorOutput<G> = Result<T, G>;

    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(E) -> G,
    {
        self.map_err(f)
    }

    fn to_result(self) -> Result<Self::Success, Self::Failure> {
        self
    }
}

impl<R, E> WithError<E> for Attempt<R, E> {
    type Success = R;
    type Failure = E;
    type ErrorOutput<G> = Attempt<R, G>;

    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(E) -> G,
    {
        self.map_error(f)
    }

    fn to_result(self) -> Result<R, E> {
        Attempt::to_result(self)
    }
}
