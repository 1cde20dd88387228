use crate::traits::WithError;
use crate::types::ErrorVec;
use crate::validation::core::Validation;

/// Implementation of `WithError` for `Validation` types.
///
/// Every accumulated error is mapped, in order, and the `Result` form keeps
/// the whole error sequence.
///
/// # Examples
///
/// ```
/// use attempt_rail::traits::WithError;
/// use attempt_rail::validation::Validation;
///
/// let validation = Validation::invalid_with("subject", "err1", ["err2"]);
/// let mapped = validation.fmap_error(|e| format!("Error: {}", e));
/// assert_eq!(mapped.iter_errors().count(), 2);
///
/// let valid = Validation::<_, &str>::valid(42);
/// assert_eq!(WithError::to_result(valid), Ok(42));
/// ```
impl<S, E> WithError<E> for Validation<S, E> {
    type Success = S;
    type Failure = ErrorVec<E>;
    type ErrorOutput<G> = Validation<S, G>;

    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(E) -> G,
    {
        self.map_errors(f)
    }

    fn to_result(self) -> Result<Self::Success, Self::Failure> {
        self.to_attempt().to_result()
    }
}
