use crate::types::alloc_type::Vec;
use crate::types::Accumulator;
use crate::validation::core::Validation;

impl<S, E> Validation<S, E> {
    /// Iterates over the recorded errors in the order they were reported.
    pub fn iter_errors(&self) -> core::slice::Iter<'_, E> {
        self.errors.iter()
    }
}

impl<'a, S, E> IntoIterator for &'a Validation<S, E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_errors()
    }
}

/// Collects independent validations into one validation of all their
/// subjects, concatenating their errors in iteration order.
///
/// # Examples
///
/// ```
/// use attempt_rail::validation::Validation;
///
/// let fields = vec![
///     Validation::valid("alice"),
///     Validation::invalid("", "empty"),
///     Validation::invalid("x", "too short"),
/// ];
///
/// let all: Validation<Vec<&str>, &str> = fields.into_iter().collect();
/// assert_eq!(all.subject(), &vec!["alice", "", "x"]);
/// assert_eq!(all.errors(), &["empty", "too short"]);
/// ```
impl<S, E> FromIterator<Validation<S, E>> for Validation<Vec<S>, E> {
    fn from_iter<I: IntoIterator<Item = Validation<S, E>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut subjects = Vec::with_capacity(lower);
        let mut errors = Accumulator::new();

        for validation in iter {
            let (subject, found) = validation.into_parts();
            subjects.push(subject);
            errors.extend(found);
        }

        Validation::from_parts(subjects, errors)
    }
}
