use core::fmt;
use core::marker::PhantomData;

use crate::types::alloc_type::{Box, Vec};
use crate::types::Accumulator;
use crate::validation::Validation;
use crate::validator::Validator;

/// Builds a validator reporting `error` exactly when `predicate` rejects the subject.
///
/// # Examples
///
/// ```
/// use attempt_rail::validator::{ensuring_predicate, Validator};
///
/// let non_empty = ensuring_predicate(|s: &String| !s.is_empty(), "empty");
///
/// assert_eq!(non_empty.validate(String::new()).errors(), &["empty"]);
/// assert!(non_empty.validate("test".to_string()).is_valid());
/// ```
#[inline]
pub fn ensuring_predicate<S, E, P>(predicate: P, error: E) -> EnsuringPredicate<S, P, E>
where
    P: Fn(&S) -> bool,
    E: Clone,
{
    EnsuringPredicate { predicate, error, _subject: PhantomData }
}

/// Builds a validator running every validator of `validators` against the
/// same subject, in listing order, concatenating their errors.
///
/// No rule is skipped, even after an earlier one reported errors. Each rule
/// receives its own clone of the subject, and the returned validation always
/// carries the subject as given.
///
/// # Examples
///
/// ```
/// use attempt_rail::validator::{ensuring_predicate, validating_all, Validator};
///
/// let rules = validating_all::<i32, &str, _>([
///     Box::new(ensuring_predicate(|n: &i32| *n > 0, "not positive")) as Box<dyn Validator<_, _>>,
///     Box::new(ensuring_predicate(|n: &i32| n % 2 == 0, "odd")),
/// ]);
///
/// assert_eq!(rules.validate(-3).errors(), &["not positive", "odd"]);
/// ```
pub fn validating_all<S, E, I>(validators: I) -> ValidatingAll<S, E>
where
    I: IntoIterator<Item = Box<dyn Validator<S, E>>>,
{
    ValidatingAll { validators: validators.into_iter().collect() }
}

/// Builds a validator over a parent subject from a validator over one of its
/// projections; field errors are reported against the parent.
///
/// # Examples
///
/// ```
/// use attempt_rail::validator::{ensuring_predicate, validating_field, Validator};
///
/// let length = ensuring_predicate(|len: &usize| *len > 0, 0);
/// let rule = validating_field(|s: &&str| s.len(), length);
///
/// assert_eq!(rule.validate("").errors(), &[0]);
/// assert!(rule.validate("test").is_valid());
/// ```
#[inline]
pub fn validating_field<S, F, E, G, V>(accessor: G, validator: V) -> ValidatingField<S, F, G, V>
where
    G: Fn(&S) -> F,
    V: Validator<F, E>,
{
    ValidatingField { accessor, validator, _field: PhantomData }
}

/// Validator returned by [`ensuring_predicate`].
pub struct EnsuringPredicate<S, P, E> {
    predicate: P,
    error: E,
    _subject: PhantomData<fn(&S)>,
}

impl<S, P, E> Validator<S, E> for EnsuringPredicate<S, P, E>
where
    P: Fn(&S) -> bool,
    E: Clone,
{
    fn validate(&self, subject: S) -> Validation<S, E> {
        if (self.predicate)(&subject) {
            Validation::valid(subject)
        } else {
            Validation::invalid(subject, self.error.clone())
        }
    }
}

impl<S, P, E: fmt::Debug> fmt::Debug for EnsuringPredicate<S, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnsuringPredicate")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// Validator returned by [`validating_all`] and the
/// [`validating_all!`](crate::validating_all) macro.
pub struct ValidatingAll<S, E> {
    validators: Vec<Box<dyn Validator<S, E>>>,
}

impl<S, E> ValidatingAll<S, E> {
    /// Creates a validator with no rules; it reports no errors.
    #[inline]
    pub fn new() -> Self {
        Self { validators: Vec::new() }
    }

    /// Appends `validator`, to run after the ones already listed.
    #[inline]
    pub fn and<V>(mut self, validator: V) -> Self
    where
        V: Validator<S, E> + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }

    /// Number of listed validators.
    #[inline]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` if no validator is listed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<S, E> Default for ValidatingAll<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone, E> Validator<S, E> for ValidatingAll<S, E> {
    fn validate(&self, subject: S) -> Validation<S, E> {
        let mut errors = Accumulator::new();

        // Every rule sees the caller's subject; whatever subject a rule returns is discarded.
        for validator in &self.validators {
            errors.extend(validator.validate(subject.clone()).into_errors());
        }

        #[cfg(feature = "tracing")]
        if !errors.is_empty() {
            tracing::trace!(
                rules = self.validators.len(),
                errors = errors.len(),
                "validation rules reported errors"
            );
        }

        Validation::from_parts(subject, errors)
    }
}

impl<S, E> fmt::Debug for ValidatingAll<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatingAll")
            .field("rules", &self.validators.len())
            .finish()
    }
}

/// Validator returned by [`validating_field`].
pub struct ValidatingField<S, F, G, V> {
    accessor: G,
    validator: V,
    _field: PhantomData<fn(&S) -> F>,
}

impl<S, F, E, G, V> Validator<S, E> for ValidatingField<S, F, G, V>
where
    G: Fn(&S) -> F,
    V: Validator<F, E>,
{
    fn validate(&self, subject: S) -> Validation<S, E> {
        let field = (self.accessor)(&subject);
        let errors = self.validator.validate(field).into_errors();
        Validation::from_parts(subject, errors)
    }
}

impl<S, F, G, V> fmt::Debug for ValidatingField<S, F, G, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatingField").finish_non_exhaustive()
    }
}
