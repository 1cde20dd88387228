use crate::attempt::Attempt;
use crate::types::contract::{raise, ContractViolation};
use crate::types::{Accumulator, ErrorVec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of checking rules against a subject: the subject plus every
/// error found, in the order the rules reported them.
///
/// Unlike [`Attempt`], which fails fast on the first error, `Validation`
/// keeps running every check and accumulates all errors. A validation is
/// valid exactly when no error has been recorded.
///
/// Every combinator consumes the validation and returns a new one. Errors
/// are only ever appended: never dropped, deduplicated or reordered.
///
/// # Serde Support
///
/// `Validation` implements `Serialize` and `Deserialize` when `S` and `E` do.
///
/// # Type Parameters
///
/// * `S` - The subject type
/// * `E` - The error type
///
/// # Examples
///
/// ```
/// use attempt_rail::validation::Validation;
///
/// let checked = Validation::valid("subject")
///     .validate(|s| s.is_empty(), 0)
///     .validate_field(|s| s.len(), |len| *len > 0, 1)
///     .validate_with(|_| [2, 3]);
///
/// assert_eq!(checked.errors(), &[0, 2, 3]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub struct Validation<S, E> {
    subject: S,
    pub(super) errors: Accumulator<E>,
}

impl<S, E> Validation<S, E> {
    /// Creates a validation of `subject` with no errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::validation::Validation;
    ///
    /// let v = Validation::<_, &str>::valid(42);
    /// assert!(v.is_valid());
    /// assert!(v.errors().is_empty());
    /// ```
    #[inline]
    pub fn valid(subject: S) -> Self {
        Self { subject, errors: Accumulator::new() }
    }

    /// Creates an invalid validation of `subject` reporting `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::validation::Validation;
    ///
    /// let v = Validation::invalid("", "empty");
    /// assert!(v.is_invalid());
    /// assert_eq!(v.errors(), &["empty"]);
    /// ```
    #[inline]
    pub fn invalid(subject: S, error: E) -> Self {
        let mut errors = Accumulator::with_capacity(1);
        errors.push(error);
        Self { subject, errors }
    }

    /// Creates an invalid validation from a required first error followed by `more`.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::validation::Validation;
    ///
    /// let v = Validation::invalid_with("subject", 0, [1, 2]);
    /// assert_eq!(v.errors(), &[0, 1, 2]);
    /// ```
    #[inline]
    pub fn invalid_with<I>(subject: S, error: E, more: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut validation = Self::invalid(subject, error);
        validation.errors.extend(more);
        validation
    }

    /// Creates an invalid validation from a sequence of errors that must not be empty.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::InvalidArgument`] when `errors` yields
    /// nothing. Use [`try_invalid_many`](Self::try_invalid_many) to get the
    /// violation back instead.
    #[inline]
    #[track_caller]
    pub fn invalid_many<I>(subject: S, errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        match Self::try_invalid_many(subject, errors) {
            Ok(validation) => validation,
            Err(violation) => raise(violation),
        }
    }

    /// Creates an invalid validation, or reports the violation when `errors` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::types::ContractViolation;
    /// use attempt_rail::validation::Validation;
    ///
    /// assert!(Validation::try_invalid_many("s", ["a", "b"]).is_ok());
    /// assert!(matches!(
    ///     Validation::<_, &str>::try_invalid_many("s", []),
    ///     Err(ContractViolation::InvalidArgument { .. })
    /// ));
    /// ```
    pub fn try_invalid_many<I>(subject: S, errors: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = E>,
    {
        let errors: Accumulator<E> = errors.into_iter().collect();
        if errors.is_empty() {
            return Err(ContractViolation::InvalidArgument {
                reason: "an invalid validation requires at least one error",
            });
        }
        Ok(Self { subject, errors })
    }

    /// Creates a validation from a subject and a possibly empty sequence of errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::validation::Validation;
    ///
    /// assert!(Validation::<_, u8>::from_parts("s", []).is_valid());
    /// assert!(Validation::from_parts("s", [1u8]).is_invalid());
    /// ```
    #[inline]
    pub fn from_parts<I>(subject: S, errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self { subject, errors: errors.into_iter().collect() }
    }

    /// Folds the errors of many validations, of any subject type, into a
    /// validation of `subject`, in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::validation::Validation;
    ///
    /// let merged = Validation::merge_all(
    ///     "form",
    ///     [
    ///         Validation::invalid("name", 1),
    ///         Validation::valid("email"),
    ///         Validation::invalid_with("age", 2, [3]),
    ///     ],
    /// );
    ///
    /// assert_eq!(merged.subject(), &"form");
    /// assert_eq!(merged.errors(), &[1, 2, 3]);
    /// ```
    pub fn merge_all<S2, I>(subject: S, validations: I) -> Self
    where
        I: IntoIterator<Item = Validation<S2, E>>,
    {
        let errors = validations
            .into_iter()
            .flat_map(|validation| validation.errors)
            .collect();
        Self { subject, errors }
    }

    /// Returns `true` if no error has been recorded.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if at least one error has been recorded.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The validated subject.
    #[must_use]
    #[inline]
    pub fn subject(&self) -> &S {
        &self.subject
    }

    /// The recorded errors, in the order they were reported.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[E] {
        self.errors.as_slice()
    }

    /// Consumes the validation and returns the subject.
    #[must_use]
    #[inline]
    pub fn into_subject(self) -> S {
        self.subject
    }

    /// Consumes the validation and returns the errors.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> ErrorVec<E> {
        self.errors.into_inner()
    }

    /// Consumes the validation and returns the subject and the errors.
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (S, ErrorVec<E>) {
        (self.subject, self.errors.into_inner())
    }

    /// Calls `f` with the subject if the validation is valid, then returns `self` unchanged.
    #[inline]
    pub fn if_valid<F>(self, f: F) -> Self
    where
        F: FnOnce(&S),
    {
        if self.is_valid() {
            f(&self.subject);
        }
        self
    }

    /// Calls `f` with the subject and the errors if the validation is
    /// invalid, then returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::validation::Validation;
    ///
    /// let mut report = Vec::new();
    /// let _ = Validation::invalid_with("subject", 0, [1])
    ///     .if_valid(|_| unreachable!())
    ///     .if_invalid(|subject, errors| report.push((*subject, errors.to_vec())));
    ///
    /// assert_eq!(report, vec![("subject", vec![0, 1])]);
    /// ```
    #[inline]
    pub fn if_invalid<F>(self, f: F) -> Self
    where
        F: FnOnce(&S, &[E]),
    {
        if self.is_invalid() {
            f(&self.subject, self.errors.as_slice());
        }
        self
    }

    /// Checks the subject against `predicate`, appending `error` when it does not hold.
    ///
    /// The check runs whether or not earlier checks failed.
    #[inline]
    pub fn validate<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&S) -> bool,
    {
        if predicate(&self.subject) {
            self
        } else {
            self.merge_errors(core::iter::once(error))
        }
    }

    /// Checks a projection of the subject against `predicate`, appending
    /// `error` when it does not hold.
    ///
    /// The accessor produces an owned value (a length, a copy of a field, ...);
    /// to test a borrowed field, use [`validate`](Self::validate) directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::validation::Validation;
    ///
    /// let v = Validation::valid(String::from("abc"))
    ///     .validate_field(|s| s.len(), |len| *len >= 8, "too short")
    ///     .validate_field(|s| s.chars().any(|c| c.is_ascii_digit()), |has| *has, "no digit");
    ///
    /// assert_eq!(v.errors(), &["too short", "no digit"]);
    /// ```
    #[inline]
    pub fn validate_field<F, G, P>(self, accessor: G, predicate: P, error: E) -> Self
    where
        G: FnOnce(&S) -> F,
        P: FnOnce(&F) -> bool,
    {
        self.validate(|subject| predicate(&accessor(subject)), error)
    }

    /// Runs a rule returning zero or more errors against the subject and
    /// appends them in the order produced.
    #[inline]
    pub fn validate_with<I, R>(self, rule: R) -> Self
    where
        R: FnOnce(&S) -> I,
        I: IntoIterator<Item = E>,
    {
        let errors = rule(&self.subject);
        self.merge_errors(errors)
    }

    /// Runs a rule returning zero or more errors against a projection of the subject.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::validation::Validation;
    ///
    /// let v = Validation::valid("subject")
    ///     .validate_field_with(|s| s.chars().next(), |first| match first {
    ///         Some('s') => vec![],
    ///         _ => vec!["must start with s"],
    ///     });
    ///
    /// assert!(v.is_valid());
    /// ```
    #[inline]
    pub fn validate_field_with<F, G, I, R>(self, accessor: G, rule: R) -> Self
    where
        G: FnOnce(&S) -> F,
        R: FnOnce(&F) -> I,
        I: IntoIterator<Item = E>,
    {
        self.validate_with(|subject| rule(&accessor(subject)))
    }

    /// Runs another validation-producing rule against the subject and folds its errors in.
    ///
    /// The subject of the produced validation is discarded.
    #[inline]
    pub fn merge_with<S2, V>(self, validator: V) -> Self
    where
        V: FnOnce(&S) -> Validation<S2, E>,
    {
        let other = validator(&self.subject);
        self.merge(other)
    }

    /// Runs a validation-producing rule against a projection of the subject
    /// and folds its errors in.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::validation::Validation;
    ///
    /// let v = Validation::valid(12345)
    ///     .merge_field_with(|n| n.to_string(), |s| Validation::invalid(s, "not a word"));
    ///
    /// assert_eq!(v.subject(), &12345);
    /// assert_eq!(v.errors(), &["not a word"]);
    /// ```
    #[inline]
    pub fn merge_field_with<F, G, S2, V>(self, accessor: G, validator: V) -> Self
    where
        G: FnOnce(&S) -> F,
        V: FnOnce(F) -> Validation<S2, E>,
    {
        self.merge_with(|subject| validator(accessor(subject)))
    }

    /// Folds the errors of `other`, whatever its subject, into this validation.
    ///
    /// A valid `other` leaves `self` unchanged. Otherwise the errors of `self`
    /// come first, followed by the errors of `other`, each in their own order.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::validation::Validation;
    ///
    /// let left = Validation::invalid("s", "a");
    /// let merged = left.merge(Validation::invalid(0u64, "b"));
    /// assert_eq!(merged.errors(), &["a", "b"]);
    ///
    /// let adopted = Validation::valid("s").merge(Validation::invalid(1u8, "c"));
    /// assert_eq!(adopted, Validation::invalid("s", "c"));
    /// ```
    pub fn merge<S2>(self, other: Validation<S2, E>) -> Self {
        if other.is_valid() {
            return self;
        }
        if self.is_valid() {
            return Self { subject: self.subject, errors: other.errors };
        }
        self.merge_errors(other.errors)
    }

    /// Appends an already known sequence of errors.
    #[inline]
    pub fn merge_errors<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        self.errors.extend(errors);
        self
    }

    /// Applies `f` to the whole container.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::validation::Validation;
    ///
    /// let v = Validation::<_, u8>::valid("subject")
    ///     .flat_map(|v| Validation::invalid(v.into_subject().len(), "rejected"));
    ///
    /// assert_eq!(v, Validation::invalid(7, "rejected"));
    /// ```
    #[inline]
    pub fn flat_map<SS, EE, F>(self, f: F) -> Validation<SS, EE>
    where
        F: FnOnce(Self) -> Validation<SS, EE>,
    {
        f(self)
    }

    /// Maps the subject, keeping the errors.
    #[inline]
    pub fn map_subject<SS, F>(self, f: F) -> Validation<SS, E>
    where
        F: FnOnce(S) -> SS,
    {
        Validation { subject: f(self.subject), errors: self.errors }
    }

    /// Maps each error, keeping their order.
    #[inline]
    pub fn map_errors<EE, F>(self, f: F) -> Validation<S, EE>
    where
        F: FnMut(E) -> EE,
    {
        Validation { subject: self.subject, errors: self.errors.into_iter().map(f).collect() }
    }

    /// Converts into a fail-fast [`Attempt`].
    ///
    /// A valid validation becomes `Success(subject)`; an invalid one becomes
    /// `Failure` of the whole error sequence, not just its first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt_rail::validation::Validation;
    /// use attempt_rail::Attempt;
    ///
    /// assert_eq!(Validation::<_, u8>::valid("s").to_attempt(), Attempt::success("s"));
    ///
    /// let failed = Validation::invalid_with("s", 1, [2]).to_attempt();
    /// assert_eq!(failed.into_error().unwrap().as_slice(), &[1, 2]);
    /// ```
    #[inline]
    pub fn to_attempt(self) -> Attempt<S, ErrorVec<E>> {
        if self.is_valid() {
            Attempt::Success(self.subject)
        } else {
            Attempt::Failure(self.errors.into_inner())
        }
    }
}
