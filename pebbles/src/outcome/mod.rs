//! The two-variant outcome of a computation that may fail.

mod combinators;
mod conversions;
mod visitor;

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    classifier::guard,
    error::{Fallible, Fault, NoSuchElement},
    function::TryFn,
};

pub use conversions::IntoOutcome;
pub use visitor::OutcomeVisitor;

/// The completion of a computation: a value on success, or the captured
/// error on failure.
///
/// Outcomes are immutable values. Combinators that invoke a user callback
/// run it under the classification policy described in
/// [`classify`](crate::classify): recoverable errors, whether returned or
/// raised by a panic, become [`Outcome::Failure`], while fatal and
/// cancellation signals are re-raised on the calling stack.
///
/// # Equality
///
/// Two successes are equal when their values are equal. Two failures are
/// equal only when they hold the *same* error instance: errors are not
/// assumed to be structurally comparable, so two failures wrapping
/// equal-looking errors compare unequal. Hashing follows the same rule,
/// which makes a failed outcome a poor map key.
///
/// ```
/// use pebbles::{Fault, Outcome};
///
/// assert_eq!(Outcome::success(1), Outcome::success(1));
///
/// let first: Outcome<i32> = Outcome::failure(Fault::msg("same"));
/// let second: Outcome<i32> = Outcome::failure(Fault::msg("same"));
/// assert_ne!(first, second);
/// assert_eq!(first, first.clone());
/// ```
///
/// # Display
///
/// `Success(value)` for successes and `Failure(ShortName)` for failures,
/// where the short name is the error's type name. Messages are left out.
#[derive(Clone, Debug)]
pub enum Outcome<T> {
    /// The computation completed normally.
    ///
    /// The value may itself represent absence (`Outcome<Option<U>>`); the
    /// variant only asserts that no error occurred.
    Success(T),
    /// The computation raised a recoverable error.
    Failure(Fault),
}

impl<T> Outcome<T> {
    /// Wrap `value` as a success.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap `error` as a failure without classifying it.
    #[must_use]
    pub fn failure(error: impl Into<Fault>) -> Self {
        Self::Failure(error.into())
    }

    /// Evaluate `supplier`, capturing recoverable errors as a failure.
    ///
    /// Fatal and cancellation signals escape as described in
    /// [`classify`](crate::classify).
    ///
    /// ```
    /// use pebbles::Outcome;
    ///
    /// let parsed = Outcome::eval(|| Ok("42".parse::<i32>()?));
    /// assert_eq!(parsed, Outcome::success(42));
    ///
    /// let rejected = Outcome::eval(|| Ok("x".parse::<i32>()?));
    /// assert_eq!(rejected.to_string(), "Failure(ParseIntError)");
    /// ```
    #[must_use]
    pub fn eval(supplier: impl FnOnce() -> Fallible<T>) -> Self {
        Self::from_guarded(guard(supplier))
    }

    /// Lift `f` into a [`TryFn`] whose every application is evaluated like
    /// [`Outcome::eval`].
    #[must_use]
    pub fn lift<X, F>(f: F) -> TryFn<X, T>
    where
        X: 'static,
        T: 'static,
        F: Fn(X) -> Fallible<T> + Send + Sync + 'static,
    {
        TryFn::lift(f)
    }

    /// Convert an optional value, treating absence as a failure carrying
    /// [`NoSuchElement`] with the message `No value present`.
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or_else(|| Self::failure(NoSuchElement::no_value()), Self::Success)
    }

    pub(crate) fn from_guarded(result: Fallible<T>) -> Self {
        result.map_or_else(Self::Failure, Self::Success)
    }

    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Outcome::Failure`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Extract the value.
    ///
    /// # Errors
    ///
    /// Returns the captured fault itself, not a copy, when this outcome is a
    /// failure.
    pub fn get(self) -> Fallible<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(fault) => Err(fault),
        }
    }

    /// Borrow the value.
    ///
    /// # Errors
    ///
    /// Returns a reference to the captured fault when this outcome is a
    /// failure.
    pub const fn get_ref(&self) -> Result<&T, &Fault> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(fault) => Err(fault),
        }
    }

    /// The value, or `default` on failure.
    #[must_use]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// The value, or the result of `default` on failure.
    #[must_use]
    pub fn get_or_else_with(self, default: impl FnOnce() -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default(),
        }
    }

    /// The captured fault, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&Fault> {
        match self {
            Self::Success(_) => None,
            Self::Failure(fault) => Some(fault),
        }
    }

    /// Borrow the value as an option; failures become `None`.
    #[must_use]
    pub const fn to_option(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Convert into an option; failures become `None`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the value, sharing the fault handle on failure.
    #[must_use]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(fault) => Outcome::Failure(fault.clone()),
        }
    }

    /// Fold both variants into one value.
    ///
    /// `on_success` runs under the classification policy: when it raises a
    /// recoverable error, that error is handed to `on_failure` instead.
    /// Fatal and cancellation signals raised by `on_success` escape.
    /// `on_failure` is expected not to fail.
    ///
    /// ```
    /// use pebbles::{Fault, Outcome};
    ///
    /// let length = Outcome::success("four").fold(|_| 0, |s| Ok(s.len()));
    /// assert_eq!(length, 4);
    ///
    /// let rescued = Outcome::success(3).fold(
    ///     |fault| fault.to_string(),
    ///     |_| Err(Fault::msg("odd")),
    /// );
    /// assert_eq!(rescued, "odd");
    /// ```
    pub fn fold<A>(
        self,
        on_failure: impl FnOnce(Fault) -> A,
        on_success: impl FnOnce(T) -> Fallible<A>,
    ) -> A {
        match self {
            Self::Success(value) => match guard(|| on_success(value)) {
                Ok(folded) => folded,
                Err(fault) => on_failure(fault),
            },
            Self::Failure(fault) => on_failure(fault),
        }
    }

    /// Map each variant to a common type. Neither arm is guarded.
    pub fn transform<A>(
        self,
        on_success: impl FnOnce(T) -> A,
        on_failure: impl FnOnce(Fault) -> A,
    ) -> A {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(fault) => on_failure(fault),
        }
    }

    /// Hand the value or the fault to the matching consumer.
    pub fn accept(self, on_success: impl FnOnce(T), on_failure: impl FnOnce(Fault)) {
        self.transform(on_success, on_failure);
    }

    /// Dispatch to `visitor` with a caller-supplied `context`.
    pub fn visit<C, V>(self, visitor: &V, context: C) -> V::Output
    where
        V: OutcomeVisitor<T, C> + ?Sized,
    {
        match self {
            Self::Success(value) => visitor.visit_success(value, context),
            Self::Failure(fault) => visitor.visit_failure(fault, context),
        }
    }

    /// Run `f` on the value of a success.
    pub fn for_each(self, f: impl FnOnce(T)) {
        if let Self::Success(value) = self {
            f(value);
        }
    }
}

impl<T: PartialEq> PartialEq for Outcome<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Success(left), Self::Success(right)) => left == right,
            (Self::Failure(left), Self::Failure(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Outcome<T> {}

impl<T: Hash> Hash for Outcome<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Success(value) => {
                state.write_u8(0);
                value.hash(state);
            }
            Self::Failure(fault) => {
                state.write_u8(1);
                fault.addr().hash(state);
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Failure(fault) => write!(f, "Failure({})", fault.short_name()),
        }
    }
}
