//! Success-path and failure-path combinators.
//!
//! Success-path combinators leave a failure untouched and never call their
//! callback on it; failure-path combinators do the same for a success. The
//! untouched outcome is returned as is, so a failure keeps its original
//! fault instance.

use std::fmt;

use crate::{
    classifier::guard,
    error::{Fallible, Fault, NoSuchElement, Unsupported},
};

use super::Outcome;

impl<T> Outcome<T> {
    /// Transform the value of a success with `f`.
    ///
    /// A recoverable error raised by `f` becomes a failure.
    ///
    /// ```
    /// use pebbles::Outcome;
    ///
    /// let doubled = Outcome::success(21).map(|n| Ok(n * 2));
    /// assert_eq!(doubled, Outcome::success(42));
    /// ```
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> Fallible<U>) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::from_guarded(guard(|| f(value))),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Alias for [`Outcome::map`].
    ///
    /// Unlike `Result::and_then`, `f` returns a plain value; use
    /// [`Outcome::flat_map`] to chain a callback that returns an outcome.
    #[must_use]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Fallible<U>) -> Outcome<U> {
        self.map(f)
    }

    /// Chain a callback that itself produces an outcome.
    ///
    /// Only the call to `f` is guarded: a failure returned by `f` is passed
    /// through as is and is not classified again.
    #[must_use]
    pub fn flat_map<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Self::Success(value) => guard(|| Ok(f(value))).unwrap_or_else(Outcome::Failure),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Keep a success only when `predicate` holds for its value.
    ///
    /// A rejected value becomes a failure carrying [`NoSuchElement`] with the
    /// message `Predicate does not hold for <value>`.
    ///
    /// ```
    /// use pebbles::Outcome;
    ///
    /// let rejected = Outcome::success(7).filter(|v| Ok(*v > 8));
    /// let message = rejected.error().map(ToString::to_string);
    /// assert_eq!(message.as_deref(), Some("Predicate does not hold for 7"));
    /// ```
    #[must_use]
    pub fn filter(self, predicate: impl FnOnce(&T) -> Fallible<bool>) -> Self
    where
        T: fmt::Display,
    {
        match self {
            Self::Success(value) => match guard(|| predicate(&value)) {
                Ok(true) => Self::Success(value),
                Ok(false) => Self::failure(NoSuchElement::predicate_failed(&value)),
                Err(fault) => Self::Failure(fault),
            },
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Replace a failure with the value computed from its fault.
    ///
    /// Errors raised by `f` are classified like those of any other callback.
    ///
    /// ```
    /// use pebbles::Outcome;
    ///
    /// let divisor = std::hint::black_box(0);
    /// let quotient = Outcome::eval(|| Ok(7 / divisor));
    /// assert!(quotient.is_failure());
    /// assert_eq!(quotient.recover(|_| Ok(-1)), Outcome::success(-1));
    /// ```
    #[must_use]
    pub fn recover(self, f: impl FnOnce(Fault) -> Fallible<T>) -> Self {
        match self {
            Self::Failure(fault) => Self::from_guarded(guard(|| f(fault))),
            success @ Self::Success(_) => success,
        }
    }

    /// Replace a failure with the outcome computed from its fault.
    #[must_use]
    pub fn recover_with(self, f: impl FnOnce(Fault) -> Self) -> Self {
        match self {
            Self::Failure(fault) => guard(|| Ok(f(fault))).unwrap_or_else(Self::Failure),
            success @ Self::Success(_) => success,
        }
    }

    /// Replace a failure with `default`.
    #[must_use]
    pub fn or_else(self, default: Self) -> Self {
        match self {
            Self::Failure(_) => default,
            success @ Self::Success(_) => success,
        }
    }

    /// Replace a failure with the outcome produced by `supplier`.
    #[must_use]
    pub fn or_else_with(self, supplier: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Failure(_) => guard(|| Ok(supplier())).unwrap_or_else(Self::Failure),
            success @ Self::Success(_) => success,
        }
    }

    /// Invert a success into a failure carrying [`Unsupported`].
    ///
    /// A failure is returned unchanged, holding the same fault instance.
    #[must_use]
    pub fn failed(self) -> Self {
        match self {
            Self::Success(_) => Self::failure(Unsupported::success_failed()),
            failure @ Self::Failure(_) => failure,
        }
    }
}
