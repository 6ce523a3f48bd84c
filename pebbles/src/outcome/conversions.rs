//! Conversions between outcomes and the standard library's `Result` and
//! `Option`.

use crate::{
    classifier::settle,
    error::{Fallible, Fault},
};

use super::Outcome;

/// Extension for turning any `Result` into an [`Outcome`].
///
/// The error is classified on the way in: a fatal or cancellation signal is
/// re-raised rather than stored.
///
/// ```
/// use pebbles::{IntoOutcome, Outcome};
///
/// let outcome: Outcome<u8> = "7".parse::<u8>().into_outcome();
/// assert_eq!(outcome, Outcome::success(7));
/// ```
pub trait IntoOutcome<T> {
    /// Convert `self` into an outcome.
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> IntoOutcome<T> for Result<T, E>
where
    E: Into<Fault>,
{
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(settle(error.into())),
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> From<Outcome<T>> for Fallible<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.get()
    }
}
