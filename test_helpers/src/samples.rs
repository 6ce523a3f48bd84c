//! Sample errors for each classification.

use pebbles::{Cancelled, Fatal, Fault};
use thiserror::Error;

/// Ordinary domain error used as the recoverable case in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// Input was rejected.
    #[error("invalid input: {0}")]
    Invalid(String),
    /// A looked-up resource did not exist.
    #[error("resource missing")]
    Missing,
}

/// A recoverable fault carrying [`SampleError::Invalid`].
#[must_use]
pub fn recoverable(input: &str) -> Fault {
    Fault::new(SampleError::Invalid(input.to_owned()))
}

/// A fault that is never captured and escapes unchanged.
#[must_use]
pub fn fatal(reason: &str) -> Fault {
    Fault::new(Fatal::new(reason))
}

/// A user cancellation, re-raised as `Interrupted`.
#[must_use]
pub fn cancelled(message: &str) -> Fault {
    Fault::new(Cancelled::user(message))
}
