//! Error kinds raised by the outcome combinators and the classification
//! signals understood by [`classify`](crate::classify).

use std::{error::Error, fmt};

use thiserror::Error;

use super::Fault;

/// No element satisfies the request.
///
/// Raised when an absent value is converted into an outcome and when a
/// [`filter`](crate::Outcome::filter) predicate rejects the value.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct NoSuchElement {
    message: String,
}

impl NoSuchElement {
    /// The error carried by an outcome built from an absent value.
    #[must_use]
    pub fn no_value() -> Self {
        Self {
            message: String::from("No value present"),
        }
    }

    /// The error carried when a predicate rejects `value`.
    #[must_use]
    pub fn predicate_failed(value: &impl fmt::Display) -> Self {
        Self {
            message: format!("Predicate does not hold for {value}"),
        }
    }

    /// Human-readable description of the missing element.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The operation is not defined for this outcome variant.
#[derive(Debug, Error)]
#[error("{operation}")]
pub struct Unsupported {
    operation: &'static str,
}

impl Unsupported {
    /// `failed()` called on a successful outcome.
    #[must_use]
    pub const fn success_failed() -> Self {
        Self {
            operation: "Success.failed",
        }
    }

    /// Name of the rejected operation.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }
}

/// A callback panicked with a recoverable payload.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Record the text of a panic.
    #[must_use]
    pub const fn new(message: String) -> Self {
        Self { message }
    }

    /// The panic message, or a placeholder for non-text payloads.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Ad hoc error built from a message by [`Fault::msg`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ErrorMessage {
    message: String,
}

impl ErrorMessage {
    /// Wrap `message`.
    #[must_use]
    pub const fn new(message: String) -> Self {
        Self { message }
    }
}

/// Signals a condition no caller can recover from.
///
/// A `Fatal` error is never captured as a failure: every combinator
/// re-raises it unchanged on the calling stack.
#[derive(Debug, Error)]
#[error("fatal: {reason}")]
pub struct Fatal {
    reason: String,
}

impl Fatal {
    /// Build a fatal signal.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Why the computation cannot continue.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Origin of a cancellation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CancelKind {
    /// Cancelled explicitly by a caller.
    User,
    /// A deadline elapsed.
    Timeout,
    /// The host is shutting down.
    Shutdown,
    /// The executing thread was asked to stop.
    Interrupt,
}

impl fmt::Display for CancelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Timeout => "timeout",
            Self::Shutdown => "shutdown",
            Self::Interrupt => "interrupt",
        })
    }
}

/// Request to abort because of an external cancellation.
///
/// Like [`Fatal`], a cancellation is never captured as a failure. It is
/// re-raised wrapped in [`Interrupted`] so every caller observes it.
#[derive(Debug, Clone)]
pub struct Cancelled {
    kind: CancelKind,
    message: Option<String>,
}

impl Cancelled {
    /// Cancellation of the given kind without further detail.
    #[must_use]
    pub const fn new(kind: CancelKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Cancellation requested by a caller, with an explanation.
    #[must_use]
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            kind: CancelKind::User,
            message: Some(message.into()),
        }
    }

    /// Cancellation caused by an elapsed deadline.
    #[must_use]
    pub const fn timeout() -> Self {
        Self::new(CancelKind::Timeout)
    }

    /// Origin of the request.
    #[must_use]
    pub const fn kind(&self) -> CancelKind {
        self.kind
    }

    /// Optional explanation supplied with the request.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "cancelled ({}): {message}", self.kind),
            None => write!(f, "cancelled ({})", self.kind),
        }
    }
}

impl Error for Cancelled {}

/// Unchecked failure carrying an escalated cancellation.
///
/// This is the payload unwound by a combinator when its callback raised a
/// [`Cancelled`] signal. Catch it with [`std::panic::catch_unwind`] and
/// downcast the payload to `Interrupted` to observe the cancellation.
#[derive(Debug)]
pub struct Interrupted {
    cause: Fault,
}

impl Interrupted {
    /// Wrap the cancellation `cause`.
    #[must_use]
    pub const fn new(cause: Fault) -> Self {
        Self { cause }
    }

    /// The original cancellation.
    #[must_use]
    pub const fn cause(&self) -> &Fault {
        &self.cause
    }
}

impl fmt::Display for Interrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "computation interrupted: {}", self.cause)
    }
}

impl Error for Interrupted {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_error())
    }
}
