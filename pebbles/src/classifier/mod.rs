//! Classification of errors raised by user callbacks.
//!
//! Every combinator that invokes a callback runs it through [`guard`], which
//! applies one fixed policy to both ways a callback can fail: returning an
//! `Err` or unwinding with a panic.

use std::{
    any::Any,
    error::Error,
    panic::{self, AssertUnwindSafe},
};

use tracing::{debug, warn};

use crate::error::{Cancelled, Fallible, Fatal, Fault, Interrupted, Panicked};

/// Category assigned to a caught error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Never captured; re-raised unchanged.
    FatalUnrecoverable,
    /// Never captured; re-raised wrapped in [`Interrupted`].
    Cancellation,
    /// Captured as a failure.
    Recoverable,
}

impl ErrorClass {
    /// Returns `true` when errors of this class become failure values.
    #[must_use]
    pub const fn is_captured(self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Classify a captured error.
///
/// | Class                | Signal                                  | Policy                               |
/// |----------------------|-----------------------------------------|--------------------------------------|
/// | `FatalUnrecoverable` | [`Fatal`]                               | re-raised unchanged                  |
/// | `Cancellation`       | [`Cancelled`], [`Interrupted`]          | re-raised wrapped in [`Interrupted`] |
/// | `Recoverable`        | anything else, including panic messages | captured as a failure                |
///
/// Re-raising unwinds the calling stack with [`std::panic::resume_unwind`].
/// A fatal error returned as `Err(fault)` unwinds with that [`Fault`] as the
/// payload; a fatal panic unwinds with its original payload. Aborting
/// conditions such as stack overflow or allocation failure never unwind and
/// therefore never reach the classifier.
///
/// ```
/// use pebbles::{classify, Cancelled, ErrorClass, Fatal, Fault};
///
/// assert_eq!(classify(&Fault::msg("bad input")), ErrorClass::Recoverable);
/// assert_eq!(classify(&Fault::new(Fatal::new("oom"))), ErrorClass::FatalUnrecoverable);
/// assert_eq!(classify(&Fault::new(Cancelled::timeout())), ErrorClass::Cancellation);
/// ```
#[must_use]
pub fn classify(fault: &Fault) -> ErrorClass {
    class_of(fault.as_error())
}

/// Classify the payload of an unwinding panic.
///
/// A [`Fault`] payload is classified like the fault itself, as are bare
/// [`Fatal`], [`Cancelled`] and [`Interrupted`] payloads. Any other payload,
/// such as the message of `panic!("...")`, is recoverable.
#[must_use]
pub fn classify_panic(payload: &(dyn Any + Send)) -> ErrorClass {
    payload_error(payload).map_or(ErrorClass::Recoverable, class_of)
}

fn class_of(error: &(dyn Error + 'static)) -> ErrorClass {
    if error.is::<Fatal>() {
        ErrorClass::FatalUnrecoverable
    } else if error.is::<Cancelled>() || error.is::<Interrupted>() {
        ErrorClass::Cancellation
    } else {
        ErrorClass::Recoverable
    }
}

fn payload_error(payload: &(dyn Any + Send)) -> Option<&(dyn Error + 'static)> {
    if let Some(fault) = payload.downcast_ref::<Fault>() {
        return Some(fault.as_error());
    }
    if let Some(fatal) = payload.downcast_ref::<Fatal>() {
        return Some(fatal);
    }
    if let Some(cancelled) = payload.downcast_ref::<Cancelled>() {
        return Some(cancelled);
    }
    payload
        .downcast_ref::<Interrupted>()
        .map(|interrupted| interrupted as &(dyn Error + 'static))
}

/// Run `callback`, capturing recoverable errors and re-raising the rest.
///
/// This is the only place the policy is enforced.
pub(crate) fn guard<R>(callback: impl FnOnce() -> Fallible<R>) -> Fallible<R> {
    match panic::catch_unwind(AssertUnwindSafe(callback)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(fault)) => Err(settle(fault)),
        Err(payload) => Err(settle_panic(payload)),
    }
}

/// Apply the policy to a returned error, yielding it back only when it is
/// recoverable.
pub(crate) fn settle(fault: Fault) -> Fault {
    match classify(&fault) {
        ErrorClass::Recoverable => fault,
        class @ ErrorClass::FatalUnrecoverable => {
            warn!(class = ?class, error = %fault, kind = fault.short_name(), "re-raising fatal error");
            panic::resume_unwind(Box::new(fault))
        }
        class @ ErrorClass::Cancellation => {
            warn!(class = ?class, error = %fault, kind = fault.short_name(), "re-raising cancellation");
            let cause = fault
                .downcast_ref::<Interrupted>()
                .map(|interrupted| interrupted.cause().clone());
            panic::resume_unwind(Box::new(Interrupted::new(cause.unwrap_or(fault))))
        }
    }
}

fn settle_panic(payload: Box<dyn Any + Send>) -> Fault {
    let class = classify_panic(&*payload);
    if class == ErrorClass::FatalUnrecoverable {
        warn!(class = ?class, "re-raising fatal panic");
        panic::resume_unwind(payload);
    }
    let fault = into_fault(payload);
    if class.is_captured() {
        debug!(error = %fault, kind = fault.short_name(), "captured panic as failure");
    }
    settle(fault)
}

fn into_fault(payload: Box<dyn Any + Send>) -> Fault {
    let not_fault = match payload.downcast::<Fault>() {
        Ok(fault) => return *fault,
        Err(other) => other,
    };
    let not_cancelled = match not_fault.downcast::<Cancelled>() {
        Ok(cancelled) => return Fault::new(*cancelled),
        Err(other) => other,
    };
    let not_interrupted = match not_cancelled.downcast::<Interrupted>() {
        Ok(interrupted) => return Fault::new(*interrupted),
        Err(other) => other,
    };
    match not_interrupted.downcast::<Fatal>() {
        Ok(fatal) => Fault::new(*fatal),
        Err(other) => Fault::new(Panicked::new(panic_message(&*other))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        return (*message).to_owned();
    }
    payload
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_else(|| String::from("Box<dyn Any>"))
}

#[cfg(test)]
mod tests;
