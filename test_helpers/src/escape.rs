//! Observation of signals that escape a combinator.
//!
//! Fatal and cancellation signals leave a combinator by unwinding.
//! [`catch_escape`] stops the unwind and reports what the payload was, so
//! tests can assert on the escaped signal with `?` rather than matching raw
//! `Box<dyn Any>` payloads.

use std::panic::{self, AssertUnwindSafe};

use anyhow::{Result, anyhow};
use pebbles::{Fatal, Fault, Interrupted};

/// The payload of an unwind caught by [`catch_escape`].
#[derive(Debug)]
pub enum Escape {
    /// A fault re-raised unchanged, as happens to fatal errors returned by a
    /// callback.
    Fault(Fault),
    /// A bare fatal payload, as raised by `resume_unwind(Box::new(Fatal))`.
    Fatal(Fatal),
    /// A cancellation re-raised by the classifier.
    Interrupted(Interrupted),
    /// Any other panic, described by its message when it has one.
    Panic(String),
}

impl Escape {
    /// Returns `true` for a fatal escape, whether as a fault or a bare
    /// payload.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Fault(fault) => fault.is::<Fatal>(),
            Self::Fatal(_) => true,
            Self::Interrupted(_) | Self::Panic(_) => false,
        }
    }

    /// The wrapped cancellation, if this escape is one.
    #[must_use]
    pub const fn interrupted(&self) -> Option<&Interrupted> {
        match self {
            Self::Interrupted(interrupted) => Some(interrupted),
            Self::Fault(_) | Self::Fatal(_) | Self::Panic(_) => None,
        }
    }
}

/// Runs `callback` and captures whatever unwinds out of it.
///
/// # Errors
///
/// Returns an error if `callback` completes without unwinding.
pub fn catch_escape<R>(callback: impl FnOnce() -> R) -> Result<Escape> {
    let Err(payload) = panic::catch_unwind(AssertUnwindSafe(callback)) else {
        return Err(anyhow!("callback returned without escaping"));
    };
    let not_fault = match payload.downcast::<Fault>() {
        Ok(fault) => return Ok(Escape::Fault(*fault)),
        Err(other) => other,
    };
    let not_fatal = match not_fault.downcast::<Fatal>() {
        Ok(fatal) => return Ok(Escape::Fatal(*fatal)),
        Err(other) => other,
    };
    let not_interrupted = match not_fatal.downcast::<Interrupted>() {
        Ok(interrupted) => return Ok(Escape::Interrupted(*interrupted)),
        Err(other) => other,
    };
    let message = not_interrupted
        .downcast_ref::<&'static str>()
        .map(|message| (*message).to_owned())
        .or_else(|| not_interrupted.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    Ok(Escape::Panic(message))
}
