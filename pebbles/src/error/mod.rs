//! Error handle and error kinds shared by every outcome.

mod fault;
mod types;

pub use fault::Fault;
pub use types::{
    CancelKind, Cancelled, ErrorMessage, Fatal, Interrupted, NoSuchElement, Panicked, Unsupported,
};

/// Result of a fallible callback: a value, or the [`Fault`] it raised.
pub type Fallible<T> = Result<T, Fault>;

#[cfg(test)]
mod tests;
