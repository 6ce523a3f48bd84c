//! Success/failure outcomes for composing fallible computations.
//!
//! [`Outcome`] unifies computations that complete normally with ones that
//! fail, so a pipeline of fallible steps can be written without branching on
//! errors at every step. Each combinator that runs a user callback applies
//! the same fixed policy, implemented in [`classify`]:
//!
//! - recoverable errors, returned or panicked, are captured as
//!   [`Outcome::Failure`];
//! - [`Fatal`] signals are re-raised unchanged;
//! - [`Cancelled`] signals are re-raised wrapped in [`Interrupted`].
//!
//! ```
//! use pebbles::Outcome;
//!
//! let port = Outcome::eval(|| Ok("8080".parse::<u16>()?))
//!     .filter(|port| Ok(*port >= 1024))
//!     .recover(|_| Ok(8000));
//! assert_eq!(port, Outcome::success(8080));
//!
//! let missing: Outcome<u16> = Outcome::from_option(None);
//! assert_eq!(missing.to_string(), "Failure(NoSuchElement)");
//! ```
//!
//! [`TryFn`] composes outcome-producing functions before they are applied,
//! and [`Partition`] splits a stream of outcomes into values and faults.

mod classifier;
mod error;
mod function;
mod outcome;
mod pair;
mod partition;
mod sequence;

pub use classifier::{ErrorClass, classify, classify_panic};
pub use error::{
    CancelKind, Cancelled, ErrorMessage, Fallible, Fatal, Fault, Interrupted, NoSuchElement,
    Panicked, Unsupported,
};
pub use function::TryFn;
pub use outcome::{IntoOutcome, Outcome, OutcomeVisitor};
pub use pair::Pair;
pub use partition::{Partition, PartitionExt};
pub use sequence::zip_with_index;
