//! Test helpers shared across crates in the pebbles workspace.
//!
//! The helpers cover three recurring needs of the outcome test suites:
//! recording which callbacks ran, producing errors of each classification,
//! and observing signals that escape a combinator by unwinding.

pub mod escape;
pub mod probe;
pub mod samples;

pub use escape::{Escape, catch_escape};
pub use probe::Probe;
pub use samples::{SampleError, cancelled, fatal, recoverable};
