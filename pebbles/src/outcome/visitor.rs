//! Visitor interface for eliminating an outcome with extra context.

use crate::error::Fault;

/// Handles both variants of an [`Outcome`](crate::Outcome).
///
/// Used with [`Outcome::visit`](crate::Outcome::visit), which passes a
/// caller-supplied context to whichever arm applies. Neither arm runs under
/// the classification policy, so implementations are expected not to fail.
///
/// ```
/// use pebbles::{Fault, Outcome, OutcomeVisitor};
///
/// struct Describe;
///
/// impl OutcomeVisitor<u32, &'static str> for Describe {
///     type Output = String;
///
///     fn visit_success(&self, value: u32, label: &'static str) -> String {
///         format!("{label}: {value}")
///     }
///
///     fn visit_failure(&self, error: Fault, label: &'static str) -> String {
///         format!("{label} failed with {}", error.short_name())
///     }
/// }
///
/// assert_eq!(Outcome::success(3).visit(&Describe, "count"), "count: 3");
/// ```
pub trait OutcomeVisitor<T, C> {
    /// Value produced by either arm.
    type Output;

    /// Called with the value of a success.
    fn visit_success(&self, value: T, context: C) -> Self::Output;

    /// Called with the fault of a failure.
    fn visit_failure(&self, error: Fault, context: C) -> Self::Output;
}
