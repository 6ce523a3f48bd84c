//! Partitioning a sequence of outcomes into successes and failures.
//!
//! [`Partition`] is the accumulator: a pair of builders that routes each
//! outcome to the matching side. Accumulating left to right keeps both sides
//! in encounter order. Partial accumulators built over separate segments of
//! the input are merged with [`Partition::combine`]; the merged result is
//! only globally ordered when the partials are combined in segment order.

use std::{panic, thread};

use tracing::debug;

use crate::{Fault, Outcome, Pair};

/// Accumulator splitting outcomes into successful values and faults.
///
/// ```
/// use pebbles::{Fault, Outcome, Partition};
///
/// let fault = Fault::msg("bad row");
/// let partition: Partition<i32> = vec![
///     Outcome::success(7),
///     Outcome::Failure(fault.clone()),
///     Outcome::success(8),
/// ]
/// .into_iter()
/// .collect();
///
/// let (values, faults) = partition.finish().into_inner();
/// assert_eq!(values, vec![7, 8]);
/// assert!(faults.len() == 1 && faults.iter().all(|f| f.ptr_eq(&fault)));
/// ```
#[derive(Debug, Clone)]
pub struct Partition<T> {
    successes: Vec<T>,
    failures: Vec<Fault>,
}

impl<T> Partition<T> {
    /// Create an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            successes: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Route `outcome` to the matching side.
    pub fn push(&mut self, outcome: Outcome<T>) {
        let successes = &mut self.successes;
        let failures = &mut self.failures;
        outcome.accept(|value| successes.push(value), |fault| failures.push(fault));
    }

    /// Append `other` after `self`, side by side.
    ///
    /// Successes and failures are concatenated independently, left then
    /// right. Both accumulators are consumed, so a merge can never observe a
    /// partial mutation from another thread.
    ///
    /// Order is preserved globally only when `other` covers input that comes
    /// after the input of `self`. Combining partials out of order keeps each
    /// original segment internally ordered but not the sequence as a whole.
    #[must_use]
    pub fn combine(mut self, mut other: Self) -> Self {
        self.successes.append(&mut other.successes);
        self.failures.append(&mut other.failures);
        self
    }

    /// Values accumulated so far.
    #[must_use]
    pub fn successes(&self) -> &[T] {
        &self.successes
    }

    /// Faults accumulated so far.
    #[must_use]
    pub fn failures(&self) -> &[Fault] {
        &self.failures
    }

    /// Returns `true` when no outcome has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.successes.is_empty() && self.failures.is_empty()
    }

    /// Finish accumulation, yielding `(successes, failures)`.
    #[must_use]
    pub fn finish(self) -> Pair<Vec<T>, Vec<Fault>> {
        Pair::new(self.successes, self.failures)
    }
}

impl<T: Send> Partition<T> {
    /// Accumulate every segment on its own scoped thread, then combine the
    /// partial results in segment order.
    ///
    /// The result is ordered as the concatenation of `segments`. A panic in
    /// a worker is resumed on the calling thread.
    #[must_use]
    pub fn from_segments<S, I>(segments: S) -> Self
    where
        S: IntoIterator<Item = I>,
        I: IntoIterator<Item = Outcome<T>> + Send,
    {
        let segments: Vec<I> = segments.into_iter().collect();
        debug!(segments = segments.len(), "partitioning segments on worker threads");
        thread::scope(|scope| {
            let workers: Vec<_> = segments
                .into_iter()
                .map(|segment| scope.spawn(move || segment.into_iter().collect::<Self>()))
                .collect();
            workers
                .into_iter()
                .fold(Self::new(), |merged, worker| match worker.join() {
                    Ok(partial) => merged.combine(partial),
                    Err(payload) => panic::resume_unwind(payload),
                })
        })
    }
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<Outcome<T>> for Partition<T> {
    fn extend<I: IntoIterator<Item = Outcome<T>>>(&mut self, outcomes: I) {
        for outcome in outcomes {
            self.push(outcome);
        }
    }
}

impl<T> FromIterator<Outcome<T>> for Partition<T> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(outcomes: I) -> Self {
        let mut partition = Self::new();
        partition.extend(outcomes);
        partition
    }
}

impl<T> FromIterator<Outcome<T>> for Pair<Vec<T>, Vec<Fault>> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(outcomes: I) -> Self {
        outcomes.into_iter().collect::<Partition<T>>().finish()
    }
}

impl<T> Outcome<T> {
    /// Split `outcomes` into their values and their faults, in encounter
    /// order.
    #[must_use]
    pub fn partition<I>(outcomes: I) -> Pair<Vec<T>, Vec<Fault>>
    where
        I: IntoIterator<Item = Self>,
    {
        outcomes.into_iter().collect()
    }
}

/// Iterator adapter for [`Outcome::partition`].
pub trait PartitionExt<T>: Iterator<Item = Outcome<T>> + Sized {
    /// Consume the iterator, splitting values from faults.
    fn partition_outcomes(self) -> Pair<Vec<T>, Vec<Fault>> {
        self.collect()
    }
}

impl<T, I> PartitionExt<T> for I where I: Iterator<Item = Outcome<T>> {}
