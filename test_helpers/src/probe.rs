//! Call recorders for asserting which callbacks ran, and with what.
//!
//! A [`Probe`] is cheap to clone and shares its log across clones and
//! threads, so it can be moved into `Send + Sync` closures such as those
//! held by a `TryFn`.
//!
//! # Examples
//!
//! ```
//! use pebbles_test_helpers::Probe;
//!
//! let probe = Probe::new();
//! let recorder = probe.clone();
//! let double = move |n: i32| {
//!     recorder.record(n);
//!     n * 2
//! };
//! assert_eq!(double(4), 8);
//! assert_eq!(probe.seen(), vec![4]);
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

/// Shared, ordered log of the values handed to instrumented callbacks.
#[derive(Debug)]
pub struct Probe<T> {
    log: Arc<Mutex<Vec<T>>>,
}

impl<T> Probe<T> {
    /// Creates an empty probe.
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends `value` to the shared log.
    pub fn record(&self, value: T) {
        self.log.lock().push(value);
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.log.lock().len()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn untouched(&self) -> bool {
        self.log.lock().is_empty()
    }
}

impl<T: Clone> Probe<T> {
    /// Snapshot of the recorded values in call order.
    #[must_use]
    pub fn seen(&self) -> Vec<T> {
        self.log.lock().clone()
    }
}

impl<T> Clone for Probe<T> {
    fn clone(&self) -> Self {
        Self {
            log: Arc::clone(&self.log),
        }
    }
}

impl<T> Default for Probe<T> {
    fn default() -> Self {
        Self::new()
    }
}
