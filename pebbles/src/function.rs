//! Functions producing outcomes, composable before they are applied.

use std::{fmt, sync::Arc};

use crate::{Fallible, Outcome};

type Apply<X, Y> = dyn Fn(X) -> Outcome<Y> + Send + Sync;

/// A shareable function from `X` to [`Outcome<Y>`].
///
/// Composition with [`TryFn::map`] and [`TryFn::flat_map`] happens before
/// invocation: `f.map(h)` builds a new function without calling `f`, and
/// `f.map(h).apply(x)` equals `f.apply(x).map(h)`. A pipeline can therefore
/// be assembled once and applied many times, each application guarded on
/// its own.
///
/// ```
/// use pebbles::{Outcome, TryFn};
///
/// let parse = TryFn::lift(|s: &'static str| Ok(s.parse::<i64>()?));
/// let negate = parse.map(|n| Ok(-n));
///
/// assert_eq!(negate.apply("5"), Outcome::success(-5));
/// assert!(negate.apply("five").is_failure());
/// ```
pub struct TryFn<X, Y> {
    f: Arc<Apply<X, Y>>,
}

impl<X: 'static, Y: 'static> TryFn<X, Y> {
    /// Wrap a function that already produces outcomes.
    #[must_use]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(X) -> Outcome<Y> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Lift a fallible function; each application runs under the
    /// classification policy like [`Outcome::eval`].
    #[must_use]
    pub fn lift<F>(f: F) -> Self
    where
        F: Fn(X) -> Fallible<Y> + Send + Sync + 'static,
    {
        Self::new(move |x| Outcome::eval(|| f(x)))
    }

    /// Apply the function to `x`.
    #[must_use]
    pub fn apply(&self, x: X) -> Outcome<Y> {
        (self.f)(x)
    }

    /// Compose `after` onto the success path of this function.
    #[must_use]
    pub fn map<Z, G>(&self, after: G) -> TryFn<X, Z>
    where
        Z: 'static,
        G: Fn(Y) -> Fallible<Z> + Send + Sync + 'static,
    {
        let before = Arc::clone(&self.f);
        TryFn::new(move |x| before(x).map(|y| after(y)))
    }

    /// Compose an outcome-producing `after` onto the success path of this
    /// function.
    #[must_use]
    pub fn flat_map<Z, G>(&self, after: G) -> TryFn<X, Z>
    where
        Z: 'static,
        G: Fn(Y) -> Outcome<Z> + Send + Sync + 'static,
    {
        let before = Arc::clone(&self.f);
        TryFn::new(move |x| before(x).flat_map(|y| after(y)))
    }
}

impl<X, Y> Clone for TryFn<X, Y> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<X, Y> fmt::Debug for TryFn<X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFn").finish_non_exhaustive()
    }
}
