//! Shared handle around a captured error.

use std::{any, error::Error, fmt, ptr, sync::Arc};

use super::ErrorMessage;

type DynError = dyn Error + Send + Sync + 'static;

/// A captured error held by a failed [`Outcome`](crate::Outcome).
///
/// `Fault` is an immutable, reference-counted handle: cloning it shares the
/// same error instance, and two faults are only ever considered the same
/// error when they point at the same allocation (see [`Fault::ptr_eq`]).
/// Errors are not assumed to be structurally comparable.
///
/// Any `E: Error + Send + Sync + 'static` converts into a `Fault`, so `?`
/// works inside callbacks returning [`Fallible`](crate::Fallible). `Fault`
/// does not implement [`Error`] itself for the same reason; use
/// [`Fault::as_error`] when a `&dyn Error` is required.
///
/// ```
/// use pebbles::Fault;
///
/// let parsed: Result<u8, _> = "300".parse::<u8>();
/// let fault = Fault::from(parsed.unwrap_err());
/// assert_eq!(fault.short_name(), "ParseIntError");
/// assert!(fault.ptr_eq(&fault.clone()));
/// ```
#[derive(Clone)]
pub struct Fault {
    error: Arc<DynError>,
    name: &'static str,
}

impl Fault {
    /// Capture `error`, recording its unqualified type name.
    #[must_use]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            error: Arc::new(error),
            name: short_type_name::<E>(),
        }
    }

    /// Capture a plain message as an [`ErrorMessage`].
    #[must_use]
    pub fn msg(message: impl fmt::Display) -> Self {
        Self::new(ErrorMessage::new(message.to_string()))
    }

    /// Capture an already boxed dynamic error.
    ///
    /// The concrete type is erased by the box, so the short name falls back
    /// to `Error`.
    #[must_use]
    pub fn from_boxed(error: Box<DynError>) -> Self {
        Self {
            error: Arc::from(error),
            name: "Error",
        }
    }

    /// Unqualified type name of the captured error, e.g. `ParseIntError`.
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        self.name
    }

    /// Borrow the captured error as a trait object.
    #[must_use]
    pub fn as_error(&self) -> &DynError {
        &*self.error
    }

    /// Returns `true` when the captured error is of type `E`.
    #[must_use]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.error.is::<E>()
    }

    /// Borrow the captured error as `E` when it has that type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.error.downcast_ref::<E>()
    }

    /// Returns `true` when both handles share one error instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ptr::addr_eq(Arc::as_ptr(&self.error), Arc::as_ptr(&other.error))
    }

    /// Address of the shared error, used for identity hashing.
    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.error).cast::<()>().addr()
    }
}

impl<E> From<E> for Fault
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl AsRef<DynError> for Fault {
    fn as_ref(&self) -> &DynError {
        self.as_error()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.error, f)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.error, f)
    }
}

/// Strip module paths and generic arguments from a type name.
fn short_type_name<E: ?Sized>() -> &'static str {
    let full = any::type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
