//! Contained boundaries: run caller-supplied logic, catch whatever goes wrong,
//! and redirect it to the failure sink instead of propagating it.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::PoolError;

/// Something that went wrong inside a contained boundary.
pub enum Failure {
    /// The enclosed logic panicked; holds the panic payload.
    Panic(Box<dyn Any + Send + 'static>),
    /// The enclosed logic returned an error.
    Error(PoolError),
}

impl Failure {
    /// Human-readable description of the failure.
    ///
    /// Panic payloads that are `&str` or `String` are rendered verbatim.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Panic(payload) => panic_message(payload.as_ref()),
            Self::Error(err) => err.to_string(),
        }
    }

    /// The pool error, if this failure is not a panic.
    #[must_use]
    pub const fn as_error(&self) -> Option<&PoolError> {
        match self {
            Self::Error(err) => Some(err),
            Self::Panic(_) => None,
        }
    }

    /// Whether the failure came from a panic.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panic(_))
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panic(_) => write!(f, "panic: {}", self.message()),
            Self::Error(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panic(_) => f.debug_tuple("Panic").field(&self.message()).finish(),
            Self::Error(err) => f.debug_tuple("Error").field(err).finish(),
        }
    }
}

impl From<PoolError> for Failure {
    fn from(err: PoolError) -> Self {
        Self::Error(err)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Receiver of contained failures.
///
/// Called synchronously on whichever thread caught the failure, so it must
/// not block for long. Any `Fn(&str, &Failure)` closure is a sink.
pub trait FailureSink: Send + Sync {
    /// Report a failure caught at the boundary identified by `label`.
    fn notify(&self, label: &str, failure: &Failure);
}

impl<F> FailureSink for F
where
    F: Fn(&str, &Failure) + Send + Sync,
{
    fn notify(&self, label: &str, failure: &Failure) {
        self(label, failure);
    }
}

/// Run `f` inside a contained boundary.
///
/// A panic or an `Err` from `f` is converted into a [`Failure`], handed to
/// `sink` under `label`, and swallowed. Returns the value of `f` on success.
pub fn contain<T, F>(label: &str, sink: &dyn FailureSink, f: F) -> Option<T>
where
    F: FnOnce() -> Result<T, PoolError>,
{
    let failure = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => return Some(value),
        Ok(Err(err)) => Failure::Error(err),
        Err(payload) => Failure::Panic(payload),
    };
    sink.notify(label, &failure);
    None
}
