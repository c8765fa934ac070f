//! The error captured by failure adapters.

use std::any::Any;
use std::fmt;

/// How a wrapped call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureOrigin {
    /// The call returned `Err`.
    Error,
    /// The call panicked.
    Panic,
}

impl fmt::Display for FailureOrigin {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(formatter, "error"),
            Self::Panic => write!(formatter, "panic"),
        }
    }
}

/// A failure captured at the adapter boundary.
///
/// Holds the name of the wrapped function, a rendered message, and the
/// original payload: the `Err` value for [`FailureOrigin::Error`], or the
/// panic payload for [`FailureOrigin::Panic`].
///
/// # Examples
///
/// ```rust
/// use optkit::adapt::{FailureOrigin, capture_with};
/// use optkit::gate::Opt;
///
/// let captured = capture_with(
///     "remove_file",
///     || Err::<(), _>("permission denied".to_string()),
///     String::clone,
/// );
/// match captured {
///     Opt::Present(error) => {
///         assert_eq!(error.origin(), FailureOrigin::Error);
///         assert_eq!(error.message(), "permission denied");
///         assert_eq!(error.downcast_ref::<String>().map(String::as_str), Some("permission denied"));
///     }
///     Opt::Absent => unreachable!(),
/// }
/// ```
pub struct CapturedError {
    function: &'static str,
    message: String,
    origin: FailureOrigin,
    payload: Box<dyn Any + Send>,
}

impl CapturedError {
    pub(crate) fn from_error<E>(function: &'static str, message: String, error: E) -> Self
    where
        E: Send + 'static,
    {
        Self {
            function,
            message,
            origin: FailureOrigin::Error,
            payload: Box::new(error),
        }
    }

    pub(crate) fn from_panic(function: &'static str, payload: Box<dyn Any + Send>) -> Self {
        Self {
            function,
            message: panic_message(payload.as_ref()),
            origin: FailureOrigin::Panic,
            payload,
        }
    }

    /// The name of the wrapped function.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// The rendered failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the call returned an error or panicked.
    #[must_use]
    pub const fn origin(&self) -> FailureOrigin {
        self.origin
    }

    /// Returns `true` if the call panicked.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self.origin, FailureOrigin::Panic)
    }

    /// Borrows the original payload if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Consumes the error, returning the original payload.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            FailureOrigin::Error => write!(formatter, "{} failed: {}", self.function, self.message),
            FailureOrigin::Panic => {
                write!(formatter, "{} panicked: {}", self.function, self.message)
            }
        }
    }
}

impl fmt::Debug for CapturedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CapturedError")
            .field("function", &self.function)
            .field("origin", &self.origin)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl std::error::Error for CapturedError {}
