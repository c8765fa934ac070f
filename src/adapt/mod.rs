//! Failure adapters: turning fallible calls into optional results.
//!
//! Three runtime adapters sit at the boundary between code that signals
//! failure and code that works with [`Opt`]:
//!
//! | Adapter | Call returns | Success | Failure |
//! |---|---|---|---|
//! | [`attempt`] | `Result<R, E>` | `Present(r)` | `Absent` |
//! | [`capture`] | `Result<_, E>` | `Absent` | `Present(CapturedError)` |
//! | [`status`] | integer status | `Absent` (code `0`) | `Present(code)` |
//!
//! `attempt` and `capture` also catch unwinding panics, so a failure inside
//! the wrapped call never propagates past the adapter. `status` does not: a
//! status function that panics is a defect rather than a reported status.
//!
//! The error type of a wrapped call is unconstrained. [`attempt_with`] and
//! [`capture_with`] take a function rendering the error as a message;
//! [`attempt`] and [`capture`] describe it by its type name.
//!
//! Failures are logged with [`tracing`] at the adapter boundary. No
//! subscriber is installed by this crate.
//!
//! The `wrap_call!`, `wrap_exception!` and `wrap_error_code!` macros build
//! reusable adapted functions from a function descriptor on top of these.
//!
//! # Examples
//!
//! ```rust
//! use optkit::adapt::{attempt, attempt_with, status};
//! use optkit::gate::Opt;
//!
//! assert_eq!(attempt("parse", || "10".parse::<i32>()), Opt::Present(10));
//! assert_eq!(attempt("parse", || "bob".parse::<i32>()), Opt::Absent);
//!
//! let unit_error = attempt_with("lookup", || Err::<u8, ()>(()), |()| "no entry".to_string());
//! assert_eq!(unit_error, Opt::Absent);
//!
//! assert_eq!(status("exit_code", || 0), Opt::Absent);
//! assert_eq!(status("exit_code", || 2), Opt::Present(2));
//! ```

mod error;

pub use error::{CapturedError, FailureOrigin};

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::gate::Opt;

/// Runs a fallible call, returning its success value or `Absent`.
///
/// `Err` results and panics both yield `Absent`; no partial result is ever
/// returned. An error is logged at `debug` level under its type name, a
/// panic at `warn` level with its message. Use [`attempt_with`] to log a
/// rendered error message instead.
///
/// # Examples
///
/// ```rust
/// use optkit::adapt::attempt;
/// use optkit::gate::Opt;
///
/// let divide = |left: i32, right: i32| attempt("divide", move || {
///     if right == 0 { Err("division by zero") } else { Ok(left / right) }
/// });
/// assert_eq!(divide(9, 3), Opt::Present(3));
/// assert_eq!(divide(9, 0), Opt::Absent);
/// ```
pub fn attempt<R, E, F>(function: &'static str, call: F) -> Opt<R>
where
    F: FnOnce() -> Result<R, E>,
{
    attempt_with(function, call, describe_by_type::<E>)
}

/// Like [`attempt`], rendering an error with `describe` for the log.
///
/// `describe` is only called when the call returns `Err`.
///
/// # Examples
///
/// ```rust
/// use optkit::adapt::attempt_with;
/// use optkit::gate::Opt;
/// use std::ffi::OsString;
///
/// let text = attempt_with(
///     "into_string",
///     || OsString::from("plain").into_string(),
///     |raw: &OsString| format!("not unicode: {raw:?}"),
/// );
/// assert_eq!(text, Opt::Present("plain".to_string()));
/// ```
pub fn attempt_with<R, E, F, D>(function: &'static str, call: F, describe: D) -> Opt<R>
where
    F: FnOnce() -> Result<R, E>,
    D: FnOnce(&E) -> String,
{
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(value)) => Opt::Present(value),
        Ok(Err(error)) => {
            let message = describe(&error);
            tracing::debug!(function, error = %message, "wrapped call returned an error");
            Opt::Absent
        }
        Err(payload) => {
            let message = error::panic_message(payload.as_ref());
            tracing::warn!(function, error = %message, "wrapped call panicked");
            Opt::Absent
        }
    }
}

/// Runs a call for its effect, capturing its failure.
///
/// Returns `Absent` when the call completes with `Ok`, and the captured
/// error or panic otherwise. Any success value is discarded. The message of
/// a captured `Err` is the error's type name; use [`capture_with`] to
/// render it.
///
/// # Examples
///
/// ```rust
/// use optkit::adapt::capture;
/// use optkit::gate::Opt;
///
/// assert!(capture("flush", || Ok::<(), String>(())).is_none());
///
/// let captured = capture("flush", || -> Result<(), String> { panic!("disk full") });
/// assert!(captured.is_some_and(|error| error.is_panic() && error.message() == "disk full"));
/// ```
pub fn capture<T, E, F>(function: &'static str, call: F) -> Opt<CapturedError>
where
    F: FnOnce() -> Result<T, E>,
    E: Send + 'static,
{
    capture_with(function, call, describe_by_type::<E>)
}

/// Like [`capture`], rendering an error with `describe` for the log and
/// for [`CapturedError::message`].
///
/// # Examples
///
/// ```rust
/// use optkit::adapt::capture_with;
/// use optkit::gate::Opt;
///
/// let captured = capture_with("flush", || Err::<(), _>("broken pipe"), ToString::to_string);
/// assert!(captured.is_some_and(|error| error.message() == "broken pipe"));
/// ```
pub fn capture_with<T, E, F, D>(function: &'static str, call: F, describe: D) -> Opt<CapturedError>
where
    F: FnOnce() -> Result<T, E>,
    E: Send + 'static,
    D: FnOnce(&E) -> String,
{
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(_)) => Opt::Absent,
        Ok(Err(error)) => {
            let message = describe(&error);
            tracing::debug!(function, error = %message, "wrapped call returned an error");
            Opt::Present(CapturedError::from_error(function, message, error))
        }
        Err(payload) => {
            let captured = CapturedError::from_panic(function, payload);
            tracing::warn!(function, error = %captured.message(), "wrapped call panicked");
            Opt::Present(captured)
        }
    }
}

fn describe_by_type<E>(_error: &E) -> String {
    std::any::type_name::<E>().to_string()
}

/// An integer status code where `0` means success.
pub trait StatusCode: Copy + Eq + fmt::Display {
    /// The code reported on success.
    const SUCCESS: Self;

    /// Returns `true` if this code reports success.
    #[inline]
    fn is_success(self) -> bool {
        self == Self::SUCCESS
    }
}

macro_rules! impl_status_code {
    ($($integer:ty),+) => {
        $(
            impl StatusCode for $integer {
                const SUCCESS: Self = 0;
            }
        )+
    };
}

impl_status_code!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Runs a call returning a status code; `0` yields `Absent`, any other code
/// is returned as present.
///
/// Panics raised by the call are not caught.
///
/// # Examples
///
/// ```rust
/// use optkit::adapt::status;
/// use optkit::gate::Opt;
///
/// fn remove(path: &str) -> i32 {
///     if path.is_empty() { -2 } else { 0 }
/// }
///
/// assert_eq!(status("remove", || remove("log.txt")), Opt::Absent);
/// assert_eq!(status("remove", || remove("")), Opt::Present(-2));
/// ```
pub fn status<C, F>(function: &'static str, call: F) -> Opt<C>
where
    F: FnOnce() -> C,
    C: StatusCode,
{
    let code = call();
    if code.is_success() {
        Opt::Absent
    } else {
        tracing::debug!(function, code = %code, "wrapped call reported a failure code");
        Opt::Present(code)
    }
}

#[doc(hidden)]
pub mod __private {
    use std::convert::Infallible;
    use std::fmt;

    pub struct ResultTag;

    pub struct ValueTag;

    // `Result` returns resolve to `ResultKind` without autoref; every other
    // return type falls through to `ValueKind` and cannot fail.
    pub trait ResultKind {
        #[inline]
        fn result_kind(&self) -> ResultTag {
            ResultTag
        }
    }

    impl<T, E> ResultKind for Result<T, E> {}

    pub trait ValueKind {
        #[inline]
        fn result_kind(&self) -> ValueTag {
            ValueTag
        }
    }

    impl<T: ?Sized> ValueKind for &T {}

    impl ResultTag {
        #[inline]
        pub const fn into_result<T, E>(self, result: Result<T, E>) -> Result<T, E> {
            result
        }
    }

    impl ValueTag {
        #[inline]
        pub const fn into_result<T>(self, value: T) -> Result<T, Infallible> {
            Ok(value)
        }
    }

    /// Wraps an error so that displayable and other errors are told apart
    /// by method lookup on `&ErrorRef`, whatever the error type itself is.
    pub struct ErrorRef<'a, E: ?Sized>(pub &'a E);

    pub struct DisplayTag;

    pub struct TypeNameTag;

    pub trait DisplayKind {
        #[inline]
        fn describe_kind(&self) -> DisplayTag {
            DisplayTag
        }
    }

    impl<E: fmt::Display + ?Sized> DisplayKind for ErrorRef<'_, E> {}

    pub trait TypeNameKind {
        #[inline]
        fn describe_kind(&self) -> TypeNameTag {
            TypeNameTag
        }
    }

    impl<E: ?Sized> TypeNameKind for &ErrorRef<'_, E> {}

    impl DisplayTag {
        #[inline]
        pub fn describe<E: fmt::Display + ?Sized>(self, error: &E) -> String {
            error.to_string()
        }
    }

    impl TypeNameTag {
        #[inline]
        pub fn describe<E: ?Sized>(self, _error: &E) -> String {
            std::any::type_name::<E>().to_string()
        }
    }
}
