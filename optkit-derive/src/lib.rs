//! Procedural macros for optkit.
//!
//! This crate provides the macros whose input needs real parsing and
//! compile-time validation. They are re-exported from `optkit` behind its
//! `derive` feature and expand to paths under `::optkit`, so they are meant
//! to be used through that crate.
//!
//! # Available Function-like Macros
//!
//! - [`with_some!`]: unpacks several optional values at once and dispatches
//!   to a `some` or `none` branch
//! - [`wrap_call!`]: adapts a fallible function into one returning an
//!   optional value
//! - [`wrap_exception!`]: adapts a function into one returning its captured
//!   failure
//! - [`wrap_error_code!`]: adapts a status-code function into one returning
//!   the non-zero code
//!
//! # Example: Unpacking
//!
//! ```rust,ignore
//! use optkit::gate::some;
//! use optkit::with_some;
//!
//! let total = with_some!(
//!     [some(100), some(200), some(2)],
//!     some [x, y, z] => (x + y) * z,
//!     none => 0,
//! );
//! assert_eq!(total, 600);
//! ```
//!
//! # Example: Adapting
//!
//! ```rust,ignore
//! use optkit::gate::Opt;
//! use optkit::wrap_call;
//!
//! fn parse_int(text: &str) -> Result<i32, std::num::ParseIntError> {
//!     text.parse()
//! }
//!
//! let parse = wrap_call!(parse_int(text: &str) -> i32);
//! assert_eq!(parse("10"), Opt::Present(10));
//! assert_eq!(parse("bob"), Opt::Absent);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod with_some;
mod wrap;

use proc_macro::TokenStream;
use wrap::Adapter;

/// Unpacks one or more optional values and dispatches to a branch.
///
/// # Syntax
///
/// ```text
/// with_some!(expr, some name => body, none => body)
/// with_some!([expr, ...], some [name, ...] => body, none => body)
/// ```
///
/// The branches may be given in either order. Each expression may be bare
/// or optional (`Opt`, `Option`, or a chain result); bare values count as
/// present. Names are identifiers, `mut` identifiers, or `_`. A single
/// expression may also bind a one-name list, `some [name]`.
///
/// # Semantics
///
/// - Expressions are evaluated left to right, each at most once.
/// - Evaluation stops at the first absent expression; later expressions are
///   not evaluated.
/// - If every expression is present, the `some` body runs with the names
///   bound to the values. Otherwise the `none` body runs.
/// - No closures are involved, so `return`, `?`, and `break` in a body
///   behave as in a `match` arm.
///
/// # Compile Errors
///
/// A missing, duplicated, or unknown branch, a name count that differs
/// from the expression count, a name that is not a plain binding, and an
/// empty expression list are all rejected at compile time.
///
/// # Example
///
/// ```rust,ignore
/// use optkit::gate::{none, some};
/// use optkit::with_some;
///
/// let described = with_some!(
///     [some("ada"), none::<u32>()],
///     none => "incomplete".to_string(),
///     some [name, age] => format!("{name} ({age})"),
/// );
/// assert_eq!(described, "incomplete");
/// ```
#[proc_macro]
pub fn with_some(input: TokenStream) -> TokenStream {
    with_some::with_some_impl(input)
}

/// Adapts a function into one returning `Opt` of its success value.
///
/// The adapted closure has the same parameters. It returns `Present` of the
/// return value when the call succeeds, and `Absent` when the call returns
/// `Err` or panics. Targets returning a plain (non-`Result`) value fail
/// only by panicking. The error type needs no `Display` impl; failures are
/// logged with the error's message when it has one, its type name
/// otherwise. The closure form is logged as `closure@<file>:<line>`.
///
/// # Input Forms
///
/// - `wrap_call!(function(name: Type, ...) -> Return)`: parameter types
///   and `-> Return` are optional; `Return` is the success type.
/// - `wrap_call!(function, arity)`
/// - `wrap_call!(|name: Type, ...| body)`
///
/// # Example
///
/// ```rust,ignore
/// use optkit::gate::Opt;
/// use optkit::wrap_call;
///
/// let parse = wrap_call!(|text: &str| text.parse::<u8>());
/// assert_eq!(parse("7"), Opt::Present(7));
/// assert_eq!(parse("700"), Opt::Absent);
/// ```
#[proc_macro]
pub fn wrap_call(input: TokenStream) -> TokenStream {
    wrap::wrap_impl(input, Adapter::Call)
}

/// Adapts a function into one returning its captured failure.
///
/// The adapted closure returns `Absent` when the call succeeds, and
/// `Present(CapturedError)` when it returns `Err` or panics. Accepts the
/// same input forms as [`wrap_call!`]; a declared `-> Return` type is the
/// target's full return type.
///
/// # Example
///
/// ```rust,ignore
/// use optkit::wrap_exception;
///
/// fn validate(name: &str) -> Result<(), String> {
///     if name.is_empty() { Err("empty name".to_string()) } else { Ok(()) }
/// }
///
/// let check = wrap_exception!(validate(name: &str));
/// assert!(check("ada").is_none());
/// assert!(check("").is_some_and(|error| error.message() == "empty name"));
/// ```
#[proc_macro]
pub fn wrap_exception(input: TokenStream) -> TokenStream {
    wrap::wrap_impl(input, Adapter::Exception)
}

/// Adapts a status-code function into one returning the failure code.
///
/// The adapted closure returns `Absent` when the code is `0`, and
/// `Present(code)` otherwise. Panics are not caught. Accepts the same
/// input forms as [`wrap_call!`].
///
/// # Example
///
/// ```rust,ignore
/// use optkit::gate::Opt;
/// use optkit::wrap_error_code;
///
/// fn unlink(path: &str) -> i32 {
///     if path.starts_with('/') { 0 } else { -22 }
/// }
///
/// let remove = wrap_error_code!(unlink(path: &str) -> i32);
/// assert_eq!(remove("/tmp/log"), Opt::Absent);
/// assert_eq!(remove("log"), Opt::Present(-22));
/// ```
#[proc_macro]
pub fn wrap_error_code(input: TokenStream) -> TokenStream {
    wrap::wrap_impl(input, Adapter::ErrorCode)
}
