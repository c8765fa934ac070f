//! Defaults with lazy fallback.
//!
//! [`either`] returns the contained value, or a fallback when the value is
//! absent. The point of the lazy forms, [`either_with`] and
//! [`either!`](crate::either), is that the fallback is never computed when a
//! value is present.
//!
//! # Examples
//!
//! ```rust
//! use optkit::either;
//! use optkit::gate::{Opt, none, some};
//!
//! fn expensive() -> i32 {
//!     panic!("never evaluated for a present value")
//! }
//!
//! assert_eq!(either!(some(3), expensive()), 3);
//!
//! let absent: Opt<i32> = none();
//! assert_eq!(either!(absent, 10), 10);
//! ```

use crate::convert::IntoOpt;
use crate::gate::Opt;

/// Returns the contained value, or `fallback`.
///
/// # Examples
///
/// ```rust
/// use optkit::fallback::either;
/// use optkit::gate::none;
///
/// assert_eq!(either(Some("set"), "default"), "set");
/// assert_eq!(either(none(), "default"), "default");
/// ```
#[inline]
pub fn either<O: IntoOpt>(value: O, fallback: O::Value) -> O::Value {
    value.into_opt().either(fallback)
}

/// Returns the contained value, or calls `fallback` to produce one.
///
/// `fallback` is only called when the value is absent.
///
/// # Examples
///
/// ```rust
/// use optkit::fallback::either_with;
/// use optkit::gate::{none, some};
///
/// let mut calls = 0;
/// assert_eq!(either_with(some(1), || { calls += 1; 0 }), 1);
/// assert_eq!(either_with(none(), || { calls += 1; 0 }), 0);
/// assert_eq!(calls, 1);
/// ```
#[inline]
pub fn either_with<O, F>(value: O, fallback: F) -> O::Value
where
    O: IntoOpt,
    F: FnOnce() -> O::Value,
{
    value.into_opt().either_with(fallback)
}

/// Returns the contained value, or evaluates the fallback expression.
///
/// The first operand may be bare or optional. The fallback expression is
/// evaluated only when the first operand is absent, and is evaluated in the
/// caller's context (no closure is created, so `return` and `?` behave as
/// written).
///
/// # Examples
///
/// ```rust
/// use optkit::either;
/// use optkit::gate::{Opt, none};
///
/// fn lookup(key: &str) -> Opt<u16> {
///     if key == "port" { Opt::Present(8080) } else { none() }
/// }
///
/// assert_eq!(either!(lookup("port"), 80), 8080);
/// assert_eq!(either!(lookup("other"), either!(lookup("port"), 80)), 8080);
/// ```
#[macro_export]
macro_rules! either {
    ($value:expr, $fallback:expr $(,)?) => {
        match $crate::to_opt!($value) {
            $crate::gate::Opt::Present(value) => value,
            $crate::gate::Opt::Absent => $fallback,
        }
    };
}

/// Returns the contained value, or the default of its type.
#[inline]
pub fn either_default<O>(value: O) -> O::Value
where
    O: IntoOpt,
    O::Value: Default,
{
    value.into_opt().either_default()
}

/// Picks the first present value among two optionals, falling back lazily
/// to the second.
///
/// # Examples
///
/// ```rust
/// use optkit::fallback::first_present;
/// use optkit::gate::{Opt, none, some};
///
/// assert_eq!(first_present(none(), || some(2)), Opt::Present(2));
/// ```
#[inline]
pub fn first_present<O, F>(value: O, fallback: F) -> Opt<O::Value>
where
    O: IntoOpt,
    F: FnOnce() -> Opt<O::Value>,
{
    value.into_opt().or_else(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{none, some};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_macro_fallback_not_evaluated_when_present() {
        let calls = Cell::new(0);
        let fallback = || {
            calls.set(calls.get() + 1);
            0
        };
        assert_eq!(either!(some(5), fallback()), 5);
        assert_eq!(calls.get(), 0);
        assert_eq!(either!(none::<i32>(), fallback()), 0);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_macro_accepts_bare_value() {
        assert_eq!(either!(7, 0), 7);
    }

    #[rstest]
    fn test_either_default() {
        assert_eq!(either_default(none::<String>()), String::new());
        assert_eq!(either_default(Some(4)), 4);
    }
}
