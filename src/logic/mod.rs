//! Boolean-style combination of optional values by presence.
//!
//! - [`opt_and!`](crate::opt_and) evaluates its operands left to right and
//!   stops at the first absent one. If all are present it returns the last
//!   one.
//! - [`opt_or!`](crate::opt_or) evaluates its operands left to right and
//!   returns the first present one without evaluating the rest.
//!
//! Operands may be bare or optional; bare values count as present. The
//! iterator forms [`and_all`] and [`or_any`] follow the same rules, pulling
//! items one at a time.
//!
//! # Examples
//!
//! ```rust
//! use optkit::gate::{Opt, none, some};
//! use optkit::{opt_and, opt_or};
//!
//! assert_eq!(opt_and!(some(1), "two", some(3.0)), Opt::Present(3.0));
//! assert_eq!(opt_and!(some(1), none::<i32>(), 3), Opt::Absent);
//!
//! assert_eq!(opt_or!(none(), some(2), 3), Opt::Present(2));
//! assert_eq!(opt_or!(none::<i32>(), none()), Opt::Absent);
//! ```

use crate::convert::IntoOpt;
use crate::gate::Opt;

/// Returns the last operand if every operand is present, otherwise `Absent`.
///
/// Operands are evaluated left to right; evaluation stops at the first
/// absent operand. Operands may have different value types: only their
/// presence matters, except for the last one, whose value is returned.
///
/// # Examples
///
/// ```rust
/// use optkit::gate::{Opt, none};
/// use optkit::opt_and;
///
/// let mut evaluated = false;
/// let result = opt_and!(none::<u8>(), {
///     evaluated = true;
///     "unreachable"
/// });
/// assert_eq!(result, Opt::Absent);
/// assert!(!evaluated);
/// ```
#[macro_export]
macro_rules! opt_and {
    ($last:expr $(,)?) => {
        $crate::to_opt!($last)
    };
    ($head:expr, $($rest:expr),+ $(,)?) => {
        match $crate::to_opt!($head) {
            $crate::gate::Opt::Present(_) => $crate::opt_and!($($rest),+),
            $crate::gate::Opt::Absent => $crate::gate::Opt::Absent,
        }
    };
}

/// Returns the first present operand, or `Absent` if there is none.
///
/// Operands are evaluated left to right; evaluation stops at the first
/// present operand. All operands share one value type.
///
/// # Examples
///
/// ```rust
/// use optkit::gate::{Opt, some};
/// use optkit::opt_or;
///
/// let mut evaluated = false;
/// let result = opt_or!(some("first"), {
///     evaluated = true;
///     "second"
/// });
/// assert_eq!(result, Opt::Present("first"));
/// assert!(!evaluated);
/// ```
#[macro_export]
macro_rules! opt_or {
    ($last:expr $(,)?) => {
        $crate::to_opt!($last)
    };
    ($head:expr, $($rest:expr),+ $(,)?) => {
        match $crate::to_opt!($head) {
            present @ $crate::gate::Opt::Present(_) => present,
            $crate::gate::Opt::Absent => $crate::opt_or!($($rest),+),
        }
    };
}

/// Iterator form of [`opt_and!`](crate::opt_and): returns the last item if
/// every item is present.
///
/// Items are pulled lazily; no item after the first absent one is pulled.
/// An empty iterator yields `Absent`, as there is no last value to return.
///
/// # Examples
///
/// ```rust
/// use optkit::gate::{Opt, none, some};
/// use optkit::logic::and_all;
///
/// assert_eq!(and_all([some(1), some(2)]), Opt::Present(2));
/// assert_eq!(and_all([some(1), none(), some(3)]), Opt::Absent);
/// ```
pub fn and_all<I>(operands: I) -> Opt<<I::Item as IntoOpt>::Value>
where
    I: IntoIterator,
    I::Item: IntoOpt,
{
    let mut last = Opt::Absent;
    for operand in operands {
        match operand.into_opt() {
            present @ Opt::Present(_) => last = present,
            Opt::Absent => return Opt::Absent,
        }
    }
    last
}

/// Iterator form of [`opt_or!`](crate::opt_or): returns the first present
/// item.
///
/// Items are pulled lazily; no item after the first present one is pulled.
///
/// # Examples
///
/// ```rust
/// use optkit::gate::{Opt, none, some};
/// use optkit::logic::or_any;
///
/// let candidates = ["x", "42", "7"].into_iter().map(|text| text.parse::<i32>().ok());
/// assert_eq!(or_any(candidates), Opt::Present(42));
/// assert_eq!(or_any(Vec::<Opt<i32>>::new()), Opt::Absent);
/// ```
pub fn or_any<I>(operands: I) -> Opt<<I::Item as IntoOpt>::Value>
where
    I: IntoIterator,
    I::Item: IntoOpt,
{
    operands
        .into_iter()
        .map(IntoOpt::into_opt)
        .find(Opt::is_some)
        .unwrap_or_default()
}
