//! Comparison of the underlying values of optional operands.
//!
//! `opt_cmp(a, predicate, b)` is absent if either side is absent. Otherwise
//! it applies the predicate to both values and returns the *left* value when
//! the predicate holds. Returning the left value rather than a `bool` lets a
//! comparison double as a filter.
//!
//! # Examples
//!
//! ```rust
//! use optkit::compare::opt_cmp;
//! use optkit::gate::{Opt, some};
//!
//! assert_eq!(opt_cmp(some("hello"), PartialEq::ne, some("world")), Opt::Present("hello"));
//! assert_eq!(opt_cmp(some("hello"), PartialEq::eq, some("world")), Opt::Absent);
//! ```

use crate::convert::{IntoOpt, Operand};
use crate::gate::Opt;

/// Compares two optional operands, returning the left value if the
/// predicate holds for both values.
///
/// The predicate is not called when either side is absent.
///
/// # Examples
///
/// ```rust
/// use optkit::compare::opt_cmp;
/// use optkit::gate::{Opt, none, some};
///
/// assert_eq!(opt_cmp(some(3), |left, right| left < right, Some(5)), Opt::Present(3));
/// assert_eq!(opt_cmp(some(3), |left, right| left < right, none()), Opt::Absent);
/// ```
#[inline]
pub fn opt_cmp<A, B, P>(left: A, predicate: P, right: B) -> Opt<A::Value>
where
    A: IntoOpt,
    B: IntoOpt<Value = A::Value>,
    P: FnOnce(&A::Value, &A::Value) -> bool,
{
    match (left.into_opt(), right.into_opt()) {
        (Opt::Present(left), Opt::Present(right)) => {
            if predicate(&left, &right) {
                Opt::Present(left)
            } else {
                Opt::Absent
            }
        }
        _ => Opt::Absent,
    }
}

impl<T> Opt<T> {
    /// Method form of [`opt_cmp`]; `other` may be bare or optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::gate::{Opt, some};
    ///
    /// assert_eq!(some(10).cmp_by(|left, right| left > right, 4), Opt::Present(10));
    /// assert_eq!(some(1).cmp_by(|left, right| left > right, some(4)), Opt::Absent);
    /// ```
    #[inline]
    pub fn cmp_by<B, P>(self, predicate: P, other: B) -> Self
    where
        B: Operand<T>,
        P: FnOnce(&T, &T) -> bool,
    {
        opt_cmp(self, predicate, other.into_operand())
    }
}

/// Compares two bare or optional operands.
///
/// The operator may be one of `==`, `!=`, `<`, `<=`, `>`, `>=`, or any
/// predicate expression taking two references. Each operand is evaluated
/// exactly once, left before right.
///
/// # Examples
///
/// ```rust
/// use optkit::gate::{Opt, none, some};
/// use optkit::opt_cmp;
///
/// assert_eq!(opt_cmp!(some("hello"), !=, "world"), Opt::Present("hello"));
/// assert_eq!(opt_cmp!(4, <, some(3)), Opt::Absent);
/// assert_eq!(opt_cmp!(none::<i32>(), <, 3), Opt::Absent);
///
/// let close = |left: &f64, right: &f64| (left - right).abs() < 0.1;
/// assert_eq!(opt_cmp!(1.0, close, some(1.05)), Opt::Present(1.0));
///
/// // A comparison filters: keep the value only while it is below a limit.
/// let reading = some(42);
/// assert_eq!(opt_cmp!(reading, <=, 100), Opt::Present(42));
/// ```
#[macro_export]
macro_rules! opt_cmp {
    (@apply $left:expr, $predicate:expr, $right:expr) => {{
        let left = $crate::to_opt!($left);
        let right = $crate::to_opt!($right);
        $crate::compare::opt_cmp(left, $predicate, right)
    }};
    ($left:expr, ==, $right:expr $(,)?) => {
        $crate::opt_cmp!(@apply $left, |left, right| left == right, $right)
    };
    ($left:expr, !=, $right:expr $(,)?) => {
        $crate::opt_cmp!(@apply $left, |left, right| left != right, $right)
    };
    ($left:expr, <, $right:expr $(,)?) => {
        $crate::opt_cmp!(@apply $left, |left, right| left < right, $right)
    };
    ($left:expr, <=, $right:expr $(,)?) => {
        $crate::opt_cmp!(@apply $left, |left, right| left <= right, $right)
    };
    ($left:expr, >, $right:expr $(,)?) => {
        $crate::opt_cmp!(@apply $left, |left, right| left > right, $right)
    };
    ($left:expr, >=, $right:expr $(,)?) => {
        $crate::opt_cmp!(@apply $left, |left, right| left >= right, $right)
    };
    ($left:expr, $predicate:expr, $right:expr $(,)?) => {
        $crate::opt_cmp!(@apply $left, $predicate, $right)
    };
}
