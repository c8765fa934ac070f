//! Normalization of bare and optional operands.
//!
//! Most combinators in this crate accept either a bare value `T` or an
//! already-optional value (`Opt<T>`, `Option<T>`, or a chain result) in the
//! same position. This module provides the three ways of normalizing such
//! operands into an [`Opt<T>`]:
//!
//! - [`IntoOpt`]: implemented by every already-optional form. The associated
//!   `Value` type is determined by the operand alone, so it never needs an
//!   annotation.
//! - [`Operand<T>`]: implemented by bare `T` *and* by the optional forms of
//!   `T`. Use it where `T` is already fixed by context.
//! - [`to_opt!`](crate::to_opt): a macro that picks the identity form
//!   whenever the operand's static type is already optional, and wraps it as
//!   present otherwise. The variadic macros of this crate normalize their
//!   operands through it.
//!
//! # Examples
//!
//! ```rust
//! use optkit::gate::{Opt, some};
//! use optkit::to_opt;
//!
//! assert_eq!(to_opt!(5), Opt::Present(5));
//! assert_eq!(to_opt!(some(5)), Opt::Present(5));
//! assert_eq!(to_opt!(Some(5)), Opt::Present(5));
//! assert_eq!(to_opt!(None::<i32>), Opt::Absent);
//! ```

use crate::gate::Opt;

/// Conversion from an already-optional form into [`Opt`].
///
/// # Examples
///
/// ```rust
/// use optkit::convert::{IntoOpt, to_opt};
/// use optkit::gate::Opt;
///
/// assert_eq!(Some("a").into_opt(), Opt::Present("a"));
/// assert_eq!(to_opt(Opt::Present(1)), Opt::Present(1));
/// ```
pub trait IntoOpt {
    /// The type of the value that may be present.
    type Value;

    /// Converts `self` into an [`Opt`].
    fn into_opt(self) -> Opt<Self::Value>;
}

impl<T> IntoOpt for Opt<T> {
    type Value = T;

    #[inline]
    fn into_opt(self) -> Opt<T> {
        self
    }
}

impl<T> IntoOpt for Option<T> {
    type Value = T;

    #[inline]
    fn into_opt(self) -> Opt<T> {
        Opt::from(self)
    }
}

/// Normalizes an already-optional operand. This is the identity for `Opt<T>`.
#[inline]
pub fn to_opt<O: IntoOpt>(value: O) -> Opt<O::Value> {
    value.into_opt()
}

/// An operand that is either a bare `T` or an optional form of `T`.
///
/// The bare form is wrapped as present; the optional forms pass through
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use optkit::convert::Operand;
/// use optkit::gate::{Opt, none};
///
/// fn normalize<A: Operand<i32>>(operand: A) -> Opt<i32> {
///     operand.into_operand()
/// }
///
/// assert_eq!(normalize(3), Opt::Present(3));
/// assert_eq!(normalize(Opt::Present(3)), Opt::Present(3));
/// assert_eq!(normalize(none()), Opt::Absent);
/// ```
pub trait Operand<T> {
    /// Converts the operand into an [`Opt<T>`].
    fn into_operand(self) -> Opt<T>;
}

impl<T> Operand<T> for T {
    #[inline]
    fn into_operand(self) -> Opt<T> {
        Opt::Present(self)
    }
}

impl<T> Operand<T> for Opt<T> {
    #[inline]
    fn into_operand(self) -> Opt<T> {
        self
    }
}

impl<T> Operand<T> for Option<T> {
    #[inline]
    fn into_operand(self) -> Opt<T> {
        Opt::from(self)
    }
}

/// Normalizes a bare or optional operand into an [`Opt`](crate::gate::Opt).
///
/// The choice is made from the operand's static type: `Opt<T>`, `Option<T>`
/// and chain results pass through unchanged, every other type (references
/// included) is wrapped as present.
///
/// # Examples
///
/// ```rust
/// use optkit::gate::{Opt, none};
/// use optkit::to_opt;
///
/// let bare = to_opt!("text");
/// assert_eq!(bare, Opt::Present("text"));
///
/// let absent: Opt<&str> = none();
/// assert_eq!(to_opt!(absent), Opt::Absent);
/// ```
#[macro_export]
macro_rules! to_opt {
    ($value:expr $(,)?) => {
        match $value {
            value => {
                #[allow(unused_imports)]
                use $crate::convert::__private::{BareKind as _, OptionalKind as _};
                (&value).opt_kind().into_opt(value)
            }
        }
    };
}

#[doc(hidden)]
pub mod __private {
    use super::IntoOpt;
    use crate::gate::Opt;

    pub struct OptionalTag;

    pub struct BareTag;

    // Method lookup on `&value` finds `OptionalKind` without autoref, and
    // only falls back to `BareKind` (implemented for references) after it.
    pub trait OptionalKind {
        #[inline]
        fn opt_kind(&self) -> OptionalTag {
            OptionalTag
        }
    }

    impl<T> OptionalKind for Opt<T> {}

    impl<T> OptionalKind for Option<T> {}

    pub trait BareKind {
        #[inline]
        fn opt_kind(&self) -> BareTag {
            BareTag
        }
    }

    impl<T: ?Sized> BareKind for &T {}

    impl OptionalTag {
        #[inline]
        pub fn into_opt<O: IntoOpt>(self, value: O) -> Opt<O::Value> {
            value.into_opt()
        }
    }

    impl BareTag {
        #[inline]
        pub const fn into_opt<T>(self, value: T) -> Opt<T> {
            Opt::Present(value)
        }
    }
}
