//! Multi-value conditional unpacking.
//!
//! Unpacking evaluates an ordered list of optional-producing expressions,
//! stops at the first absent one, and dispatches to one of two branches:
//! the *some* branch receives every contained value, the *none* branch
//! receives nothing. Both branches produce the same result type.
//!
//! The guarantees are the same for every surface of this module:
//!
//! - each expression is evaluated at most once, left to right;
//! - expressions after the first absent one are never evaluated;
//! - exactly one of the two branches runs.
//!
//! # Surfaces
//!
//! - [`with_some!`](crate::with_some): the macro form, which binds names
//!   directly and checks branch structure and arity at compile time.
//! - [`with_some`] / [`with_some_one`]: a builder over zero-argument
//!   suppliers. The builder is typed so that each branch must be supplied
//!   exactly once; the suppliers run when the second branch is given.
//! - [`lift1`] … [`lift6`] and [`lift_flat1`] … [`lift_flat6`]: turn a
//!   function over bare values into one over optional values.
//!
//! # Examples
//!
//! ```rust
//! use optkit::gate::some;
//! use optkit::unpack::with_some;
//!
//! let total = with_some((|| some(100), || some(200), || some(3)))
//!     .on_some(|(x, y, z)| (x + y) * z)
//!     .on_none(|| 0);
//! assert_eq!(total, 900);
//! ```
//!
//! # Compile-time checks
//!
//! The macro form rejects a missing branch:
//!
//! ```compile_fail
//! use optkit::gate::some;
//! use optkit::with_some;
//!
//! let value = with_some!([some(1), some(2)], some [a, b] => a + b);
//! ```
//!
//! a name count that differs from the expression count:
//!
//! ```compile_fail
//! use optkit::gate::some;
//! use optkit::with_some;
//!
//! let value = with_some!([some(1), some(2)], some [a] => a, none => 0);
//! ```
//!
//! a branch given twice:
//!
//! ```compile_fail
//! use optkit::gate::some;
//! use optkit::with_some;
//!
//! let value = with_some!(some(1), some a => a, none => 0, none => 1);
//! ```
//!
//! and a binding that is not a plain name:
//!
//! ```compile_fail
//! use optkit::gate::some;
//! use optkit::with_some;
//!
//! let value = with_some!(some((1, 2)), some (a, b) => a + b, none => 0);
//! ```

mod lift;

pub use lift::{
    lift_flat1, lift_flat2, lift_flat3, lift_flat4, lift_flat5, lift_flat6, lift1, lift2, lift3,
    lift4, lift5, lift6,
};

use crate::convert::IntoOpt;
use crate::gate::Opt;

/// An ordered group of optional-producing suppliers.
///
/// Implemented for tuples of one to eight `FnOnce() -> O` closures, where
/// each `O` is an optional form ([`IntoOpt`]). [`supply`](Supply::supply)
/// calls them left to right and stops at the first absent result.
pub trait Supply {
    /// The values bound when every supplier produced a value.
    type Values;

    /// Runs the suppliers in order, short-circuiting on the first absence.
    fn supply(self) -> Opt<Self::Values>;
}

macro_rules! impl_supply_for_tuple {
    ($(($supplier:ident, $operand:ident, $value:ident)),+) => {
        impl<$($supplier, $operand),+> Supply for ($($supplier,)+)
        where
            $(
                $supplier: FnOnce() -> $operand,
                $operand: IntoOpt,
            )+
        {
            type Values = ($(<$operand as IntoOpt>::Value,)+);

            #[allow(non_snake_case)]
            fn supply(self) -> Opt<Self::Values> {
                let ($($supplier,)+) = self;
                $(
                    let $value = match $supplier().into_opt() {
                        Opt::Present(value) => value,
                        Opt::Absent => return Opt::Absent,
                    };
                )+
                Opt::Present(($($value,)+))
            }
        }
    };
}

impl_supply_for_tuple!((S1, O1, v1));
impl_supply_for_tuple!((S1, O1, v1), (S2, O2, v2));
impl_supply_for_tuple!((S1, O1, v1), (S2, O2, v2), (S3, O3, v3));
impl_supply_for_tuple!((S1, O1, v1), (S2, O2, v2), (S3, O3, v3), (S4, O4, v4));
impl_supply_for_tuple!(
    (S1, O1, v1),
    (S2, O2, v2),
    (S3, O3, v3),
    (S4, O4, v4),
    (S5, O5, v5)
);
impl_supply_for_tuple!(
    (S1, O1, v1),
    (S2, O2, v2),
    (S3, O3, v3),
    (S4, O4, v4),
    (S5, O5, v5),
    (S6, O6, v6)
);
impl_supply_for_tuple!(
    (S1, O1, v1),
    (S2, O2, v2),
    (S3, O3, v3),
    (S4, O4, v4),
    (S5, O5, v5),
    (S6, O6, v6),
    (S7, O7, v7)
);
impl_supply_for_tuple!(
    (S1, O1, v1),
    (S2, O2, v2),
    (S3, O3, v3),
    (S4, O4, v4),
    (S5, O5, v5),
    (S6, O6, v6),
    (S7, O7, v7),
    (S8, O8, v8)
);

/// A single supplier whose value is bound without a tuple.
///
/// Created by [`with_some_one`].
pub struct Single<F>(F);

impl<F, O> Supply for Single<F>
where
    F: FnOnce() -> O,
    O: IntoOpt,
{
    type Values = O::Value;

    #[inline]
    fn supply(self) -> Opt<Self::Values> {
        (self.0)().into_opt()
    }
}

/// Starts unpacking a tuple of suppliers.
///
/// # Examples
///
/// ```rust
/// use optkit::gate::{Opt, none, some};
/// use optkit::unpack::with_some;
/// use std::cell::Cell;
///
/// let evaluated = Cell::new(false);
/// let message = with_some((
///     || none::<i32>(),
///     || {
///         evaluated.set(true);
///         some(2)
///     },
/// ))
/// .on_some(|(first, second)| format!("{first} {second}"))
/// .on_none(|| "missing".to_string());
///
/// assert_eq!(message, "missing");
/// assert!(!evaluated.get());
/// ```
#[inline]
pub const fn with_some<S: Supply>(suppliers: S) -> Unpack<S> {
    Unpack { suppliers }
}

/// Starts unpacking a single supplier; the some branch receives the value
/// itself rather than a one-element tuple.
///
/// # Examples
///
/// ```rust
/// use optkit::unpack::with_some_one;
///
/// let parsed = with_some_one(|| "42".parse::<i32>().ok())
///     .on_none(|| -1)
///     .on_some(|value| value * 2);
/// assert_eq!(parsed, 84);
/// ```
#[inline]
pub const fn with_some_one<F, O>(supplier: F) -> Unpack<Single<F>>
where
    F: FnOnce() -> O,
    O: IntoOpt,
{
    Unpack {
        suppliers: Single(supplier),
    }
}

/// An unpacking with no branch supplied yet.
#[must_use = "unpacking does nothing until both branches are supplied"]
pub struct Unpack<S> {
    suppliers: S,
}

impl<S: Supply> Unpack<S> {
    /// Supplies the branch run when every value is present.
    #[inline]
    pub fn on_some<R, F>(self, branch: F) -> OnSome<S, F>
    where
        F: FnOnce(S::Values) -> R,
    {
        OnSome {
            suppliers: self.suppliers,
            on_some: branch,
        }
    }

    /// Supplies the branch run when any value is absent.
    #[inline]
    pub fn on_none<R, G>(self, branch: G) -> OnNone<S, G>
    where
        G: FnOnce() -> R,
    {
        OnNone {
            suppliers: self.suppliers,
            on_none: branch,
        }
    }
}

/// An unpacking whose some branch is known.
#[must_use = "unpacking does nothing until both branches are supplied"]
pub struct OnSome<S, F> {
    suppliers: S,
    on_some: F,
}

impl<S: Supply, F> OnSome<S, F> {
    /// Supplies the none branch and evaluates the unpacking.
    #[inline]
    pub fn on_none<R, G>(self, branch: G) -> R
    where
        F: FnOnce(S::Values) -> R,
        G: FnOnce() -> R,
    {
        dispatch(self.suppliers, self.on_some, branch)
    }
}

/// An unpacking whose none branch is known.
#[must_use = "unpacking does nothing until both branches are supplied"]
pub struct OnNone<S, G> {
    suppliers: S,
    on_none: G,
}

impl<S: Supply, G> OnNone<S, G> {
    /// Supplies the some branch and evaluates the unpacking.
    #[inline]
    pub fn on_some<R, F>(self, branch: F) -> R
    where
        F: FnOnce(S::Values) -> R,
        G: FnOnce() -> R,
    {
        dispatch(self.suppliers, branch, self.on_none)
    }
}

fn dispatch<S, R, F, G>(suppliers: S, on_some: F, on_none: G) -> R
where
    S: Supply,
    F: FnOnce(S::Values) -> R,
    G: FnOnce() -> R,
{
    match suppliers.supply() {
        Opt::Present(values) => on_some(values),
        Opt::Absent => on_none(),
    }
}
