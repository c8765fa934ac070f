//! Lifting functions over bare values into functions over optional values.
//!
//! `liftN(f)` returns a function taking `N` optional arguments. When every
//! argument is present, `f` is called with the contained values and its result
//! is wrapped as present. When any argument is absent, `f` is not called and
//! the result is absent. `lift_flatN` does the same for functions that already
//! return an [`Opt`], without wrapping their result again.
//!
//! # Examples
//!
//! ```rust
//! use optkit::gate::{Opt, none, some};
//! use optkit::unpack::{lift2, lift_flat1};
//!
//! let add = lift2(|left: i32, right: i32| left + right);
//! assert_eq!(add(some(1), some(2)), Opt::Present(3));
//! assert_eq!(add(some(1), none()), Opt::Absent);
//!
//! let half = lift_flat1(|value: i32| if value % 2 == 0 { some(value / 2) } else { none() });
//! assert_eq!(half(some(8)), Opt::Present(4));
//! assert_eq!(half(some(7)), Opt::Absent);
//! ```

use crate::gate::Opt;

macro_rules! define_lift {
    ($arity:literal; $(($argument:ident, $value:ident)),+) => {
        paste::paste! {
            #[doc = concat!(
                "Lifts a ", stringify!($arity),
                "-argument function over optional arguments, wrapping its result."
            )]
            pub fn [<lift $arity>]<$($argument,)+ R, F>(
                function: F,
            ) -> impl Fn($(Opt<$argument>),+) -> Opt<R>
            where
                F: Fn($($argument),+) -> R,
            {
                move |$($value: Opt<$argument>),+| {
                    $(
                        let $value = match $value {
                            Opt::Present(value) => value,
                            Opt::Absent => return Opt::Absent,
                        };
                    )+
                    Opt::Present(function($($value),+))
                }
            }

            #[doc = concat!(
                "Lifts a ", stringify!($arity),
                "-argument function that already returns an optional value."
            )]
            pub fn [<lift_flat $arity>]<$($argument,)+ R, F>(
                function: F,
            ) -> impl Fn($(Opt<$argument>),+) -> Opt<R>
            where
                F: Fn($($argument),+) -> Opt<R>,
            {
                move |$($value: Opt<$argument>),+| {
                    $(
                        let $value = match $value {
                            Opt::Present(value) => value,
                            Opt::Absent => return Opt::Absent,
                        };
                    )+
                    function($($value),+)
                }
            }
        }
    };
}

define_lift!(1; (A, first));
define_lift!(2; (A, first), (B, second));
define_lift!(3; (A, first), (B, second), (C, third));
define_lift!(4; (A, first), (B, second), (C, third), (D, fourth));
define_lift!(5; (A, first), (B, second), (C, third), (D, fourth), (E, fifth));
define_lift!(6; (A, first), (B, second), (C, third), (D, fourth), (E, fifth), (G, sixth));
