//! The optional-value type and its safe surface.
//!
//! [`Opt<T>`] is a two-state container: [`Opt::Present`] holds a value and
//! [`Opt::Absent`] marks its absence. It mirrors the safe operations of
//! [`Option`], but has no accessor that can panic on an absent value. There is
//! no `unwrap`, no `expect`, and no conversion back into [`Option`]; the only
//! ways to reach the contained value are exhaustive `match`, the total
//! defaults ([`Opt::either`] and friends), and the combinators in the rest of
//! this crate.
//!
//! # Examples
//!
//! ```rust
//! use optkit::gate::{Opt, none, some};
//!
//! let present = some(21).map(|value| value * 2);
//! assert_eq!(present, Opt::Present(42));
//!
//! let absent: Opt<i32> = none();
//! assert_eq!(absent.either(0), 0);
//!
//! let described = match present {
//!     Opt::Present(value) => format!("got {value}"),
//!     Opt::Absent => "nothing".to_string(),
//! };
//! assert_eq!(described, "got 42");
//! ```
//!
//! Extraction that could crash does not compile:
//!
//! ```rust,compile_fail
//! use optkit::gate::some;
//!
//! let value: i32 = some(1).unwrap();
//! ```
//!
//! Neither does comparing optionals of different value types:
//!
//! ```rust,compile_fail
//! use optkit::gate::{Opt, none};
//!
//! let left: Opt<i32> = none();
//! let right: Opt<String> = none();
//! assert!(left == right);
//! ```

mod iter;
mod opt;

pub use iter::{IntoIter, Iter, IterMut};
pub use opt::{Opt, none, some};
