//! # optkit
//!
//! Optional values without unsafe extraction, and combinators for working
//! with them.
//!
//! ## Overview
//!
//! [`Opt<T>`](gate::Opt) is either `Present(T)` or `Absent`. Unlike
//! [`Option`], it has no accessor that can panic on an absent value, so the
//! only ways to reach a contained value are exhaustive matching and the
//! combinators of this crate:
//!
//! - **Gate**: `Opt<T>` itself, with the safe subset of `Option`'s surface
//! - **Normalization**: bare values and optional values accepted in the same
//!   position ([`to_opt!`], [`convert::IntoOpt`], [`convert::Operand`])
//! - **Chaining**: existential application with [`chain!`] and
//!   [`chain::Chain`]
//! - **Unpacking**: multi-value unpacking with [`with_some!`] and
//!   [`unpack::with_some`], plus function lifting
//! - **Fallback**: lazy defaults with [`either!`] and [`fallback::either`]
//! - **Logic**: short-circuit [`opt_and!`] / [`opt_or!`]
//! - **Comparison**: [`opt_cmp!`] and [`compare::opt_cmp`], which return the
//!   left value when the comparison holds
//! - **Adapters**: [`wrap_call!`], [`wrap_exception!`] and
//!   [`wrap_error_code!`] turn fallible functions into optional-returning
//!   ones
//!
//! ## Feature Flags
//!
//! - `chain`: Existential application
//! - `unpack`: Multi-value unpacking and lifting
//! - `fallback`: Lazy defaults
//! - `logic`: `opt_and!` / `opt_or!`
//! - `compare`: `opt_cmp!`
//! - `adapt`: Failure adapters (logs through `tracing`)
//! - `derive`: The procedural macros (`with_some!`, `wrap_*!`)
//! - `serde`: `Serialize` / `Deserialize` for `Opt<T>`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optkit::prelude::*;
//!
//! fn parse_port(text: &str) -> Result<u16, std::num::ParseIntError> {
//!     text.parse()
//! }
//!
//! let parse = wrap_call!(parse_port(text: &str) -> u16);
//!
//! let port = either!(parse("8080"), 80);
//! assert_eq!(port, 8080);
//!
//! let fallback = either!(parse("http"), 80);
//! assert_eq!(fallback, 80);
//!
//! let address = with_some!(
//!     [some("localhost"), parse("8080")],
//!     some [host, port] => format!("{host}:{port}"),
//!     none => "unconfigured".to_string(),
//! );
//! assert_eq!(address, "localhost:8080");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets the procedural macros refer to `::optkit` from inside this crate.
extern crate self as optkit;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and macros.
///
/// # Usage
///
/// ```rust
/// use optkit::prelude::*;
///
/// assert_eq!(opt_or!(none(), some(1)), Opt::Present(1));
/// ```
pub mod prelude {
    pub use crate::convert::{IntoOpt, Operand};
    pub use crate::gate::{Opt, none, some};
    pub use crate::to_opt;

    #[cfg(feature = "chain")]
    pub use crate::chain;
    #[cfg(feature = "chain")]
    pub use crate::chain::Chain;

    #[cfg(feature = "unpack")]
    pub use crate::unpack::*;

    #[cfg(feature = "fallback")]
    pub use crate::either;
    #[cfg(feature = "fallback")]
    pub use crate::fallback::{either_default, either_with};

    #[cfg(feature = "logic")]
    pub use crate::logic::{and_all, or_any};
    #[cfg(feature = "logic")]
    pub use crate::{opt_and, opt_or};

    #[cfg(feature = "compare")]
    pub use crate::opt_cmp;

    #[cfg(feature = "adapt")]
    pub use crate::adapt::{CapturedError, FailureOrigin, StatusCode};

    #[cfg(feature = "derive")]
    pub use crate::{with_some, wrap_call, wrap_error_code, wrap_exception};
}

pub mod convert;
pub mod gate;

#[cfg(feature = "chain")]
pub mod chain;

#[cfg(feature = "unpack")]
pub mod unpack;

#[cfg(feature = "fallback")]
pub mod fallback;

#[cfg(feature = "logic")]
pub mod logic;

#[cfg(feature = "compare")]
pub mod compare;

#[cfg(feature = "adapt")]
pub mod adapt;

#[cfg(feature = "derive")]
pub use optkit_derive::{with_some, wrap_call, wrap_error_code, wrap_exception};
