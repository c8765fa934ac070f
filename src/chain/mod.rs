//! Safe chained access over optional values.
//!
//! Existential application runs a follow-up computation on the contained
//! value only when it is present. When the value is absent the computation is
//! skipped entirely, together with any side effects it would have had, and the
//! absence propagates to the result.
//!
//! Two surfaces are provided:
//!
//! - [`Chain<T>`]: a fluent wrapper entered with [`Opt::chain`]. Each step is
//!   an ordinary closure: [`then`](Chain::then) wraps the result,
//!   [`then_opt`](Chain::then_opt) flattens an optional result and
//!   [`run`](Chain::run) executes a step for its side effects only.
//! - [`chain!`](crate::chain): a dotted form, `chain!(value => .a().b())`,
//!   where the whole tail after `=>` is applied to the contained value as one
//!   step.
//!
//! A `Chain<T>` is deliberately distinct from [`Opt<T>`]. It converts to
//! `bool` only through the explicit [`Chain::to_bool`], and only when it
//! wraps a `bool`.
//!
//! # Examples
//!
//! ```rust
//! use optkit::chain;
//! use optkit::gate::{Opt, none, some};
//!
//! let position = chain!(some("Hello") => .find('l'));
//! assert_eq!(position, Opt::Present(2));
//!
//! let missing: Opt<&str> = none();
//! let position = chain!(missing => .find('l'));
//! assert_eq!(position, Opt::Absent);
//!
//! let length = some("optkit").chain().then(str::len);
//! assert_eq!(length, Opt::Present(6));
//! ```

mod chain_macro;

use crate::convert::{IntoOpt, Operand};
use crate::gate::Opt;

/// The result of existential application.
///
/// `Chain<T>` holds an [`Opt<T>`] and continues the chain without ever
/// running a step on an absent value.
///
/// # Examples
///
/// ```rust
/// use optkit::chain::Chain;
/// use optkit::gate::{Opt, some};
///
/// let doubled = Chain::new(some(21)).then(|value| value * 2);
/// assert_eq!(doubled.into_opt(), Opt::Present(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use = "a chain result should be inspected or converted"]
pub struct Chain<T> {
    inner: Opt<T>,
}

impl<T> Chain<T> {
    /// Starts a chain from an optional value.
    #[inline]
    pub const fn new(inner: Opt<T>) -> Self {
        Self { inner }
    }

    /// An absent chain.
    #[inline]
    pub const fn absent() -> Self {
        Self { inner: Opt::Absent }
    }

    /// Applies `step` to the value if present, wrapping its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::gate::{Opt, none};
    ///
    /// let mut calls = 0;
    /// let result = none::<i32>().chain().then(|value| {
    ///     calls += 1;
    ///     value + 1
    /// });
    /// assert_eq!(result, Opt::Absent);
    /// assert_eq!(calls, 0);
    /// ```
    #[inline]
    pub fn then<R, F>(self, step: F) -> Chain<R>
    where
        F: FnOnce(T) -> R,
    {
        Chain::new(self.inner.map(step))
    }

    /// Applies `step` to the value if present, flattening its optional
    /// result instead of wrapping it a second time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::gate::{Opt, some};
    ///
    /// let position = some("Hello").chain().then_opt(|text| text.find('z'));
    /// assert_eq!(position, Opt::Absent);
    /// ```
    #[inline]
    pub fn then_opt<O, F>(self, step: F) -> Chain<O::Value>
    where
        O: IntoOpt,
        F: FnOnce(T) -> O,
    {
        Chain::new(self.inner.and_then(|value| step(value).into_opt()))
    }

    /// Runs `step` on the value if present, for its side effects only.
    ///
    /// The void path produces no value at all, not an optional unit.
    #[inline]
    pub fn run<F>(self, step: F)
    where
        F: FnOnce(T),
    {
        if let Opt::Present(value) = self.inner {
            step(value);
        }
    }

    /// Returns `true` if the chain holds a value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns `true` if the chain is absent.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.inner.is_none()
    }

    /// Leaves the chain, returning the underlying optional value.
    #[inline]
    pub fn into_opt(self) -> Opt<T> {
        self.inner
    }

    /// Borrows the underlying optional value.
    #[inline]
    pub const fn as_opt(&self) -> &Opt<T> {
        &self.inner
    }
}

impl Chain<bool> {
    /// Explicit boolean conversion: `true` only for a present `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::chain;
    /// use optkit::gate::{Opt, none, some};
    ///
    /// assert!(chain!(some("abc") => .contains('b')).to_bool());
    /// assert!(!chain!(some("abc") => .contains('z')).to_bool());
    ///
    /// let absent: Opt<&str> = none();
    /// assert!(!chain!(absent => .contains('b')).to_bool());
    /// ```
    #[inline]
    pub const fn to_bool(&self) -> bool {
        matches!(self.inner, Opt::Present(true))
    }
}

impl<T> Opt<T> {
    /// Enters a [`Chain`] over this value.
    #[inline]
    pub const fn chain(self) -> Chain<T> {
        Chain::new(self)
    }
}

impl<T> Default for Chain<T> {
    #[inline]
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Opt<T>> for Chain<T> {
    #[inline]
    fn from(inner: Opt<T>) -> Self {
        Self::new(inner)
    }
}

impl<T> From<Chain<T>> for Opt<T> {
    #[inline]
    fn from(chain: Chain<T>) -> Self {
        chain.inner
    }
}

impl<T: PartialEq> PartialEq<Opt<T>> for Chain<T> {
    #[inline]
    fn eq(&self, other: &Opt<T>) -> bool {
        self.inner == *other
    }
}

impl<T: PartialEq> PartialEq<Chain<T>> for Opt<T> {
    #[inline]
    fn eq(&self, other: &Chain<T>) -> bool {
        *self == other.inner
    }
}

impl<T> IntoOpt for Chain<T> {
    type Value = T;

    #[inline]
    fn into_opt(self) -> Opt<T> {
        self.inner
    }
}

impl<T> Operand<T> for Chain<T> {
    #[inline]
    fn into_operand(self) -> Opt<T> {
        self.inner
    }
}

impl<T> crate::convert::__private::OptionalKind for Chain<T> {}

#[doc(hidden)]
pub mod __private {
    use super::Chain;
    use crate::convert::IntoOpt;
    use crate::gate::Opt;

    pub struct FlattenTag;

    pub struct VoidTag;

    pub struct WrapTag;

    // Probed on `&&result`: optional results and `()` match before autoref,
    // every other result type only after it.
    pub trait FlattenKind {
        #[inline]
        fn step_kind(&self) -> FlattenTag {
            FlattenTag
        }
    }

    impl<T> FlattenKind for &Opt<T> {}

    impl<T> FlattenKind for &Option<T> {}

    impl<T> FlattenKind for &Chain<T> {}

    pub trait VoidKind {
        #[inline]
        fn step_kind(&self) -> VoidTag {
            VoidTag
        }
    }

    impl VoidKind for &() {}

    pub trait WrapKind {
        #[inline]
        fn step_kind(&self) -> WrapTag {
            WrapTag
        }
    }

    impl<T: ?Sized> WrapKind for &&T {}

    impl FlattenTag {
        #[inline]
        pub fn finish<O: IntoOpt>(self, result: O) -> Chain<O::Value> {
            Chain::new(result.into_opt())
        }
    }

    impl VoidTag {
        #[inline]
        pub const fn finish(self, (): ()) {}
    }

    impl WrapTag {
        #[inline]
        pub const fn finish<R>(self, result: R) -> Chain<R> {
            Chain::new(Opt::Present(result))
        }
    }
}

static_assertions::assert_impl_all!(Chain<bool>: Copy, Send, Sync, Default);
