//! The `Opt<T>` type.

use super::iter::{IntoIter, Iter, IterMut};

/// An optional value: either [`Present`](Opt::Present) with a value of type
/// `T`, or [`Absent`](Opt::Absent).
///
/// `Opt<T>` offers the safe subset of [`Option`]'s operations. Every accessor
/// is total: there is no operation that panics when the value is absent.
///
/// Equality and ordering are only defined between optionals of the same value
/// type. `Absent` orders below every `Present`, as with [`Option`].
///
/// # Examples
///
/// ```rust
/// use optkit::gate::Opt;
///
/// let name: Opt<&str> = Opt::some("Hello");
/// let position = name.and_then(|text| text.find('l').into());
/// assert_eq!(position, Opt::Present(2));
///
/// let missing: Opt<&str> = Opt::none();
/// assert_eq!(missing.map(str::len), Opt::Absent);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "an optional value should be inspected or combined"]
pub enum Opt<T> {
    /// No value. Declared first so that it orders below every `Present`.
    Absent,
    /// A present value of type `T`.
    Present(T),
}

/// Creates a present optional value.
///
/// # Examples
///
/// ```rust
/// use optkit::gate::{Opt, some};
///
/// assert_eq!(some(5), Opt::Present(5));
/// ```
#[inline]
pub const fn some<T>(value: T) -> Opt<T> {
    Opt::Present(value)
}

/// Creates an absent optional value.
///
/// # Examples
///
/// ```rust
/// use optkit::gate::{Opt, none};
///
/// let absent: Opt<String> = none();
/// assert_eq!(absent, Opt::Absent);
/// ```
#[inline]
pub const fn none<T>() -> Opt<T> {
    Opt::Absent
}

impl<T> Opt<T> {
    // =========================================================================
    // Construction and Inspection
    // =========================================================================

    /// Creates a present optional value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent optional value.
    #[inline]
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::gate::{Opt, some};
    ///
    /// assert!(some(1).is_some());
    /// assert!(!Opt::<i32>::none().is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if a value is present and satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::gate::{Opt, some};
    ///
    /// assert!(some(4).is_some_and(|value| value % 2 == 0));
    /// assert!(!some(3).is_some_and(|value| value % 2 == 0));
    /// assert!(!Opt::<i32>::none().is_some_and(|_| true));
    /// ```
    #[inline]
    pub fn is_some_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    /// Returns `true` if no value is present, or the value satisfies the
    /// predicate.
    #[inline]
    pub fn is_none_or<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => true,
        }
    }

    // =========================================================================
    // Borrowing Adapters
    // =========================================================================

    /// Converts `&Opt<T>` into `Opt<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::gate::{Opt, some};
    ///
    /// let text = some(String::from("optkit"));
    /// assert_eq!(text.as_ref().map(|value| value.len()), Opt::Present(6));
    /// assert_eq!(text, Opt::Present(String::from("optkit")));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Opt<&T> {
        match self {
            Self::Present(value) => Opt::Present(value),
            Self::Absent => Opt::Absent,
        }
    }

    /// Converts `&mut Opt<T>` into `Opt<&mut T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::gate::{Opt, some};
    ///
    /// let mut counter = some(1);
    /// if let Opt::Present(value) = counter.as_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(counter, Opt::Present(2));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Opt<&mut T> {
        match self {
            Self::Present(value) => Opt::Present(value),
            Self::Absent => Opt::Absent,
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies a function to the contained value, if any.
    ///
    /// The function is not called when the value is absent.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Opt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Opt::Present(function(value)),
            Self::Absent => Opt::Absent,
        }
    }

    /// Applies a function to the contained value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default,
        }
    }

    /// Applies a function to the contained value, or computes a default.
    ///
    /// Exactly one of the two functions is called.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default(),
        }
    }

    /// Case analysis: calls `on_present` with the value, or `on_absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::gate::{Opt, some};
    ///
    /// let label = some(3).fold(|| "none".to_string(), |value| value.to_string());
    /// assert_eq!(label, "3");
    ///
    /// let label = Opt::<i32>::none().fold(|| "none".to_string(), |value| value.to_string());
    /// assert_eq!(label, "none");
    /// ```
    #[inline]
    pub fn fold<U, D, F>(self, on_absent: D, on_present: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        self.map_or_else(on_absent, on_present)
    }

    /// Chains a computation that itself returns an optional value.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Opt<U>
    where
        F: FnOnce(T) -> Opt<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Opt::Absent,
        }
    }

    /// Keeps the value only if it satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::gate::{Opt, some};
    ///
    /// assert_eq!(some(4).filter(|value| *value > 3), Opt::Present(4));
    /// assert_eq!(some(2).filter(|value| *value > 3), Opt::Absent);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Present(value) = self
            && predicate(&value)
        {
            return Self::Present(value);
        }
        Self::Absent
    }

    /// Calls a function with a reference to the value, if present, and
    /// returns the optional unchanged.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Boolean-style Combination
    // =========================================================================

    /// Returns `other` if this value is present, otherwise `Absent`.
    ///
    /// `other` is evaluated eagerly; use [`and_then`](Self::and_then) or the
    /// [`opt_and!`](crate::opt_and) macro for lazy evaluation.
    #[inline]
    pub fn and<U>(self, other: Opt<U>) -> Opt<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => Opt::Absent,
        }
    }

    /// Returns this value if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => other,
        }
    }

    /// Returns this value if present, otherwise calls `function`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => function(),
        }
    }

    /// Returns whichever side is present if exactly one of them is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::gate::{Opt, some};
    ///
    /// assert_eq!(some(1).xor(Opt::none()), Opt::Present(1));
    /// assert_eq!(some(1).xor(some(2)), Opt::Absent);
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            _ => Self::Absent,
        }
    }

    /// Pairs two present values.
    #[inline]
    pub fn zip<U>(self, other: Opt<U>) -> Opt<(T, U)> {
        match (self, other) {
            (Self::Present(left), Opt::Present(right)) => Opt::Present((left, right)),
            _ => Opt::Absent,
        }
    }

    // =========================================================================
    // Total Defaults
    // =========================================================================

    /// Returns the contained value, or `fallback`.
    ///
    /// `fallback` is evaluated by the caller before the call; use
    /// [`either_with`](Self::either_with) or [`either!`](crate::either) to
    /// defer it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::gate::{Opt, some};
    ///
    /// assert_eq!(some(7).either(0), 7);
    /// assert_eq!(Opt::none().either(0), 0);
    /// ```
    #[inline]
    pub fn either(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback,
        }
    }

    /// Returns the contained value, or the result of `fallback`.
    ///
    /// `fallback` is only called when the value is absent.
    #[inline]
    pub fn either_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Returns the contained value, or `T::default()`.
    #[inline]
    pub fn either_default(self) -> T
    where
        T: Default,
    {
        self.either_with(T::default)
    }

    /// Converts into a `Result`, using `error` for the absent case.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` when the value is absent.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error),
        }
    }

    /// Converts into a `Result`, computing the error lazily.
    ///
    /// # Errors
    ///
    /// Returns `Err(error())` when the value is absent.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error()),
        }
    }

    // =========================================================================
    // In-place Operations
    // =========================================================================

    /// Takes the value out, leaving `Absent` in its place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::gate::{Opt, some};
    ///
    /// let mut slot = some(3);
    /// assert_eq!(slot.take(), Opt::Present(3));
    /// assert_eq!(slot, Opt::Absent);
    /// ```
    #[inline]
    pub const fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Absent)
    }

    /// Stores `value`, returning the previous content.
    #[inline]
    pub const fn replace(&mut self, value: T) -> Self {
        std::mem::replace(self, Self::Present(value))
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the contained value (zero or one item).
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref())
    }

    /// Returns a mutable iterator over the contained value.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut())
    }

    #[inline]
    pub(crate) fn into_std(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> Opt<&T> {
    /// Maps `Opt<&T>` to `Opt<T>` by cloning.
    #[inline]
    pub fn cloned(self) -> Opt<T>
    where
        T: Clone,
    {
        self.map(T::clone)
    }

    /// Maps `Opt<&T>` to `Opt<T>` by copying.
    #[inline]
    pub fn copied(self) -> Opt<T>
    where
        T: Copy,
    {
        self.map(|value| *value)
    }
}

impl<T> Opt<Opt<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::gate::{Opt, some};
    ///
    /// assert_eq!(some(some(1)).flatten(), Opt::Present(1));
    /// assert_eq!(some(Opt::<i32>::none()).flatten(), Opt::Absent);
    /// ```
    #[inline]
    pub fn flatten(self) -> Opt<T> {
        self.and_then(|inner| inner)
    }
}

impl<A, B> Opt<(A, B)> {
    /// Splits an optional pair into a pair of optionals.
    #[inline]
    pub fn unzip(self) -> (Opt<A>, Opt<B>) {
        match self {
            Self::Present((left, right)) => (Opt::Present(left), Opt::Present(right)),
            Self::Absent => (Opt::Absent, Opt::Absent),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Opt<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Opt<T> {
    /// Converts `Some(v)` into `Present(v)` and `None` into `Absent`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<A, V> FromIterator<Opt<A>> for Opt<V>
where
    V: FromIterator<A>,
{
    /// Collects every value, or yields `Absent` at the first absent item.
    ///
    /// Items after the first absent one are not pulled from the iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::gate::{Opt, none, some};
    ///
    /// let all: Opt<Vec<i32>> = vec![some(1), some(2)].into_iter().collect();
    /// assert_eq!(all, Opt::Present(vec![1, 2]));
    ///
    /// let partial: Opt<Vec<i32>> = vec![some(1), none()].into_iter().collect();
    /// assert_eq!(partial, Opt::Absent);
    /// ```
    fn from_iter<I: IntoIterator<Item = Opt<A>>>(iterable: I) -> Self {
        let collected: Option<V> = iterable.into_iter().map(Opt::into_std).collect();
        collected.into()
    }
}

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Opt<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Opt<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Opt<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

static_assertions::assert_impl_all!(Opt<i32>: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(Opt<String>: Clone, Send, Sync, Eq, Ord, std::hash::Hash);
static_assertions::assert_not_impl_any!(Opt<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(Opt<String>: Copy);
