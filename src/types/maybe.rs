//! Optional values: [`Maybe<T>`] is either `Some(T)` or `None`.
//!
//! `Maybe` is a plain tagged union, so any `T` can be carried (including
//! `Option<T>`, `()` and other zero-like values) without being confused with
//! absence.
//!
//! # Examples
//!
//! ```
//! use value_rail::Maybe;
//!
//! let port = Maybe::some("8080")
//!     .and_then(|raw| Maybe::from(raw.parse::<u16>().ok()))
//!     .filter(|port| *port > 1024);
//!
//! assert_eq!(port, Maybe::some(8080));
//! assert_eq!(port.to_string(), "Some(8080)");
//! ```
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;

use crate::types::Fallible;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that is either present (`Some`) or absent (`None`).
///
/// `None` is declared first, so the derived ordering places `None` below every
/// `Some`, and two `Some` values compare by their payloads.
///
/// # Variants
///
/// * `None` - No value
/// * `Some(T)` - A present value
///
/// # Examples
///
/// ```
/// use value_rail::Maybe;
///
/// assert!(Maybe::<i32>::None < Maybe::Some(i32::MIN));
/// assert!(Maybe::Some(5) < Maybe::Some(6));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Maybe<T> {
    None,
    Some(T),
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> Maybe<T> {
    /// Wraps a present value.
    #[inline]
    pub fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// The absent value.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::Maybe;
    ///
    /// assert!(Maybe::some(1).is_some());
    /// assert!(!Maybe::<i32>::none().is_some());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[must_use]
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the payload.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Mutably borrows the payload.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Returns the value, panicking with `message` if there is none.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` when `self` is `None`.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use value_rail::Maybe;
    ///
    /// Maybe::<i32>::none().expect("config must be loaded");
    /// ```
    #[track_caller]
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => expect_failed(message),
        }
    }

    /// Returns the value, panicking if there is none.
    ///
    /// # Panics
    ///
    /// Panics when `self` is `None`.
    #[track_caller]
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => unwrap_failed(),
        }
    }

    /// Returns the value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the value or `T::default()`.
    ///
    /// The zero value of a type is whatever its `Default` implementation
    /// produces (`0`, `""`, an empty collection, ...).
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }

    /// Returns the value or computes one; `f` only runs on `None`.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => f(),
        }
    }

    /// Dispatches to exactly one of the two handlers.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::Maybe;
    ///
    /// let label = Maybe::some(3).match_with(|n| format!("{n} items"), || "empty".to_string());
    /// assert_eq!(label, "3 items");
    /// ```
    #[inline]
    pub fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Converts to a [`Fallible`], using `error` for `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::{Fallible, Maybe};
    ///
    /// assert_eq!(Maybe::some(1).ok_or("missing"), Fallible::Ok(1));
    /// assert_eq!(Maybe::<i32>::none().ok_or("missing"), Fallible::Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Fallible<T, E> {
        match self {
            Self::Some(value) => Fallible::Ok(value),
            Self::None => Fallible::Err(error),
        }
    }

    /// Converts to a [`Fallible`]; `f` only runs on `None`.
    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Fallible<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Fallible::Ok(value),
            Self::None => Fallible::Err(f()),
        }
    }

    /// Keeps the value only if `predicate` holds; `None` never calls it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Some(value) = self {
            if predicate(&value) {
                return Self::Some(value);
            }
        }
        Self::None
    }

    /// Runs `f` on the value, if any, and returns `self` unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            f(value);
        }
        self
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    /// Maps the value, or `default` when there is none.
    ///
    /// Unlike [`Fallible::map_or`], the default is fed through `f` as well and
    /// the result is always `Some`.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).map_or(10, |n| n * 3), Maybe::some(6));
    /// assert_eq!(Maybe::none().map_or(10, |n| n * 3), Maybe::some(30));
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: T, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe::Some(f(self.unwrap_or(default)))
    }

    /// Maps the value, or the output of `default` when there is none.
    ///
    /// `default` only runs on `None`; its output goes through `f` just like
    /// with [`Maybe::map_or`].
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> Maybe<U>
    where
        D: FnOnce() -> T,
        F: FnOnce(T) -> U,
    {
        Maybe::Some(f(self.unwrap_or_else(default)))
    }

    /// Pairs two values when both are present.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).zip(Maybe::some("a")), Maybe::some((1, "a")));
    /// assert_eq!(Maybe::some(1).zip(Maybe::<&str>::none()), Maybe::none());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some((a, b)),
            _ => Maybe::None,
        }
    }

    /// Combines two present values with `f`.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Maybe<U>, f: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some(f(a, b)),
            _ => Maybe::None,
        }
    }

    /// Alias of [`Maybe::and_then`].
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.and_then(f)
    }

    /// `None` if `self` is `None`, otherwise `other`.
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Maybe::None,
        }
    }

    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => Maybe::None,
        }
    }

    /// `self` if it holds a value, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            present @ Self::Some(_) => present,
            Self::None => other,
        }
    }

    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            present @ Self::Some(_) => present,
            Self::None => f(),
        }
    }

    /// `Some` if exactly one side is `Some`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).xor(Maybe::none()), Maybe::some(1));
    /// assert_eq!(Maybe::none().xor(Maybe::some(2)), Maybe::some(2));
    /// assert_eq!(Maybe::some(1).xor(Maybe::some(2)), Maybe::none());
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Orders by variant only (`None < Some`), ignoring payloads.
    ///
    /// Useful for payload types without an ordering; two `Some` values are
    /// always `Equal` here.
    #[inline]
    pub fn cmp_variant<U>(&self, other: &Maybe<U>) -> Ordering {
        self.is_some().cmp(&other.is_some())
    }

    /// Iterates over the value, if any.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.as_ref().into_option() }
    }
}

impl<A, B> Maybe<(A, B)> {
    /// Splits a pair into two `Maybe`s.
    #[inline]
    pub fn unzip(self) -> (Maybe<A>, Maybe<B>) {
        match self {
            Self::Some((a, b)) => (Maybe::Some(a), Maybe::Some(b)),
            Self::None => (Maybe::None, Maybe::None),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Maybe::None,
        }
    }
}

impl<T, E> Maybe<Fallible<T, E>> {
    /// Turns `Maybe<Fallible<T, E>>` into `Fallible<Maybe<T>, E>`.
    ///
    /// `None` becomes `Ok(None)`, `Some(Ok(v))` becomes `Ok(Some(v))` and
    /// `Some(Err(e))` becomes `Err(e)`.
    #[inline]
    pub fn transpose(self) -> Fallible<Maybe<T>, E> {
        match self {
            Self::None => Fallible::Ok(Maybe::None),
            Self::Some(Fallible::Ok(value)) => Fallible::Ok(Maybe::Some(value)),
            Self::Some(Fallible::Err(error)) => Fallible::Err(error),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(f, "Some({})", value),
            Self::None => f.write_str("None"),
        }
    }
}

#[cold]
#[track_caller]
fn expect_failed(message: &str) -> ! {
    panic!("{}", message)
}

#[cold]
#[track_caller]
fn unwrap_failed() -> ! {
    panic!("called `Maybe::unwrap()` on a `None` value")
}

/// Borrowing iterator over a [`Maybe`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`Maybe`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_option() }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects an iterator of `Maybe<A>` into `Maybe<V>`, stopping at the first `None`.
///
/// # Examples
///
/// ```
/// use value_rail::Maybe;
///
/// let all: Maybe<Vec<i32>> = vec![Maybe::some(1), Maybe::some(2)].into_iter().collect();
/// assert_eq!(all, Maybe::some(vec![1, 2]));
///
/// let gap: Maybe<Vec<i32>> = vec![Maybe::some(1), Maybe::none()].into_iter().collect();
/// assert_eq!(gap, Maybe::none());
/// ```
impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iter: I) -> Self {
        iter.into_iter().map(Maybe::into_option).collect::<Option<V>>().into()
    }
}
