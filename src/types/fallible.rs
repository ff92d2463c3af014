//! Fallible values: [`Fallible<T, E>`] is either `Ok(T)` or `Err(E)`.
//!
//! The error type defaults to [`Error`], which carries a chain of context
//! frames; any other error type works with every combinator except the
//! context operations.
//!
//! # Examples
//!
//! ```
//! use value_rail::{Error, Fallible};
//!
//! fn parse_port(raw: &str) -> Fallible<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Fallible::Ok(port),
//!         Err(e) => Fallible::Err(Error::from_std(e)),
//!     }
//! }
//!
//! let port = parse_port("80a").add_context("reading listen port");
//! let rendered = port.unwrap_err().to_string();
//! assert!(rendered.starts_with("invalid digit"));
//! assert!(rendered.ends_with("└── reading listen port"));
//! ```
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;

use crate::traits::IntoContextMessage;
use crate::types::alloc_type::String;
use crate::types::{Error, Maybe};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Success with a value of type `T`, or failure with an error of type `E`.
///
/// `Err` is declared first, so the derived ordering places every `Err` below
/// every `Ok`; two values of the same variant compare by their payloads.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type, [`Error`] unless stated otherwise
///
/// # Examples
///
/// ```
/// use value_rail::Fallible;
///
/// let ok: Fallible<i32, &str> = Fallible::Ok(1);
/// let err: Fallible<i32, &str> = Fallible::Err("boom");
///
/// assert!(err < ok);
/// assert_eq!(ok.to_string(), "Ok(1)");
/// assert_eq!(err.to_string(), "Err(boom)");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Fallible<T, E = Error> {
    Err(E),
    Ok(T),
}

impl<T, E> Fallible<T, E> {
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Borrows both payloads.
    #[inline]
    pub fn as_ref(&self) -> Fallible<&T, &E> {
        match self {
            Self::Ok(value) => Fallible::Ok(value),
            Self::Err(error) => Fallible::Err(error),
        }
    }

    /// Converts into the standard library `Result`, e.g. to use `?`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Returns the success value, panicking with `message` on `Err`.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` when `self` is `Err`.
    #[track_caller]
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => expect_failed(message),
        }
    }

    /// Returns the success value, panicking with the error's `Debug`
    /// rendering on `Err`.
    ///
    /// For [`Error`](crate::Error) that rendering is its description followed
    /// by the context trail.
    ///
    /// # Panics
    ///
    /// Panics when `self` is `Err`.
    #[track_caller]
    #[inline]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => unwrap_failed("called `Fallible::unwrap()` on an `Err` value", &error),
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }

    /// Returns the success value or recovers one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Returns the error, panicking with `message` on `Ok`.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` when `self` is `Ok`.
    #[track_caller]
    #[inline]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Self::Err(error) => error,
            Self::Ok(_) => expect_failed(message),
        }
    }

    /// Returns the error, panicking with the value's `Debug` rendering on `Ok`.
    ///
    /// # Panics
    ///
    /// Panics when `self` is `Ok`.
    #[track_caller]
    #[inline]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Err(error) => error,
            Self::Ok(value) => {
                unwrap_failed("called `Fallible::unwrap_err()` on an `Ok` value", &value)
            },
        }
    }

    /// Dispatches to exactly one of the two handlers.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::Fallible;
    ///
    /// let status = Fallible::<u32, &str>::Err("timeout")
    ///     .match_with(|n| format!("{n} rows"), |e| format!("failed: {e}"));
    /// assert_eq!(status, "failed: timeout");
    /// ```
    #[inline]
    pub fn match_with<R, O, X>(self, on_ok: O, on_err: X) -> R
    where
        O: FnOnce(T) -> R,
        X: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// The success value as a [`Maybe`], discarding any error.
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::None,
        }
    }

    /// The error as a [`Maybe`], discarding any success value.
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Err(error) => Maybe::Some(error),
            Self::Ok(_) => Maybe::None,
        }
    }

    /// Runs `f` on the success value, if any, and returns `self` unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Runs `f` on the error, if any, and returns `self` unchanged.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            f(error);
        }
        self
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Fallible::Ok(f(value)),
            Self::Err(error) => Fallible::Err(error),
        }
    }

    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Fallible<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Fallible::Ok(value),
            Self::Err(error) => Fallible::Err(f(error)),
        }
    }

    /// Maps the success value, or returns `default` as-is on `Err`.
    ///
    /// Unlike [`Maybe::map_or`], `default` is not passed through `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::Fallible;
    ///
    /// assert_eq!(Fallible::<i32, &str>::Ok(2).map_or(10, |n| n * 3), 6);
    /// assert_eq!(Fallible::<i32, &str>::Err("no").map_or(10, |n| n * 3), 10);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => default,
        }
    }

    /// Maps the success value with `f`, or the error with `default`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => default(error),
        }
    }

    /// `other` if `self` is `Ok`, otherwise `self`'s error.
    #[inline]
    pub fn and<U>(self, other: Fallible<U, E>) -> Fallible<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Fallible::Err(error),
        }
    }

    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> Fallible<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Fallible::Err(error),
        }
    }

    /// `self`'s value if `Ok`, otherwise `other`.
    #[inline]
    pub fn or<G>(self, other: Fallible<T, G>) -> Fallible<T, G> {
        match self {
            Self::Ok(value) => Fallible::Ok(value),
            Self::Err(_) => other,
        }
    }

    #[inline]
    pub fn or_else<G, F>(self, f: F) -> Fallible<T, G>
    where
        F: FnOnce(E) -> Fallible<T, G>,
    {
        match self {
            Self::Ok(value) => Fallible::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// Orders by variant only (`Err < Ok`), ignoring payloads.
    #[inline]
    pub fn cmp_variant<U, G>(&self, other: &Fallible<U, G>) -> Ordering {
        self.is_ok().cmp(&other.is_ok())
    }

    /// Iterates over the success value, if any.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.as_ref().ok().into_option() }
    }
}

impl<T, E> Fallible<Maybe<T>, E> {
    /// Turns `Fallible<Maybe<T>, E>` into `Maybe<Fallible<T, E>>`.
    ///
    /// `Ok(None)` becomes `None`, `Ok(Some(v))` becomes `Some(Ok(v))` and
    /// `Err(e)` becomes `Some(Err(e))`.
    #[inline]
    pub fn transpose(self) -> Maybe<Fallible<T, E>> {
        match self {
            Self::Ok(Maybe::None) => Maybe::None,
            Self::Ok(Maybe::Some(value)) => Maybe::Some(Fallible::Ok(value)),
            Self::Err(error) => Maybe::Some(Fallible::Err(error)),
        }
    }
}

impl<T> Fallible<T, Error> {
    /// Adds `message` as the outermost context frame of the error.
    ///
    /// `Ok` values pass through untouched and the message is never built.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::{Error, Fallible};
    ///
    /// let failed: Fallible<()> = Fallible::Err(Error::value("disk full"));
    /// let err = failed
    ///     .add_context("writing snapshot")
    ///     .add_context("saving session")
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "disk full\n├── saving session\n└── writing snapshot");
    /// assert_eq!(err.root_cause(), Some("writing snapshot"));
    /// ```
    #[inline]
    pub fn add_context<M>(self, message: M) -> Self
    where
        M: IntoContextMessage,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(error) => Self::Err(error.add_context(message)),
        }
    }

    /// Like [`Fallible::add_context`], with the message built only on `Err`.
    #[inline]
    pub fn add_context_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(error) => Self::Err(error.add_context(f())),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Fallible<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({})", value),
            Self::Err(error) => write!(f, "Err({})", error),
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
fn unwrap_failed(message: &str, payload: &dyn fmt::Debug) -> ! {
    panic!("{}: {:?}", message, payload)
}

/// Borrowing iterator over the success value of a [`Fallible`].
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

impl<T, E> IntoIterator for Fallible<T, E> {
    type Item = T;
    type IntoIter = crate::types::maybe::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Fallible<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects an iterator of `Fallible<A, E>` into `Fallible<V, E>`, stopping at
/// the first error.
///
/// # Examples
///
/// ```
/// use value_rail::Fallible;
///
/// let parsed: Fallible<Vec<i32>, &str> =
///     vec![Fallible::Ok(1), Fallible::Err("bad"), Fallible::Err("worse")].into_iter().collect();
/// assert_eq!(parsed, Fallible::Err("bad"));
/// ```
impl<A, E, V> FromIterator<Fallible<A, E>> for Fallible<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Fallible<A, E>>>(iter: I) -> Self {
        iter.into_iter().map(Fallible::into_result).collect::<Result<V, E>>().into()
    }
}
