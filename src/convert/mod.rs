//! Conversions between [`Maybe`]/[`Fallible`] and the standard library's
//! `Option`/`Result`.
//!
//! These let the crate's types sit at API boundaries that expect `Option` or
//! `Result`, and let callers keep using `?` on the standard types.
//!
//! # Examples
//!
//! ```
//! use value_rail::{Fallible, Maybe};
//!
//! let maybe: Maybe<i32> = Some(3).into();
//! assert_eq!(maybe, Maybe::some(3));
//!
//! let std_option: Option<i32> = maybe.into();
//! assert_eq!(std_option, Some(3));
//!
//! fn half(n: i32) -> Result<i32, &'static str> {
//!     let checked: Fallible<i32, &str> = if n % 2 == 0 { Fallible::Ok(n / 2) } else { Fallible::Err("odd") };
//!     checked.into_result()
//! }
//! assert_eq!(half(4), Ok(2));
//! assert_eq!(half(3), Err("odd"));
//! ```
use crate::types::{Fallible, Maybe};

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T, E> From<Result<T, E>> for Fallible<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Fallible::Ok(value),
            Err(error) => Fallible::Err(error),
        }
    }
}

impl<T, E> From<Fallible<T, E>> for Result<T, E> {
    #[inline]
    fn from(fallible: Fallible<T, E>) -> Self {
        fallible.into_result()
    }
}

/// Converts a `Maybe<Fallible<T, E>>` into a standard `Result<Option<T>, E>`.
///
/// Shorthand for `transpose` followed by two std conversions, handy when
/// handing values to code written against the standard types.
#[inline]
pub fn transpose_into_std<T, E>(value: Maybe<Fallible<T, E>>) -> Result<Option<T>, E> {
    value.transpose().map(Maybe::into_option).into_result()
}
