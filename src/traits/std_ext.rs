//! Extension traits for moving standard library values onto the rail.
//!
//! # Examples
//!
//! ```
//! use value_rail::traits::{OptionExt, ResultExt};
//! use value_rail::{Fallible, Maybe};
//!
//! assert_eq!(Some(1).into_maybe(), Maybe::some(1));
//!
//! let parsed = "12x".parse::<u8>().ctx("parsing retry count");
//! let err = parsed.unwrap_err();
//! assert_eq!(err.root_cause(), Some("parsing retry count"));
//! assert!(err.is_exception());
//! ```
#[cfg(feature = "std")]
use crate::traits::IntoContextMessage;
#[cfg(feature = "std")]
use crate::types::alloc_type::String;
#[cfg(feature = "std")]
use crate::types::Error;
use crate::types::{Fallible, Maybe};

/// Converts `Option<T>` into [`Maybe<T>`].
pub trait OptionExt<T> {
    fn into_maybe(self) -> Maybe<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        self.into()
    }
}

/// Converts `Result<T, E>` into [`Fallible`], optionally attaching context.
pub trait ResultExt<T, E> {
    /// Keeps the original error type.
    fn into_fallible(self) -> Fallible<T, E>;

    /// Wraps the error as an exception [`Error`] carrying one context frame.
    #[cfg(feature = "std")]
    fn ctx<M>(self, message: M) -> Fallible<T, Error>
    where
        M: IntoContextMessage,
        E: std::error::Error + Send + Sync + 'static;

    /// Like [`ResultExt::ctx`], with the message built only on `Err`.
    #[cfg(feature = "std")]
    fn ctx_with<F>(self, f: F) -> Fallible<T, Error>
    where
        F: FnOnce() -> String,
        E: std::error::Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_fallible(self) -> Fallible<T, E> {
        self.into()
    }

    #[cfg(feature = "std")]
    #[inline]
    fn ctx<M>(self, message: M) -> Fallible<T, Error>
    where
        M: IntoContextMessage,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.into_fallible().map_err(Error::from_std).add_context(message)
    }

    #[cfg(feature = "std")]
    #[inline]
    fn ctx_with<F>(self, f: F) -> Fallible<T, Error>
    where
        F: FnOnce() -> String,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.into_fallible().map_err(Error::from_std).add_context_with(f)
    }
}
