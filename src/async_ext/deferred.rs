//! Async-callback variants of the [`Maybe`] and [`Fallible`] combinators.
//!
//! Each `*_async` method mirrors its synchronous namesake but accepts a
//! callback that returns a future. The callback is awaited only on the branch
//! where the synchronous version would have called it; the other branch
//! resolves without polling anything.
//!
//! Callbacks that inspect a value receive `&T` and must return a future that
//! does not borrow it. Copy what the future needs out of the reference first.
//!
//! # Examples
//!
//! ```rust
//! use value_rail::Maybe;
//!
//! async fn lookup(id: u32) -> Maybe<String> {
//!     if id == 7 { Maybe::some("seven".to_string()) } else { Maybe::none() }
//! }
//!
//! async fn example() {
//!     let name = Maybe::some(7).and_then_async(lookup).await;
//!     assert_eq!(name, Maybe::some("seven".to_string()));
//! }
//! ```

use core::future::Future;

use crate::types::{Fallible, Maybe};

impl<T> Maybe<T> {
    /// Returns the value, or awaits `f` for one when there is none.
    pub async fn unwrap_or_else_async<F, Fut>(self, f: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Some(value) => value,
            Self::None => f().await,
        }
    }

    /// Awaits exactly one of the two handlers.
    pub async fn match_with_async<R, S, SFut, N, NFut>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        N: FnOnce() -> NFut,
        NFut: Future<Output = R>,
    {
        match self {
            Self::Some(value) => on_some(value).await,
            Self::None => on_none().await,
        }
    }

    /// Converts to a [`Fallible`], awaiting `f` for the error on `None`.
    pub async fn ok_or_else_async<E, F, Fut>(self, f: F) -> Fallible<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = E>,
    {
        match self {
            Self::Some(value) => Fallible::Ok(value),
            Self::None => Fallible::Err(f().await),
        }
    }

    /// Keeps the value only if the awaited predicate holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use core::future::ready;
    /// use value_rail::Maybe;
    ///
    /// async fn example() {
    ///     let kept = Maybe::some(5).filter_async(|n| ready(*n > 4)).await;
    ///     assert_eq!(kept, Maybe::some(5));
    /// }
    /// ```
    pub async fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        if let Self::Some(value) = self {
            if predicate(&value).await {
                return Self::Some(value);
            }
        }
        Self::None
    }

    /// Awaits `f` on the value, if any, and returns `self` unchanged.
    pub async fn inspect_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Some(value) = &self {
            f(value).await;
        }
        self
    }

    pub async fn map_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => Maybe::Some(f(value).await),
            Self::None => Maybe::None,
        }
    }

    /// Awaited counterpart of [`Maybe::map_or`]; `default` is mapped too.
    pub async fn map_or_async<U, F, Fut>(self, default: T, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        Maybe::Some(f(self.unwrap_or(default)).await)
    }

    /// Awaited counterpart of [`Maybe::map_or_else`]; both callbacks are async.
    pub async fn map_or_else_async<U, D, DFut, F, Fut>(self, default: D, f: F) -> Maybe<U>
    where
        D: FnOnce() -> DFut,
        DFut: Future<Output = T>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        let value = self.unwrap_or_else_async(default).await;
        Maybe::Some(f(value).await)
    }

    /// Combines two present values with an awaited function.
    pub async fn zip_with_async<U, R, F, Fut>(self, other: Maybe<U>, f: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> Fut,
        Fut: Future<Output = R>,
    {
        match (self, other) {
            (Self::Some(left), Maybe::Some(right)) => Maybe::Some(f(left, right).await),
            _ => Maybe::None,
        }
    }

    /// Alias of [`Maybe::and_then_async`].
    pub async fn flat_map_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        self.and_then_async(f).await
    }

    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Self::Some(value) => f(value).await,
            Self::None => Maybe::None,
        }
    }

    /// Keeps `self` when present, otherwise awaits `f` for an alternative.
    pub async fn or_else_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        match self {
            present @ Self::Some(_) => present,
            Self::None => f().await,
        }
    }
}

impl<T, E> Fallible<T, E> {
    /// Returns the success value, or awaits `f` with the error for a fallback.
    pub async fn unwrap_or_else_async<F, Fut>(self, f: F) -> T
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error).await,
        }
    }

    /// Awaits exactly one of the two handlers.
    pub async fn match_with_async<R, O, OFut, X, XFut>(self, on_ok: O, on_err: X) -> R
    where
        O: FnOnce(T) -> OFut,
        OFut: Future<Output = R>,
        X: FnOnce(E) -> XFut,
        XFut: Future<Output = R>,
    {
        match self {
            Self::Ok(value) => on_ok(value).await,
            Self::Err(error) => on_err(error).await,
        }
    }

    /// Awaits `f` on the success value, if any, and returns `self` unchanged.
    pub async fn inspect_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Ok(value) = &self {
            f(value).await;
        }
        self
    }

    /// Awaits `f` on the error, if any, and returns `self` unchanged.
    pub async fn inspect_err_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&E) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Err(error) = &self {
            f(error).await;
        }
        self
    }

    pub async fn map_async<U, F, Fut>(self, f: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Ok(value) => Fallible::Ok(f(value).await),
            Self::Err(error) => Fallible::Err(error),
        }
    }

    pub async fn map_err_async<G, F, Fut>(self, f: F) -> Fallible<T, G>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = G>,
    {
        match self {
            Self::Ok(value) => Fallible::Ok(value),
            Self::Err(error) => Fallible::Err(f(error).await),
        }
    }

    /// Awaited counterpart of [`Fallible::map_or`]; `default` is returned as is.
    pub async fn map_or_async<U, F, Fut>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Ok(value) => f(value).await,
            Self::Err(_) => default,
        }
    }

    /// Awaited counterpart of [`Fallible::map_or_else`].
    pub async fn map_or_else_async<U, D, DFut, F, Fut>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> DFut,
        DFut: Future<Output = U>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Ok(value) => f(value).await,
            Self::Err(error) => default(error).await,
        }
    }

    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Fallible<U, E>>,
    {
        match self {
            Self::Ok(value) => f(value).await,
            Self::Err(error) => Fallible::Err(error),
        }
    }

    /// Keeps a success, otherwise awaits `f` with the error for a recovery.
    pub async fn or_else_async<G, F, Fut>(self, f: F) -> Fallible<T, G>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Fallible<T, G>>,
    {
        match self {
            Self::Ok(value) => Fallible::Ok(value),
            Self::Err(error) => f(error).await,
        }
    }
}
