//! Extension trait for `Future<Output = Maybe<T>>`.
//!
//! Every [`Maybe`] operation is available directly on a deferred `Maybe`, so
//! a chain can be built before anything is awaited:
//!
//! ```rust
//! use value_rail::prelude_async::*;
//!
//! async fn find_port() -> Maybe<&'static str> {
//!     Maybe::some("8080")
//! }
//!
//! async fn example() {
//!     let port = find_port()
//!         .and_then(|raw| Maybe::from(raw.parse::<u16>().ok()))
//!         .filter(|port| *port > 1024)
//!         .unwrap_or(3000)
//!         .await;
//!     assert_eq!(port, 8080);
//! }
//! ```

use core::future::Future;

use crate::types::{Fallible, Maybe};

use super::settle::Settle;
use super::shape::{FallibleShape, MaybeShape, PairShape};

/// Deferred counterparts of the [`Maybe`] operations.
///
/// Methods taking plain callbacks return a [`Settle`] that applies the
/// synchronous operation once the inner future resolves. Methods suffixed
/// `_async` accept callbacks returning futures and await them in turn.
pub trait FutureMaybeExt<T>: Future<Output = Maybe<T>> + Sized {
    /// Applies an arbitrary synchronous rule to the resolved `Maybe`.
    fn settle<R, F>(self, rule: F) -> Settle<Self, F>
    where
        F: FnOnce(Maybe<T>) -> R;

    fn is_some(self) -> Settle<Self, impl FnOnce(Maybe<T>) -> bool> {
        self.settle(|maybe: Maybe<T>| maybe.is_some())
    }

    fn is_none(self) -> Settle<Self, impl FnOnce(Maybe<T>) -> bool> {
        self.settle(|maybe: Maybe<T>| maybe.is_none())
    }

    /// Resolves to the value, panicking with `message` on `None`.
    fn expect<M>(self, message: M) -> Settle<Self, impl FnOnce(Maybe<T>) -> T>
    where
        M: AsRef<str>,
    {
        self.settle(move |maybe: Maybe<T>| maybe.expect(message.as_ref()))
    }

    fn unwrap(self) -> Settle<Self, impl FnOnce(Maybe<T>) -> T> {
        self.settle(Maybe::unwrap)
    }

    fn unwrap_or(self, default: T) -> Settle<Self, impl FnOnce(Maybe<T>) -> T> {
        self.settle(move |maybe: Maybe<T>| maybe.unwrap_or(default))
    }

    fn unwrap_or_default(self) -> Settle<Self, impl FnOnce(Maybe<T>) -> T>
    where
        T: Default,
    {
        self.settle(Maybe::unwrap_or_default)
    }

    fn unwrap_or_else<F>(self, f: F) -> Settle<Self, impl FnOnce(Maybe<T>) -> T>
    where
        F: FnOnce() -> T,
    {
        self.settle(move |maybe: Maybe<T>| maybe.unwrap_or_else(f))
    }

    fn unwrap_or_else_async<F, Fut>(self, f: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.unwrap_or_else_async(f).await }
    }

    fn match_with<R, S, N>(self, on_some: S, on_none: N) -> Settle<Self, impl FnOnce(Maybe<T>) -> R>
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        self.settle(move |maybe: Maybe<T>| maybe.match_with(on_some, on_none))
    }

    fn match_with_async<R, S, SFut, N, NFut>(self, on_some: S, on_none: N) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        N: FnOnce() -> NFut,
        NFut: Future<Output = R>,
    {
        async move { self.await.match_with_async(on_some, on_none).await }
    }

    fn ok_or<E>(self, error: E) -> Settle<Self, impl FnOnce(Maybe<T>) -> Fallible<T, E>> {
        self.settle(move |maybe: Maybe<T>| maybe.ok_or(error))
    }

    fn ok_or_else<E, F>(self, f: F) -> Settle<Self, impl FnOnce(Maybe<T>) -> Fallible<T, E>>
    where
        F: FnOnce() -> E,
    {
        self.settle(move |maybe: Maybe<T>| maybe.ok_or_else(f))
    }

    fn ok_or_else_async<E, F, Fut>(self, f: F) -> impl Future<Output = Fallible<T, E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = E>,
    {
        async move { self.await.ok_or_else_async(f).await }
    }

    fn filter<P>(self, predicate: P) -> Settle<Self, impl FnOnce(Maybe<T>) -> Maybe<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        self.settle(move |maybe: Maybe<T>| maybe.filter(predicate))
    }

    fn filter_async<P, Fut>(self, predicate: P) -> impl Future<Output = Maybe<T>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move { self.await.filter_async(predicate).await }
    }

    fn inspect<F>(self, f: F) -> Settle<Self, impl FnOnce(Maybe<T>) -> Maybe<T>>
    where
        F: FnOnce(&T),
    {
        self.settle(move |maybe: Maybe<T>| maybe.inspect(f))
    }

    fn inspect_async<F, Fut>(self, f: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.inspect_async(f).await }
    }

    fn map<U, F>(self, f: F) -> Settle<Self, impl FnOnce(Maybe<T>) -> Maybe<U>>
    where
        F: FnOnce(T) -> U,
    {
        self.settle(move |maybe: Maybe<T>| maybe.map(f))
    }

    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    fn map_or<U, F>(self, default: T, f: F) -> Settle<Self, impl FnOnce(Maybe<T>) -> Maybe<U>>
    where
        F: FnOnce(T) -> U,
    {
        self.settle(move |maybe: Maybe<T>| maybe.map_or(default, f))
    }

    fn map_or_async<U, F, Fut>(self, default: T, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_or_async(default, f).await }
    }

    fn map_or_else<U, D, F>(self, default: D, f: F) -> Settle<Self, impl FnOnce(Maybe<T>) -> Maybe<U>>
    where
        D: FnOnce() -> T,
        F: FnOnce(T) -> U,
    {
        self.settle(move |maybe: Maybe<T>| maybe.map_or_else(default, f))
    }

    fn map_or_else_async<U, D, DFut, F, Fut>(self, default: D, f: F) -> impl Future<Output = Maybe<U>>
    where
        D: FnOnce() -> DFut,
        DFut: Future<Output = T>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_or_else_async(default, f).await }
    }

    fn zip<U>(self, other: Maybe<U>) -> Settle<Self, impl FnOnce(Maybe<T>) -> Maybe<(T, U)>> {
        self.settle(move |maybe: Maybe<T>| maybe.zip(other))
    }

    fn zip_with<U, R, F>(self, other: Maybe<U>, f: F) -> Settle<Self, impl FnOnce(Maybe<T>) -> Maybe<R>>
    where
        F: FnOnce(T, U) -> R,
    {
        self.settle(move |maybe: Maybe<T>| maybe.zip_with(other, f))
    }

    fn zip_with_async<U, R, F, Fut>(self, other: Maybe<U>, f: F) -> impl Future<Output = Maybe<R>>
    where
        F: FnOnce(T, U) -> Fut,
        Fut: Future<Output = R>,
    {
        async move { self.await.zip_with_async(other, f).await }
    }

    fn flat_map<U, F>(self, f: F) -> Settle<Self, impl FnOnce(Maybe<T>) -> Maybe<U>>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.settle(move |maybe: Maybe<T>| maybe.and_then(f))
    }

    fn flat_map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        async move { self.await.and_then_async(f).await }
    }

    fn and<U>(self, other: Maybe<U>) -> Settle<Self, impl FnOnce(Maybe<T>) -> Maybe<U>> {
        self.settle(move |maybe: Maybe<T>| maybe.and(other))
    }

    fn and_then<U, F>(self, f: F) -> Settle<Self, impl FnOnce(Maybe<T>) -> Maybe<U>>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.settle(move |maybe: Maybe<T>| maybe.and_then(f))
    }

    fn and_then_async<U, F, Fut>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        async move { self.await.and_then_async(f).await }
    }

    fn or(self, other: Maybe<T>) -> Settle<Self, impl FnOnce(Maybe<T>) -> Maybe<T>> {
        self.settle(move |maybe: Maybe<T>| maybe.or(other))
    }

    fn or_else<F>(self, f: F) -> Settle<Self, impl FnOnce(Maybe<T>) -> Maybe<T>>
    where
        F: FnOnce() -> Maybe<T>,
    {
        self.settle(move |maybe: Maybe<T>| maybe.or_else(f))
    }

    fn or_else_async<F, Fut>(self, f: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Maybe<T>>,
    {
        async move { self.await.or_else_async(f).await }
    }

    fn xor(self, other: Maybe<T>) -> Settle<Self, impl FnOnce(Maybe<T>) -> Maybe<T>> {
        self.settle(move |maybe: Maybe<T>| maybe.xor(other))
    }

    /// Deferred [`Maybe::flatten`].
    fn flatten(self) -> Settle<Self, impl FnOnce(Maybe<T>) -> Maybe<T::Inner>>
    where
        T: MaybeShape,
    {
        self.settle(|maybe: Maybe<T>| maybe.and_then(MaybeShape::into_maybe))
    }

    /// Deferred [`Maybe::unzip`].
    fn unzip(self) -> Settle<Self, impl FnOnce(Maybe<T>) -> (Maybe<T::First>, Maybe<T::Second>)>
    where
        T: PairShape,
    {
        self.settle(|maybe: Maybe<T>| maybe.map(PairShape::into_pair).unzip())
    }

    /// Deferred [`Maybe::transpose`].
    #[allow(clippy::type_complexity)]
    fn transpose(self) -> Settle<Self, impl FnOnce(Maybe<T>) -> Fallible<Maybe<T::Value>, T::Error>>
    where
        T: FallibleShape,
    {
        self.settle(|maybe: Maybe<T>| maybe.map(FallibleShape::into_fallible).transpose())
    }
}

impl<Fut, T> FutureMaybeExt<T> for Fut
where
    Fut: Future<Output = Maybe<T>>,
{
    #[inline]
    fn settle<R, F>(self, rule: F) -> Settle<Self, F>
    where
        F: FnOnce(Maybe<T>) -> R,
    {
        Settle::new(self, rule)
    }
}
