//! Extension traits for `Future<Output = Fallible<T, E>>`.

use core::fmt;
use core::future::Future;

use crate::traits::IntoContextMessage;
use crate::types::alloc_type::String;
use crate::types::{Error, Fallible, Maybe};

use super::settle::Settle;
use super::shape::MaybeShape;

/// Deferred counterparts of the [`Fallible`] operations.
///
/// Mirrors [`FutureMaybeExt`](super::FutureMaybeExt): plain callbacks run
/// through a [`Settle`] once the inner future resolves, `_async` callbacks
/// are awaited after it.
///
/// # Examples
///
/// ```rust
/// use value_rail::prelude_async::*;
///
/// async fn load(id: u32) -> Fallible<u32, &'static str> {
///     if id > 0 { Fallible::Ok(id * 10) } else { Fallible::Err("no such row") }
/// }
///
/// async fn example() {
///     let rows = load(4).map(|n| n + 1).unwrap_or(0).await;
///     assert_eq!(rows, 41);
///
///     let fallback = load(0).or_else(|_| Fallible::<u32, ()>::Ok(1)).await;
///     assert_eq!(fallback, Fallible::Ok(1));
/// }
/// ```
pub trait FutureFallibleExt<T, E>: Future<Output = Fallible<T, E>> + Sized {
    /// Applies an arbitrary synchronous rule to the resolved `Fallible`.
    fn settle<R, F>(self, rule: F) -> Settle<Self, F>
    where
        F: FnOnce(Fallible<T, E>) -> R;

    fn is_ok(self) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> bool> {
        self.settle(|fallible: Fallible<T, E>| fallible.is_ok())
    }

    fn is_err(self) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> bool> {
        self.settle(|fallible: Fallible<T, E>| fallible.is_err())
    }

    fn expect<M>(self, message: M) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> T>
    where
        M: AsRef<str>,
    {
        self.settle(move |fallible: Fallible<T, E>| fallible.expect(message.as_ref()))
    }

    fn unwrap(self) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> T>
    where
        E: fmt::Debug,
    {
        self.settle(Fallible::unwrap)
    }

    fn unwrap_or(self, default: T) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> T> {
        self.settle(move |fallible: Fallible<T, E>| fallible.unwrap_or(default))
    }

    fn unwrap_or_default(self) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> T>
    where
        T: Default,
    {
        self.settle(Fallible::unwrap_or_default)
    }

    fn unwrap_or_else<F>(self, f: F) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> T>
    where
        F: FnOnce(E) -> T,
    {
        self.settle(move |fallible: Fallible<T, E>| fallible.unwrap_or_else(f))
    }

    fn unwrap_or_else_async<F, Fut>(self, f: F) -> impl Future<Output = T>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.unwrap_or_else_async(f).await }
    }

    fn expect_err<M>(self, message: M) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> E>
    where
        M: AsRef<str>,
    {
        self.settle(move |fallible: Fallible<T, E>| fallible.expect_err(message.as_ref()))
    }

    fn unwrap_err(self) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> E>
    where
        T: fmt::Debug,
    {
        self.settle(Fallible::unwrap_err)
    }

    fn match_with<R, O, X>(self, on_ok: O, on_err: X) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> R>
    where
        O: FnOnce(T) -> R,
        X: FnOnce(E) -> R,
    {
        self.settle(move |fallible: Fallible<T, E>| fallible.match_with(on_ok, on_err))
    }

    fn match_with_async<R, O, OFut, X, XFut>(self, on_ok: O, on_err: X) -> impl Future<Output = R>
    where
        O: FnOnce(T) -> OFut,
        OFut: Future<Output = R>,
        X: FnOnce(E) -> XFut,
        XFut: Future<Output = R>,
    {
        async move { self.await.match_with_async(on_ok, on_err).await }
    }

    fn ok(self) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> Maybe<T>> {
        self.settle(Fallible::ok)
    }

    fn err(self) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> Maybe<E>> {
        self.settle(Fallible::err)
    }

    fn inspect<F>(self, f: F) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> Fallible<T, E>>
    where
        F: FnOnce(&T),
    {
        self.settle(move |fallible: Fallible<T, E>| fallible.inspect(f))
    }

    fn inspect_async<F, Fut>(self, f: F) -> impl Future<Output = Fallible<T, E>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.inspect_async(f).await }
    }

    fn inspect_err<F>(self, f: F) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> Fallible<T, E>>
    where
        F: FnOnce(&E),
    {
        self.settle(move |fallible: Fallible<T, E>| fallible.inspect_err(f))
    }

    fn inspect_err_async<F, Fut>(self, f: F) -> impl Future<Output = Fallible<T, E>>
    where
        F: FnOnce(&E) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.inspect_err_async(f).await }
    }

    fn map<U, F>(self, f: F) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> Fallible<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        self.settle(move |fallible: Fallible<T, E>| fallible.map(f))
    }

    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Fallible<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    fn map_err<G, F>(self, f: F) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> Fallible<T, G>>
    where
        F: FnOnce(E) -> G,
    {
        self.settle(move |fallible: Fallible<T, E>| fallible.map_err(f))
    }

    fn map_err_async<G, F, Fut>(self, f: F) -> impl Future<Output = Fallible<T, G>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = G>,
    {
        async move { self.await.map_err_async(f).await }
    }

    fn map_or<U, F>(self, default: U, f: F) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> U>
    where
        F: FnOnce(T) -> U,
    {
        self.settle(move |fallible: Fallible<T, E>| fallible.map_or(default, f))
    }

    fn map_or_async<U, F, Fut>(self, default: U, f: F) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_or_async(default, f).await }
    }

    fn map_or_else<U, D, F>(self, default: D, f: F) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> U>
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        self.settle(move |fallible: Fallible<T, E>| fallible.map_or_else(default, f))
    }

    fn map_or_else_async<U, D, DFut, F, Fut>(self, default: D, f: F) -> impl Future<Output = U>
    where
        D: FnOnce(E) -> DFut,
        DFut: Future<Output = U>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_or_else_async(default, f).await }
    }

    fn and<U>(self, other: Fallible<U, E>) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> Fallible<U, E>> {
        self.settle(move |fallible: Fallible<T, E>| fallible.and(other))
    }

    fn and_then<U, F>(self, f: F) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> Fallible<U, E>>
    where
        F: FnOnce(T) -> Fallible<U, E>,
    {
        self.settle(move |fallible: Fallible<T, E>| fallible.and_then(f))
    }

    fn and_then_async<U, F, Fut>(self, f: F) -> impl Future<Output = Fallible<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Fallible<U, E>>,
    {
        async move { self.await.and_then_async(f).await }
    }

    fn or<G>(self, other: Fallible<T, G>) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> Fallible<T, G>> {
        self.settle(move |fallible: Fallible<T, E>| fallible.or(other))
    }

    fn or_else<G, F>(self, f: F) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> Fallible<T, G>>
    where
        F: FnOnce(E) -> Fallible<T, G>,
    {
        self.settle(move |fallible: Fallible<T, E>| fallible.or_else(f))
    }

    fn or_else_async<G, F, Fut>(self, f: F) -> impl Future<Output = Fallible<T, G>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Fallible<T, G>>,
    {
        async move { self.await.or_else_async(f).await }
    }

    /// Deferred [`Fallible::transpose`].
    fn transpose(self) -> Settle<Self, impl FnOnce(Fallible<T, E>) -> Maybe<Fallible<T::Inner, E>>>
    where
        T: MaybeShape,
    {
        self.settle(|fallible: Fallible<T, E>| fallible.map(MaybeShape::into_maybe).transpose())
    }
}

impl<Fut, T, E> FutureFallibleExt<T, E> for Fut
where
    Fut: Future<Output = Fallible<T, E>>,
{
    #[inline]
    fn settle<R, F>(self, rule: F) -> Settle<Self, F>
    where
        F: FnOnce(Fallible<T, E>) -> R,
    {
        Settle::new(self, rule)
    }
}

/// Context attachment for futures resolving to `Fallible<T, Error>`.
///
/// The message is only produced when the future resolves to `Err`.
///
/// # Examples
///
/// ```rust
/// use value_rail::prelude_async::*;
///
/// async fn read_config() -> Fallible<String> {
///     Fallible::Err(Error::value("file not found"))
/// }
///
/// async fn example() {
///     let err = read_config()
///         .add_context_with(|| format!("loading {}", "app.toml"))
///         .await
///         .unwrap_err();
///     assert_eq!(err.root_cause(), Some("loading app.toml"));
/// }
/// ```
pub trait FutureContextExt<T>: Future<Output = Fallible<T, Error>> + Sized {
    fn add_context<M>(self, message: M) -> Settle<Self, impl FnOnce(Fallible<T, Error>) -> Fallible<T, Error>>
    where
        M: IntoContextMessage,
    {
        Settle::new(self, move |fallible: Fallible<T, Error>| fallible.add_context(message))
    }

    fn add_context_with<F>(self, f: F) -> Settle<Self, impl FnOnce(Fallible<T, Error>) -> Fallible<T, Error>>
    where
        F: FnOnce() -> String,
    {
        Settle::new(self, move |fallible: Fallible<T, Error>| fallible.add_context_with(f))
    }
}

impl<Fut, T> FutureContextExt<T> for Fut where Fut: Future<Output = Fallible<T, Error>> {}
