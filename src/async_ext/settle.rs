//! The single future used to lift synchronous rules over deferred values.
//!
//! [`Settle`] awaits an inner future and feeds its output to a synchronous
//! closure exactly once. Every future-side operator of
//! [`FutureMaybeExt`](super::FutureMaybeExt) and
//! [`FutureFallibleExt`](super::FutureFallibleExt) that takes a plain callback
//! is a `Settle` around the matching synchronous method.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

pin_project! {
    /// Awaits `future`, then applies `rule` to its output.
    ///
    /// # Cancel Safety
    ///
    /// `Settle` is cancel-safe if the inner future is cancel-safe. The rule
    /// only runs once the inner future is ready, so dropping a pending
    /// `Settle` never invokes it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let doubled = async { Maybe::some(21) }.settle(|m| m.map(|n| n * 2)).await;
    ///     assert_eq!(doubled, Maybe::some(42));
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct Settle<Fut, F> {
        #[pin]
        future: Fut,
        rule: Option<F>,
    }
}

impl<Fut, F> Settle<Fut, F> {
    /// Creates a new `Settle` from a future and the rule to apply to its output.
    #[inline]
    pub fn new(future: Fut, rule: F) -> Self {
        Self { future, rule: Some(rule) }
    }
}

impl<Fut, F, R> Future for Settle<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> R,
{
    type Output = R;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|output| {
            let rule = this.rule.take().expect("Settle polled after completion; this is a bug");
            rule(output)
        })
    }
}

impl<Fut, F, R> FusedFuture for Settle<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> R,
{
    fn is_terminated(&self) -> bool {
        self.rule.is_none()
    }
}
