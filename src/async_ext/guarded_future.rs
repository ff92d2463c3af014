//! Panic capture for futures.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{catch_unwind, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::guard::guarded;
use crate::types::{Error, Fallible, Fault};

pin_project! {
    /// Polls the inner future, turning a panic during any poll into an
    /// exception error.
    ///
    /// After a panic the inner future is never polled again.
    #[must_use = "futures do nothing unless polled"]
    pub struct GuardedFuture<Fut> {
        #[pin]
        future: Fut,
        finished: bool,
    }
}

impl<Fut> GuardedFuture<Fut> {
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future, finished: false }
    }
}

impl<Fut> Future for GuardedFuture<Fut>
where
    Fut: Future,
{
    type Output = Fallible<Fut::Output, Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(!*this.finished, "GuardedFuture polled after completion");

        let future = this.future;
        match catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(value)) => {
                *this.finished = true;
                Poll::Ready(Fallible::Ok(value))
            },
            Err(payload) => {
                *this.finished = true;
                Poll::Ready(Fallible::Err(Error::exception(Fault::from_panic_payload(payload))))
            },
        }
    }
}

impl<Fut> FusedFuture for GuardedFuture<Fut>
where
    Fut: Future,
{
    fn is_terminated(&self) -> bool {
        self.finished
    }
}

/// Runs `f` and awaits the future it returns, converting a panic in either
/// step into an exception error.
///
/// # Examples
///
/// ```rust
/// use value_rail::prelude_async::*;
///
/// async fn example() {
///     let ok = guarded_async(|| async { 7 }).await;
///     assert_eq!(ok, Fallible::Ok(7));
///
///     let caught = guarded_async::<u8, _, _>(|| async { panic!("worker crashed") }).await;
///     let error: Error = caught.unwrap_err();
///     assert!(error.is_exception());
/// }
/// ```
pub async fn guarded_async<T, F, Fut>(f: F) -> Fallible<T, Error>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    match guarded(f) {
        Fallible::Ok(future) => GuardedFuture::new(future).await,
        Fallible::Err(error) => Fallible::Err(error),
    }
}
