//! Tests for `guarded_async` and `GuardedFuture`.

use std::time::Duration;

use futures_core::future::FusedFuture;
use value_rail::prelude_async::*;

#[tokio::test]
async fn completed_futures_become_ok() {
    assert_eq!(guarded_async(|| async { 7 }).await, Fallible::Ok(7));
}

#[tokio::test]
async fn panics_while_polling_are_captured() {
    let caught = guarded_async(|| async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        if true {
            panic!("worker {} crashed", 3);
        }
        0_u8
    })
    .await;

    let err = caught.unwrap_err();
    assert!(err.is_exception());
    assert_eq!(err.to_string(), "panic: worker 3 crashed");
}

#[tokio::test]
async fn panics_before_the_future_exists_are_captured() {
    fn build() -> std::future::Ready<u8> {
        panic!("could not build request");
    }

    let err = guarded_async(build).await.unwrap_err();
    assert_eq!(err.fault().map(|f| f.message()), Some("could not build request".to_string()));
}

#[tokio::test]
async fn captured_errors_compose_with_context() {
    let err = guarded_async::<u8, _, _>(|| async { panic!("index out of range") })
        .add_context("reindexing shard")
        .await
        .unwrap_err();
    assert_eq!(err.root_cause(), Some("reindexing shard"));
}

#[tokio::test]
async fn guarded_future_is_fused() {
    let mut guarded = Box::pin(GuardedFuture::new(async { 1 }));
    assert!(!guarded.is_terminated());
    assert_eq!(guarded.as_mut().await, Fallible::Ok(1));
    assert!(guarded.is_terminated());
}
