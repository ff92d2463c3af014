//! Tests for `FutureMaybeExt`.

use std::future::ready;
use std::sync::atomic::{AtomicU32, Ordering};

use value_rail::prelude_async::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TestData {
    value: i32,
}

async fn data(value: i32) -> Maybe<TestData> {
    Maybe::some(TestData { value })
}

async fn nothing() -> Maybe<TestData> {
    Maybe::none()
}

#[test]
fn settle_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<Settle<std::future::Ready<Maybe<i32>>, fn(Maybe<i32>) -> bool>>();
    assert_sync::<Settle<std::future::Ready<Maybe<i32>>, fn(Maybe<i32>) -> bool>>();
}

#[tokio::test]
async fn chains_are_built_before_awaiting() {
    let port = ready(Maybe::some("8080"))
        .and_then(|raw| Maybe::from(raw.parse::<u16>().ok()))
        .filter(|port| *port > 1024)
        .unwrap_or(3000)
        .await;
    assert_eq!(port, 8080);
}

#[tokio::test]
async fn rules_run_once_after_resolution() {
    let calls = AtomicU32::new(0);

    let deferred = data(5).map(|d| {
        calls.fetch_add(1, Ordering::SeqCst);
        d.value * 2
    });
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(deferred.await, Maybe::some(10));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn deferred_scenario_matches_the_sync_results() {
    let compare = TestData { value: 6 };

    assert!(data(5).await < Maybe::some(compare));
    assert_eq!(data(5).zip_with(Maybe::some(compare), |a, b| a.value + b.value).await, Maybe::some(11));
    assert_eq!(nothing().filter(|_| false).await, Maybe::none());
    assert_eq!(data(5).filter(|_| false).await, Maybe::none());
    assert_eq!(data(5).filter(|_| true).await, Maybe::some(TestData { value: 5 }));
}

#[tokio::test]
async fn predicates_and_conversions() {
    assert!(data(1).is_some().await);
    assert!(nothing().is_none().await);
    assert_eq!(data(1).ok_or("missing").await, Fallible::Ok(TestData { value: 1 }));
    assert_eq!(nothing().ok_or_else(|| "missing").await, Fallible::Err("missing"));
    assert_eq!(nothing().ok_or_else_async(|| ready("missing")).await, Fallible::<TestData, _>::Err("missing"));
}

#[tokio::test]
async fn alternatives() {
    let other = TestData { value: 9 };
    assert_eq!(nothing().or(Maybe::some(other)).await, Maybe::some(other));
    assert_eq!(nothing().or_else(|| Maybe::some(other)).await, Maybe::some(other));
    assert_eq!(data(1).xor(Maybe::some(other)).await, Maybe::none());
    assert_eq!(nothing().xor(Maybe::some(other)).await, Maybe::some(other));
    assert_eq!(data(1).and(Maybe::some("next")).await, Maybe::some("next"));
}

#[tokio::test]
async fn unwrapping() {
    assert_eq!(data(2).unwrap().await, TestData { value: 2 });
    assert_eq!(data(2).expect("present").await.value, 2);
    assert_eq!(ready(Maybe::<u8>::none()).unwrap_or_default().await, 0);
    assert_eq!(nothing().unwrap_or_else(|| TestData { value: -1 }).await.value, -1);
    assert_eq!(nothing().unwrap_or_else_async(|| ready(TestData { value: -2 })).await.value, -2);
}

#[tokio::test]
#[should_panic(expected = "settings were never loaded")]
async fn deferred_expect_panics_with_the_message() {
    nothing().expect("settings were never loaded").await;
}

#[tokio::test]
async fn map_or_applies_the_mapper_to_the_default() {
    let fallback = TestData { value: 10 };
    assert_eq!(nothing().map_or(fallback, |d| d.value * 3).await, Maybe::some(30));
    assert_eq!(nothing().map_or_else(|| fallback, |d| d.value + 1).await, Maybe::some(11));
    assert_eq!(nothing().map_or_async(fallback, |d| ready(d.value)).await, Maybe::some(10));
}

#[tokio::test]
async fn nested_shapes() {
    assert_eq!(ready(Maybe::some(Maybe::some(3))).flatten().await, Maybe::some(3));
    assert_eq!(ready(Maybe::some(Maybe::<i32>::none())).flatten().await, Maybe::none());
    assert_eq!(ready(Maybe::some((1, 'a'))).unzip().await, (Maybe::some(1), Maybe::some('a')));
    assert_eq!(
        ready(Maybe::some(Fallible::<i32, &str>::Err("e"))).transpose().await,
        Fallible::Err("e")
    );
    assert_eq!(ready(Maybe::some(1)).zip(Maybe::some(2)).await, Maybe::some((1, 2)));
}

#[tokio::test]
async fn async_callbacks_on_deferred_values() {
    async fn double(d: TestData) -> i32 {
        d.value * 2
    }

    assert_eq!(data(4).map_async(double).await, Maybe::some(8));
    assert_eq!(
        data(4).and_then_async(|d| async move { Maybe::some(d.value + 1) }).await,
        Maybe::some(5)
    );
    assert_eq!(data(4).flat_map(|d| Maybe::some(d.value)).await, Maybe::some(4));
    assert_eq!(data(4).filter_async(|d| ready(d.value > 10)).await, Maybe::none());
    assert_eq!(
        data(4).match_with_async(|d| ready(d.value), || ready(0)).await,
        4
    );
    assert_eq!(
        data(4).zip_with_async(Maybe::some(1), |d, n| ready(d.value + n)).await,
        Maybe::some(5)
    );
    assert_eq!(nothing().or_else_async(|| data(7)).await, Maybe::some(TestData { value: 7 }));
}

#[tokio::test]
async fn inspect_does_not_change_the_value() {
    let seen = AtomicU32::new(0);
    let inspected = data(3)
        .inspect(|d| seen.store(d.value as u32, Ordering::SeqCst))
        .inspect_async(|d| {
            seen.fetch_add(d.value as u32, Ordering::SeqCst);
            ready(())
        })
        .await;
    assert_eq!(inspected, Maybe::some(TestData { value: 3 }));
    assert_eq!(seen.load(Ordering::SeqCst), 6);
}

#[tokio::test]
async fn match_with_dispatches_after_resolution() {
    let label = nothing().match_with(|d| d.value.to_string(), || "empty".to_string()).await;
    assert_eq!(label, "empty");
}
