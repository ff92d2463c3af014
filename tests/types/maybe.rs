use std::cell::Cell;
use std::cmp::Ordering;

use value_rail::{Fallible, Maybe};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TestData {
    value: i32,
}

const DATA: TestData = TestData { value: 5 };
const COMPARE: TestData = TestData { value: 6 };

#[test]
fn exactly_one_of_is_some_and_is_none_holds() {
    for maybe in [Maybe::some(1), Maybe::none()] {
        assert_ne!(maybe.is_some(), maybe.is_none());
    }
    assert!(Maybe::some(0).is_some());
    assert!(Maybe::<i32>::none().is_none());
}

#[test]
fn some_of_zero_like_values_is_still_some() {
    assert!(Maybe::some(()).is_some());
    assert!(Maybe::some(Option::<i32>::None).is_some());
    assert!(Maybe::some(Maybe::<i32>::None).is_some());
}

#[test]
fn default_is_none() {
    assert_eq!(Maybe::<String>::default(), Maybe::None);
}

#[test]
fn none_orders_below_every_some() {
    assert_eq!(Maybe::<i32>::none().cmp(&Maybe::some(i32::MIN)), Ordering::Less);
    assert_eq!(Maybe::some(i32::MIN).cmp(&Maybe::none()), Ordering::Greater);
    assert_eq!(Maybe::<i32>::none().cmp(&Maybe::none()), Ordering::Equal);
}

#[test]
fn some_values_order_by_payload() {
    assert!(Maybe::some(DATA) < Maybe::some(COMPARE));
    assert_eq!(Maybe::some(5).cmp(&Maybe::some(6)), Ordering::Less);
    assert_eq!(Maybe::some(6).cmp(&Maybe::some(6)), Ordering::Equal);
}

#[test]
fn cmp_variant_ignores_payloads() {
    #[derive(Debug)]
    struct Opaque;

    assert_eq!(Maybe::some(Opaque).cmp_variant(&Maybe::some(Opaque)), Ordering::Equal);
    assert_eq!(Maybe::<Opaque>::none().cmp_variant(&Maybe::some(Opaque)), Ordering::Less);
    assert_eq!(Maybe::some(Opaque).cmp_variant(&Maybe::<u8>::none()), Ordering::Greater);
}

#[test]
fn zip_with_combines_both_values() {
    let sum = Maybe::some(DATA).zip_with(Maybe::some(COMPARE), |a, b| a.value + b.value);
    assert_eq!(sum, Maybe::some(11));
}

#[test]
fn zip_with_skips_the_function_when_either_side_is_none() {
    let called = Cell::new(false);
    let left = Maybe::<TestData>::none().zip_with(Maybe::some(COMPARE), |a, b| {
        called.set(true);
        a.value + b.value
    });
    let right = Maybe::some(DATA).zip_with(Maybe::<TestData>::none(), |a, b| {
        called.set(true);
        a.value + b.value
    });

    assert_eq!(left, Maybe::none());
    assert_eq!(right, Maybe::none());
    assert!(!called.get());
}

#[test]
fn zip_pairs_only_present_values() {
    assert_eq!(Maybe::some(1).zip(Maybe::some("b")), Maybe::some((1, "b")));
    assert_eq!(Maybe::some(1).zip(Maybe::<&str>::none()), Maybe::none());
    assert_eq!(Maybe::<i32>::none().zip(Maybe::some("b")), Maybe::none());
}

#[test]
fn unzip_splits_pairs() {
    assert_eq!(Maybe::some((1, 'x')).unzip(), (Maybe::some(1), Maybe::some('x')));
    assert_eq!(Maybe::<(i32, char)>::none().unzip(), (Maybe::none(), Maybe::none()));
}

#[test]
fn filter_cases() {
    assert_eq!(Maybe::<TestData>::none().filter(|_| false), Maybe::none());
    assert_eq!(Maybe::some(DATA).filter(|_| false), Maybe::none());
    assert_eq!(Maybe::some(DATA).filter(|_| true), Maybe::some(DATA));
}

#[test]
fn filter_never_calls_the_predicate_on_none() {
    let called = Cell::new(false);
    let _ = Maybe::<i32>::none().filter(|_| {
        called.set(true);
        true
    });
    assert!(!called.get());
}

#[test]
fn ok_or_round_trips_through_fallible() {
    assert_eq!(Maybe::some(3).ok_or("missing").ok(), Maybe::some(3));
    assert_eq!(Maybe::<i32>::none().ok_or("missing").ok(), Maybe::none());
    assert_eq!(Maybe::<i32>::none().ok_or("missing").err(), Maybe::some("missing"));
}

#[test]
fn ok_or_else_is_lazy() {
    let called = Cell::new(false);
    let converted: Fallible<i32, &str> = Maybe::some(1).ok_or_else(|| {
        called.set(true);
        "missing"
    });
    assert_eq!(converted, Fallible::Ok(1));
    assert!(!called.get());
}

#[test]
fn flatten_removes_one_level() {
    assert_eq!(Maybe::some(Maybe::some(4)).flatten(), Maybe::some(4));
    assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::none());
    assert_eq!(Maybe::<Maybe<i32>>::none().flatten(), Maybe::none());
}

#[test]
fn xor_keeps_exactly_one_present_value() {
    assert_eq!(Maybe::some(1).xor(Maybe::none()), Maybe::some(1));
    assert_eq!(Maybe::none().xor(Maybe::some(2)), Maybe::some(2));
    assert_eq!(Maybe::some(1).xor(Maybe::some(2)), Maybe::none());
    assert_eq!(Maybe::<i32>::none().xor(Maybe::none()), Maybe::none());
}

#[test]
fn inspect_leaves_the_value_unchanged() {
    let seen = Cell::new(0);
    let original = Maybe::some(DATA);

    let inspected = original.inspect(|d| seen.set(d.value));
    assert_eq!(inspected, original);
    assert_eq!(seen.get(), 5);

    let none = Maybe::<TestData>::none().inspect(|d| seen.set(d.value * 10));
    assert_eq!(none, Maybe::none());
    assert_eq!(seen.get(), 5);
}

#[test]
fn map_or_feeds_the_default_through_the_mapper() {
    assert_eq!(Maybe::some(2).map_or(10, |n| n * 3), Maybe::some(6));
    assert_eq!(Maybe::none().map_or(10, |n: i32| n * 3), Maybe::some(30));
}

#[test]
fn map_or_else_only_builds_the_default_on_none() {
    let built = Cell::new(0);
    let present = Maybe::some(2).map_or_else(
        || {
            built.set(built.get() + 1);
            10
        },
        |n| n + 1,
    );
    let absent = Maybe::none().map_or_else(
        || {
            built.set(built.get() + 1);
            10
        },
        |n: i32| n + 1,
    );

    assert_eq!(present, Maybe::some(3));
    assert_eq!(absent, Maybe::some(11));
    assert_eq!(built.get(), 1);
}

#[test]
fn and_then_and_flat_map_agree() {
    let half = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };

    for input in [Maybe::some(8), Maybe::some(7), Maybe::none()] {
        assert_eq!(input.and_then(half), input.flat_map(half));
    }
    assert_eq!(Maybe::some(8).and_then(half), Maybe::some(4));
}

#[test]
fn and_or_select_the_expected_side() {
    assert_eq!(Maybe::some(1).and(Maybe::some("x")), Maybe::some("x"));
    assert_eq!(Maybe::<i32>::none().and(Maybe::some("x")), Maybe::none());
    assert_eq!(Maybe::some(1).or(Maybe::some(2)), Maybe::some(1));
    assert_eq!(Maybe::none().or(Maybe::some(2)), Maybe::some(2));
    assert_eq!(Maybe::none().or_else(|| Maybe::some(3)), Maybe::some(3));
}

#[test]
fn unwrap_family() {
    assert_eq!(Maybe::some(4).unwrap(), 4);
    assert_eq!(Maybe::none().unwrap_or(9), 9);
    assert_eq!(Maybe::<u32>::none().unwrap_or_default(), 0);
    assert_eq!(Maybe::<String>::none().unwrap_or_default(), "");
    assert_eq!(Maybe::none().unwrap_or_else(|| 12), 12);
}

#[test]
#[should_panic(expected = "called `Maybe::unwrap()` on a `None` value")]
fn unwrap_on_none_panics() {
    Maybe::<i32>::none().unwrap();
}

#[test]
fn expect_panics_with_exactly_the_message() {
    let caught = std::panic::catch_unwind(|| Maybe::<i32>::none().expect("config must be loaded"));
    let payload = caught.unwrap_err();
    assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("config must be loaded"));
}

#[test]
fn match_with_dispatches_to_one_branch() {
    let some = Maybe::some(2).match_with(|n| n * 100, || -1);
    let none = Maybe::<i32>::none().match_with(|n| n * 100, || -1);
    assert_eq!(some, 200);
    assert_eq!(none, -1);
}

#[test]
fn transpose_moves_the_error_outward() {
    assert_eq!(Maybe::some(Fallible::<i32, &str>::Ok(1)).transpose(), Fallible::Ok(Maybe::some(1)));
    assert_eq!(Maybe::some(Fallible::<i32, &str>::Err("e")).transpose(), Fallible::Err("e"));
    assert_eq!(Maybe::<Fallible<i32, &str>>::none().transpose(), Fallible::Ok(Maybe::none()));
}

#[test]
fn display_renders_variant_and_payload() {
    assert_eq!(Maybe::some(5).to_string(), "Some(5)");
    assert_eq!(Maybe::<i32>::none().to_string(), "None");
}

#[test]
fn iterates_over_zero_or_one_items() {
    assert_eq!(Maybe::some(3).iter().collect::<Vec<_>>(), vec![&3]);
    assert_eq!(Maybe::<i32>::none().into_iter().len(), 0);

    let collected: Maybe<Vec<i32>> = vec![Maybe::some(1), Maybe::some(2)].into_iter().collect();
    assert_eq!(collected, Maybe::some(vec![1, 2]));

    let short: Maybe<Vec<i32>> = vec![Maybe::some(1), Maybe::none()].into_iter().collect();
    assert_eq!(short, Maybe::none());
}
