use std::cell::Cell;

use value_rail::{guarded, guarded_result, ErrorKind, Fallible};

#[test]
fn completed_closures_become_ok() {
    assert_eq!(guarded(|| "done"), Fallible::Ok("done"));
}

#[test]
fn panics_are_captured_as_exceptions() {
    let reached = Cell::new(false);
    let caught = guarded(|| -> u32 {
        panic!("lost connection to {}", "db-1");
    });
    reached.set(true);

    let err = caught.unwrap_err();
    assert!(reached.get());
    assert!(matches!(err.kind(), ErrorKind::Exception(fault) if fault.is_panic()));
    assert_eq!(err.fault().map(|f| f.message()), Some("lost connection to db-1".to_string()));
    assert_eq!(err.to_string(), "panic: lost connection to db-1");
}

#[test]
fn non_string_panic_payloads_are_still_captured() {
    let caught = guarded(|| std::panic::panic_any(7_u64));
    let err: value_rail::Error = caught.unwrap_err();
    assert_eq!(err.fault().map(|f| f.message()), Some("unknown panic".to_string()));
}

#[test]
fn captured_panics_accept_context() {
    let err = guarded(|| -> u8 { panic!("overflow") })
        .add_context("compacting segment 4")
        .unwrap_err();
    assert_eq!(err.to_string(), "panic: overflow\n└── compacting segment 4");
}

#[test]
fn guarded_result_maps_returned_errors() {
    assert_eq!(guarded_result(|| "42".parse::<u32>()), Fallible::Ok(42));

    let err = guarded_result(|| "-1".parse::<u32>()).unwrap_err();
    assert!(err.is_exception());
    assert!(err.fault().is_some_and(|f| !f.is_panic()));
}

#[test]
fn guarded_result_captures_panics_too() {
    let err = guarded_result(|| -> Result<u8, std::num::ParseIntError> { panic!("bad state") })
        .unwrap_err();
    assert!(err.fault().is_some_and(|f| f.is_panic()));
}
