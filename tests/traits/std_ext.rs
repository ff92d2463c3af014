use std::cell::Cell;
use std::num::ParseIntError;

use value_rail::traits::{IntoContextMessage, OptionExt, ResultExt};
use value_rail::{Fallible, LazyMessage, Maybe};

#[test]
fn option_and_result_move_onto_the_rail() {
    assert_eq!(Some(2).into_maybe(), Maybe::some(2));
    assert_eq!(None::<i32>.into_maybe(), Maybe::none());
    assert_eq!(Ok::<i32, &str>(2).into_fallible(), Fallible::Ok(2));
    assert_eq!(Err::<i32, &str>("e").into_fallible(), Fallible::Err("e"));
}

#[test]
fn ctx_wraps_std_errors_with_one_frame() {
    let err = "abc".parse::<i32>().ctx("parsing worker count").unwrap_err();
    assert!(err.is_exception());
    assert_eq!(err.root_cause(), Some("parsing worker count"));
    assert!(err.to_string().ends_with("└── parsing worker count"));
}

#[test]
fn ctx_keeps_ok_values() {
    assert_eq!("12".parse::<i32>().ctx("unused"), Fallible::Ok(12));
}

#[test]
fn ctx_with_is_lazy_on_ok() {
    let built = Cell::new(false);
    let parsed: Result<u8, ParseIntError> = "7".parse();
    let _ = parsed.ctx_with(|| {
        built.set(true);
        "never".to_string()
    });
    assert!(!built.get());
}

#[test]
fn ctx_with_builds_the_message_on_err() {
    let limit = 255;
    let err = "300".parse::<u8>().ctx_with(|| format!("value above {limit}")).unwrap_err();
    assert_eq!(err.root_cause(), Some("value above 255"));
}

#[test]
fn context_messages_from_each_source() {
    assert_eq!("static".into_context_message(), "static");
    assert_eq!(String::from("owned").into_context_message(), "owned");
    assert_eq!(LazyMessage::new(|| "lazy".to_string()).into_context_message(), "lazy");
}
