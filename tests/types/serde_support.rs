use value_rail::{Context, Fallible, Maybe};

#[test]
fn maybe_serializes_as_a_tagged_enum() {
    let json = serde_json::to_string(&Maybe::some(3)).unwrap();
    assert_eq!(json, r#"{"Some":3}"#);
    assert_eq!(serde_json::to_string(&Maybe::<i32>::none()).unwrap(), r#""None""#);

    let back: Maybe<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Maybe::some(3));
}

#[test]
fn fallible_with_plain_errors_serializes() {
    let failed: Fallible<u8, String> = Fallible::Err("bad input".to_string());
    let json = serde_json::to_string(&failed).unwrap();
    assert_eq!(json, r#"{"Err":"bad input"}"#);
}

#[test]
fn context_chain_survives_serialization() {
    let ctx = Context::new("root").wrap("outer");
    let json = serde_json::to_string(&ctx).unwrap();
    assert_eq!(json, r#"["outer","root"]"#);
    let back: Context = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ctx);
    assert_eq!(back.root().message(), "root");
}

#[test]
fn empty_context_sequence_is_rejected() {
    assert!(serde_json::from_str::<Context>("[]").is_err());
}
