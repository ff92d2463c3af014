use value_rail::{transpose_into_std, Fallible, Maybe};

#[test]
fn option_round_trip() {
    for option in [Some(5), None] {
        let maybe: Maybe<i32> = option.into();
        let back: Option<i32> = maybe.into();
        assert_eq!(back, option);
    }
}

#[test]
fn result_round_trip() {
    for result in [Ok(5), Err("e")] {
        let fallible: Fallible<i32, &str> = result.into();
        assert_eq!(fallible.into_result(), result);
    }
}

#[test]
fn question_mark_through_into_result() {
    fn halve(n: i32) -> Result<i32, &'static str> {
        let checked: Fallible<i32, &str> =
            if n % 2 == 0 { Fallible::Ok(n / 2) } else { Fallible::Err("odd") };
        let half = checked.into_result()?;
        Ok(half)
    }

    assert_eq!(halve(8), Ok(4));
    assert_eq!(halve(7), Err("odd"));
}

#[test]
fn transpose_into_std_types() {
    assert_eq!(transpose_into_std(Maybe::some(Fallible::<i32, &str>::Ok(1))), Ok(Some(1)));
    assert_eq!(transpose_into_std(Maybe::some(Fallible::<i32, &str>::Err("e"))), Err("e"));
    assert_eq!(transpose_into_std(Maybe::<Fallible<i32, &str>>::none()), Ok(None));
}
