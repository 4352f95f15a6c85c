use crate::text::{CharParser, char, digit, letter};
use crate::{Expected, ExpectedCollector, ParseErrorKind, ParseState, Parser, any};

#[test]
fn map_transforms_value() {
    let value = digit().map(|d| d.to_digit(10).unwrap_or(0) * 2);

    assert_eq!(value.parse_str("4"), Ok(8));
}

#[test]
fn then_before_and() {
    assert_eq!(letter().then(digit()).parse_str("a1"), Ok('1'));
    assert_eq!(letter().before(digit()).parse_str("a1"), Ok('a'));
    assert_eq!(letter().and(digit()).parse_str("a1"), Ok(('a', '1')));
}

#[test]
fn second_parser_failure_propagates() {
    insta::assert_snapshot!(
        letter().then(digit()).parse_str("ab").unwrap_err(),
        @"error at line 1, col 2: unexpected 'b'; expected digit"
    );
}

#[test]
fn then_with_combines() {
    let tagged = letter().then_with(digit(), |l, d| format!("{l}{d}"));

    assert_eq!(tagged.parse_str("x9"), Ok("x9".to_string()));
}

#[test]
fn bind_chooses_next_parser_from_value() {
    // A length prefix followed by that many tokens.
    let counted = digit().bind(|d| any().repeat(d.to_digit(10).unwrap_or(0) as usize));

    assert_eq!(counted.parse_str("3abcd"), Ok(vec!['a', 'b', 'c']));
    assert_eq!(counted.parse_str("0abcd"), Ok(vec![]));
    insta::assert_snapshot!(
        counted.parse_str("3ab").unwrap_err(),
        @"error at line 1, col 4: unexpected end of input; expected any token"
    );
}

#[test]
fn between_delimiters() {
    let wrapped = letter().between(char('('), char(')'));

    assert_eq!(wrapped.parse_str("(x)"), Ok('x'));
    insta::assert_snapshot!(
        wrapped.parse_str("(x").unwrap_err(),
        @"error at line 1, col 3: unexpected end of input; expected ')'"
    );
}

#[test]
fn assert_reports_after_value() {
    let short = digit()
        .at_least_once()
        .recognize_string()
        .assert(|s| s.len() <= 2, "too many digits");

    assert_eq!(short.parse_str("12"), Ok("12".to_string()));

    let err = char(' ').then(short).parse_str(" 123").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::Custom);
    insta::assert_snapshot!(err, @"error at line 1, col 5: too many digits");
}

#[test]
fn try_map_failure_is_custom() {
    let nonzero = digit().try_map(|d| if d == '0' { Err("zero is not allowed") } else { Ok(d) });

    assert_eq!(nonzero.parse_str("5"), Ok('5'));
    insta::assert_snapshot!(
        nonzero.parse_str("0").unwrap_err(),
        @"error at line 1, col 2: zero is not allowed"
    );
}

#[test]
fn semantic_failures_record_an_empty_expected() {
    let input: Vec<char> = "0".chars().collect();
    let checks = [
        digit().assert(|d| *d != '0', "zero").map(drop).boxed(),
        digit()
            .try_map(|d| if d == '0' { Err("zero") } else { Ok(d) })
            .map(drop)
            .boxed(),
    ];

    for check in checks {
        let mut state = ParseState::new(&input);
        let mut expecteds = ExpectedCollector::new();

        assert_eq!(check.parse_into(&mut state, &mut expecteds), None);
        assert_eq!(expecteds.at(1).count(), 1);
        assert!(expecteds.at(1).all(Expected::is_nothing));
    }
}

#[test]
fn recognize_collects_consumed_tokens() {
    let pair = letter().then(digit()).recognize();

    assert_eq!(pair.parse_str("a1b"), Ok(vec!['a', '1']));
}
