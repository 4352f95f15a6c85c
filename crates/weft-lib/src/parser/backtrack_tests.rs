use crate::text::{CharParser, char, digit, letter, letter_or_digit, string};
use crate::{Expected, ExpectedCollector, ParseState, Parser, any, end, ret};

#[test]
fn attempt_rewinds_on_failure() {
    let input: Vec<char> = "ax".chars().collect();
    let mut state = ParseState::new(&input);
    let mut expecteds = ExpectedCollector::new();

    let result = string("ab").attempt().parse_into(&mut state, &mut expecteds);

    assert!(result.is_none());
    assert_eq!(state.location(), 0);
    // The error still points at the mismatch.
    assert_eq!(state.error().map(|e| e.location), Some(1));
    assert_eq!(expecteds.at(1).count(), 1);
}

#[test]
fn attempt_is_transparent_on_success() {
    assert_eq!(letter().attempt().then(digit()).parse_str("a1"), Ok('1'));
}

#[test]
fn lookahead_does_not_consume() {
    let peeked = letter().lookahead().and(any());

    assert_eq!(peeked.parse_str("q"), Ok(('q', 'q')));
}

#[test]
fn lookahead_failure_after_consumption_is_committed() {
    let parser = string("ab").lookahead().map(|_| 1).or(ret(2));

    assert_eq!(parser.parse_str("ab"), Ok(1));
    assert_eq!(parser.parse_str("x"), Ok(2));
    insta::assert_snapshot!(
        parser.parse_str("ac").unwrap_err(),
        @r#"error at line 1, col 2: unexpected 'c'; expected "ab""#
    );
}

#[test]
fn not_succeeds_when_inner_fails() {
    let non_digit = digit().not().then(any());

    assert_eq!(non_digit.parse_str("b"), Ok('b'));
    insta::assert_snapshot!(
        non_digit.parse_str("4").unwrap_err(),
        @"error at line 1, col 1: unexpected '4'"
    );
}

#[test]
fn not_never_consumes() {
    let input: Vec<char> = "abc".chars().collect();
    let mut state = ParseState::new(&input);
    let mut expecteds = ExpectedCollector::new();

    let failed = string("abc").not().parse_into(&mut state, &mut expecteds);
    assert_eq!(failed, None);
    assert_eq!(state.location(), 0);
    assert_eq!(expecteds.len(), 1);
    assert!(expecteds.at(0).all(Expected::is_nothing));

    let passed = string("abd").not().parse_into(&mut state, &mut expecteds);
    assert_eq!(passed, Some(()));
    assert_eq!(state.location(), 0);
    assert_eq!(expecteds.len(), 1);
}

#[test]
fn not_at_end_of_input() {
    insta::assert_snapshot!(
        end::<char>().not().parse_str("").unwrap_err(),
        @"error at line 1, col 1: unexpected end of input"
    );
}

#[test]
fn keyword_not_followed_by_identifier_char() {
    let keyword = string("if").then(letter_or_digit().not()).attempt();
    let identifier = letter().at_least_once().recognize_string();
    let token = keyword.map(|_| "<if>".to_string()).or(identifier);

    assert_eq!(token.parse_str("if"), Ok("<if>".to_string()));
    assert_eq!(token.parse_str("iffy"), Ok("iffy".to_string()));
    assert_eq!(char('x').then(token).parse_str("xif("), Ok("<if>".to_string()));
}
