use crate::text::{CharParser, char, digit, letter, string};
use crate::{Parser, SourcePos, any, current_offset, current_pos};

#[test]
fn current_pos_tracks_lines() {
    let pos = string("ab\nc").then(current_pos()).parse_str("ab\ncd");

    assert_eq!(pos, Ok(SourcePos::new(2, 2)));
}

#[test]
fn current_pos_counts_tabs() {
    let pos = any().repeat(2).then(current_pos()).parse_str("\tx");

    assert_eq!(pos, Ok(SourcePos::new(1, 6)));
}

#[test]
fn current_offset_counts_tokens() {
    let offset = letter().many().then(current_offset()).parse_str("abc1");

    assert_eq!(offset, Ok(3));
}

#[test]
fn error_position_after_newlines() {
    let lines = letter().at_least_once().separated(char('\n')).before(crate::end());

    insta::assert_snapshot!(
        lines.parse_str("ab\ncd\ne1").unwrap_err(),
        @"error at line 3, col 2: unexpected '1'; expected end of input"
    );
}

#[test]
fn with_span_reports_consumed_range() {
    let word = char(' ').then(letter().at_least_once().with_span());

    assert_eq!(word.parse_str(" abc1"), Ok((vec!['a', 'b', 'c'], 1..4)));
}

#[test]
fn labelled_replaces_expecteds() {
    let identifier = letter().or(char('_')).labelled("identifier");

    insta::assert_snapshot!(
        identifier.parse_str("1").unwrap_err(),
        @"error at line 1, col 1: unexpected '1'; expected identifier"
    );
}

#[test]
fn labelled_keeps_committed_detail() {
    let pair = letter().then(digit()).labelled("pair");

    insta::assert_snapshot!(
        pair.parse_str("ab").unwrap_err(),
        @"error at line 1, col 2: unexpected 'b'; expected digit"
    );
}

#[test]
fn labelled_keeps_deeper_rewound_detail() {
    let thing = string("ab").attempt().labelled("thing");

    insta::assert_snapshot!(
        thing.parse_str("ax").unwrap_err(),
        @r#"error at line 1, col 2: unexpected 'x'; expected "ab""#
    );
}
