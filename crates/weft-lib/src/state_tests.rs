use std::sync::Arc;

use crate::error::{Expected, ExpectedCollector, InternalError};
use crate::{ParseState, SourcePos};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn advance_and_peek() {
    let input = chars("ab");
    let mut state = ParseState::new(&input);

    assert_eq!(state.peek(), Some(&'a'));
    state.advance();
    assert_eq!(state.location(), 1);
    assert_eq!(state.remaining(), &['b']);
    state.advance();
    assert!(state.is_at_end());
    assert_eq!(state.peek(), None);

    state.advance();
    assert_eq!(state.location(), 2);
}

#[test]
fn rewind_to_bookmark() {
    let input = chars("abc");
    let mut state = ParseState::new(&input);
    state.advance();
    let bookmark = state.bookmark();
    state.advance();
    state.advance();

    state.rewind(bookmark);

    assert_eq!(state.location(), 1);
    assert_eq!(bookmark.location(), 1);
}

#[test]
fn source_pos_forward_and_backward() {
    let input = chars("ab\n\tc\nd");
    let mut state = ParseState::new(&input);

    assert_eq!(state.source_pos(0), SourcePos::START);
    assert_eq!(state.source_pos(2), SourcePos::new(1, 3));
    assert_eq!(state.source_pos(4), SourcePos::new(2, 5));
    assert_eq!(state.source_pos(6), SourcePos::new(3, 1));
    // Backwards query restarts from the beginning.
    assert_eq!(state.source_pos(1), SourcePos::new(1, 2));
    // Past the end clamps.
    assert_eq!(state.source_pos(100), SourcePos::new(3, 2));
}

#[test]
fn fail_expecting_records_error_and_expected() {
    let input = chars("x");
    let mut state = ParseState::new(&input);
    let mut expecteds = ExpectedCollector::new();

    state.fail_expecting(&Expected::label("digit"), &mut expecteds);

    assert_eq!(state.error(), Some(&InternalError::mismatch(Some('x'), 0)));
    assert_eq!(expecteds.at(0).count(), 1);
}

#[test]
fn keep_deepest_error_prefers_deeper_other() {
    let input = chars("abcd");
    let mut state = ParseState::new(&input);
    let mut expecteds = ExpectedCollector::new();
    let mark = expecteds.mark();

    expecteds.push(3, Expected::label("deep"));
    expecteds.push(0, Expected::label("shallow"));
    state.set_error(InternalError::mismatch(Some('a'), 0));

    state.keep_deepest_error(
        Some(InternalError::mismatch(Some('d'), 3)),
        &mut expecteds,
        mark,
    );

    assert_eq!(state.error().map(|e| e.location), Some(3));
    assert_eq!(expecteds.len(), 1);
}

#[test]
fn keep_deepest_error_keeps_current_on_tie() {
    let input = chars("ab");
    let mut state = ParseState::new(&input);
    let mut expecteds = ExpectedCollector::new();
    let mark = expecteds.mark();

    expecteds.push(1, Expected::token('x'));
    expecteds.push(1, Expected::token('y'));
    state.set_error(InternalError::custom(1, Arc::from("current")));

    state.keep_deepest_error(
        Some(InternalError::mismatch(Some('b'), 1)),
        &mut expecteds,
        mark,
    );

    assert_eq!(
        state.error().and_then(|e| e.message.as_deref()),
        Some("current")
    );
    assert_eq!(expecteds.len(), 2);
}

#[test]
fn recursion_depth_is_limited() {
    let input = chars("");
    let mut state = ParseState::new(&input).with_limits(crate::Limits {
        recursion_limit: Some(2),
    });

    assert!(state.enter_recursion());
    assert!(state.enter_recursion());
    assert!(state.enter_recursion());
    assert_eq!(state.depth(), 3);
    assert!(!state.is_aborted());

    assert!(!state.enter_recursion());
    assert!(state.is_aborted());

    state.exit_recursion();
    state.exit_recursion();
    state.exit_recursion();
    assert_eq!(state.depth(), 0);
}
