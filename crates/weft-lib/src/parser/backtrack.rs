//! Cursor rewinding: `Try`, lookahead, negative lookahead.

use weft_core::Token;

use super::Parser;
use crate::error::{Expected, ExpectedCollector, InternalError};
use crate::state::ParseState;

/// On failure, rewinds to where the parser started so that alternation can
/// try other branches. The error and its expecteds are kept.
#[derive(Clone)]
pub struct Try<P> {
    pub(super) inner: P,
}

impl<T: Token, P: Parser<T>> Parser<T> for Try<P> {
    type Output = P::Output;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<P::Output> {
        let bookmark = state.bookmark();
        let result = self.inner.parse_into(state, expecteds);
        if result.is_none() {
            state.rewind(bookmark);
        }
        result
    }
}

/// Rewinds after success. A failure after consuming stays committed.
#[derive(Clone)]
pub struct Lookahead<P> {
    pub(super) inner: P,
}

impl<T: Token, P: Parser<T>> Parser<T> for Lookahead<P> {
    type Output = P::Output;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<P::Output> {
        let bookmark = state.bookmark();
        let value = self.inner.parse_into(state, expecteds)?;
        state.rewind(bookmark);
        Some(value)
    }
}

/// Succeeds without consuming when the inner parser fails; fails with the
/// token at the start position when it succeeds.
#[derive(Clone)]
pub struct Not<P> {
    pub(super) inner: P,
}

impl<T: Token, P: Parser<T>> Parser<T> for Not<P> {
    type Output = ();

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<()> {
        let bookmark = state.bookmark();
        let mark = expecteds.mark();
        let outcome = self.inner.parse_into(state, expecteds);
        if state.is_aborted() {
            return None;
        }
        state.rewind(bookmark);
        expecteds.truncate(mark);
        match outcome {
            Some(_) => {
                let found = state.peek().cloned();
                state.set_error(InternalError::mismatch(found, bookmark.location()));
                expecteds.push(bookmark.location(), Expected::nothing());
                None
            }
            None => {
                state.take_error();
                Some(())
            }
        }
    }
}
