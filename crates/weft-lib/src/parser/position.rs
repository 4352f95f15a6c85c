//! Position queries and labelling.

use std::ops::Range;
use std::sync::Arc;

use weft_core::{SourcePos, Token};

use super::Parser;
use crate::error::{Expected, ExpectedCollector};
use crate::state::ParseState;

/// Line and column of the cursor. Consumes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurrentPos;

impl<T: Token> Parser<T> for CurrentPos {
    type Output = SourcePos;

    #[inline]
    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        _: &mut ExpectedCollector<T>,
    ) -> Option<SourcePos> {
        Some(state.current_pos())
    }
}

pub fn current_pos() -> CurrentPos {
    CurrentPos
}

/// Offset of the cursor. Consumes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurrentOffset;

impl<T: Token> Parser<T> for CurrentOffset {
    type Output = usize;

    #[inline]
    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        _: &mut ExpectedCollector<T>,
    ) -> Option<usize> {
        Some(state.location())
    }
}

pub fn current_offset() -> CurrentOffset {
    CurrentOffset
}

#[derive(Clone)]
pub struct WithSpan<P> {
    pub(super) inner: P,
}

impl<T: Token, P: Parser<T>> Parser<T> for WithSpan<P> {
    type Output = (P::Output, Range<usize>);

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<Self::Output> {
        let start = state.location();
        let value = self.inner.parse_into(state, expecteds)?;
        Some((value, start..state.location()))
    }
}

/// Reports a non-consuming failure as "expected `label`" instead of the
/// inner parser's own expecteds. Failures deeper than the start (from
/// inside an `attempt`) keep their detail.
#[derive(Clone)]
pub struct Labelled<P> {
    pub(super) inner: P,
    pub(super) label: Arc<str>,
}

impl<T: Token, P: Parser<T>> Parser<T> for Labelled<P> {
    type Output = P::Output;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<P::Output> {
        let start = state.location();
        let mark = expecteds.mark();
        state.trace_enter(&self.label);
        let result = self.inner.parse_into(state, expecteds);
        state.trace_exit(&self.label, result.is_some());

        let relabel = result.is_none()
            && !state.is_aborted()
            && state.location() == start
            && state.error().is_some_and(|error| error.location == start);
        if relabel {
            expecteds.truncate(mark);
            expecteds.push(start, Expected::Label(Arc::clone(&self.label)));
        }
        result
    }
}
