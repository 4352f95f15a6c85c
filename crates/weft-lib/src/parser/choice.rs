//! Alternation.
//!
//! A branch that fails without consuming input lets the next branch run at
//! the same cursor. A branch that fails after consuming is committed: the
//! alternation fails with that branch's error. When every branch fails, the
//! deepest error survives and expecteds recorded at shallower locations are
//! dropped; expecteds at the same location are merged. When a later branch
//! succeeds, an earlier failure that got past the cursor is kept aside by
//! [`ParseState::discard_failure`] for the final diagnostic.

use weft_core::Token;

use super::{BoxedParser, Parser};
use crate::error::{Expected, ExpectedCollector};
use crate::state::ParseState;

#[derive(Clone)]
pub struct Or<P, Q> {
    pub(super) left: P,
    pub(super) right: Q,
}

impl<T, P, Q> Parser<T> for Or<P, Q>
where
    T: Token,
    P: Parser<T>,
    Q: Parser<T, Output = P::Output>,
{
    type Output = P::Output;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<P::Output> {
        let start = state.location();
        let mark = expecteds.mark();
        if let Some(value) = self.left.parse_into(state, expecteds) {
            return Some(value);
        }
        if state.location() != start || state.is_aborted() {
            return None;
        }

        let left_error = state.take_error();
        state.trace_alternative();
        match self.right.parse_into(state, expecteds) {
            Some(value) => {
                state.discard_failure(left_error, expecteds, mark);
                Some(value)
            }
            None => {
                state.keep_deepest_error(left_error, expecteds, mark);
                None
            }
        }
    }
}

/// Alternation over any number of boxed branches, tried in order.
///
/// Runs as a flat loop, so long branch lists do not nest native frames the
/// way a chain of [`Parser::or`] does.
pub struct OneOf<'a, T: Token, O> {
    branches: Vec<BoxedParser<'a, T, O>>,
}

impl<T: Token, O> Clone for OneOf<'_, T, O> {
    fn clone(&self) -> Self {
        Self {
            branches: self.branches.clone(),
        }
    }
}

impl<T: Token, O> Parser<T> for OneOf<'_, T, O> {
    type Output = O;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<O> {
        let start = state.location();
        let mark = expecteds.mark();
        let mut deepest = None;

        for (i, branch) in self.branches.iter().enumerate() {
            if i > 0 {
                state.trace_alternative();
            }
            if let Some(value) = branch.parse_into(state, expecteds) {
                state.discard_failure(deepest.take(), expecteds, mark);
                return Some(value);
            }
            state.keep_deepest_error(deepest.take(), expecteds, mark);
            if state.location() != start || state.is_aborted() {
                return None;
            }
            deepest = state.take_error();
        }

        match deepest {
            Some(error) => state.set_error(error),
            // No branches: nothing could have matched here.
            None => state.fail_expecting(&Expected::nothing(), expecteds),
        }
        None
    }
}

pub fn one_of<'a, T: Token, O>(branches: Vec<BoxedParser<'a, T, O>>) -> OneOf<'a, T, O> {
    OneOf { branches }
}
