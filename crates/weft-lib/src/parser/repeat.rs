//! Repetition.
//!
//! Every repetition is an explicit loop, so the native stack does not grow
//! with the number of iterations. An iteration that fails without consuming
//! ends the repetition; one that fails after consuming fails it.

use weft_core::Token;

use super::Parser;
use super::invariants::ensure_progress;
use crate::error::ExpectedCollector;
use crate::state::ParseState;

/// Runs `inner` until it fails without consuming, handing each value to
/// `sink`. Returns `None` when an iteration fails after consuming (or the
/// parse aborts).
fn drive<T, P>(
    combinator: &str,
    inner: &P,
    state: &mut ParseState<'_, T>,
    expecteds: &mut ExpectedCollector<T>,
    mut sink: impl FnMut(P::Output),
) -> Option<()>
where
    T: Token,
    P: Parser<T>,
{
    loop {
        let start = state.location();
        let mark = expecteds.mark();
        match inner.parse_into(state, expecteds) {
            Some(value) => {
                ensure_progress(combinator, start, state.location());
                sink(value);
            }
            None if state.location() == start && !state.is_aborted() => {
                state.recover(expecteds, mark);
                return Some(());
            }
            None => return None,
        }
    }
}

#[derive(Clone)]
pub struct Many<P> {
    pub(super) inner: P,
}

impl<T: Token, P: Parser<T>> Parser<T> for Many<P> {
    type Output = Vec<P::Output>;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<Self::Output> {
        let mut items = Vec::new();
        drive("many", &self.inner, state, expecteds, |item| items.push(item))?;
        Some(items)
    }
}

#[derive(Clone)]
pub struct AtLeastOnce<P> {
    pub(super) inner: P,
}

impl<T: Token, P: Parser<T>> Parser<T> for AtLeastOnce<P> {
    type Output = Vec<P::Output>;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<Self::Output> {
        let start = state.location();
        let first = self.inner.parse_into(state, expecteds)?;
        ensure_progress("at_least_once", start, state.location());
        let mut items = vec![first];
        drive("at_least_once", &self.inner, state, expecteds, |item| {
            items.push(item)
        })?;
        Some(items)
    }
}

/// Like [`Many`], discarding the values.
#[derive(Clone)]
pub struct SkipMany<P> {
    pub(super) inner: P,
}

impl<T: Token, P: Parser<T>> Parser<T> for SkipMany<P> {
    type Output = ();

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<()> {
        drive("skip_many", &self.inner, state, expecteds, drop)
    }
}

#[derive(Clone)]
pub struct Repeat<P> {
    pub(super) inner: P,
    pub(super) count: usize,
}

impl<T: Token, P: Parser<T>> Parser<T> for Repeat<P> {
    type Output = Vec<P::Output>;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<Self::Output> {
        let mut items = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            items.push(self.inner.parse_into(state, expecteds)?);
        }
        Some(items)
    }
}

#[derive(Clone)]
pub struct Optional<P> {
    pub(super) inner: P,
}

impl<T: Token, P: Parser<T>> Parser<T> for Optional<P> {
    type Output = Option<P::Output>;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<Self::Output> {
        let start = state.location();
        let mark = expecteds.mark();
        match self.inner.parse_into(state, expecteds) {
            Some(value) => Some(Some(value)),
            None if state.location() == start && !state.is_aborted() => {
                state.recover(expecteds, mark);
                Some(None)
            }
            None => None,
        }
    }
}

#[derive(Clone)]
pub struct Separated<P, S> {
    pub(super) item: P,
    pub(super) separator: S,
    pub(super) at_least_once: bool,
}

impl<T, P, S> Parser<T> for Separated<P, S>
where
    T: Token,
    P: Parser<T>,
    S: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<Self::Output> {
        let mut items = Vec::new();

        let start = state.location();
        let mark = expecteds.mark();
        match self.item.parse_into(state, expecteds) {
            Some(item) => items.push(item),
            None if !self.at_least_once
                && state.location() == start
                && !state.is_aborted() =>
            {
                state.recover(expecteds, mark);
                return Some(items);
            }
            None => return None,
        }

        loop {
            let before_separator = state.location();
            let mark = expecteds.mark();
            match self.separator.parse_into(state, expecteds) {
                Some(_) => {}
                None if state.location() == before_separator && !state.is_aborted() => {
                    state.recover(expecteds, mark);
                    return Some(items);
                }
                None => return None,
            }
            items.push(self.item.parse_into(state, expecteds)?);
            ensure_progress("separated", before_separator, state.location());
        }
    }
}
