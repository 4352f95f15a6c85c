//! Sequencing, value mapping, and monadic bind.

use std::sync::Arc;

use weft_core::Token;

use super::Parser;
use crate::error::{Expected, ExpectedCollector};
use crate::state::ParseState;

#[derive(Clone)]
pub struct Map<P, F> {
    pub(super) inner: P,
    pub(super) f: F,
}

impl<T, P, F, U> Parser<T> for Map<P, F>
where
    T: Token,
    P: Parser<T>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    #[inline]
    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<U> {
        self.inner.parse_into(state, expecteds).map(&self.f)
    }
}

#[derive(Clone)]
pub struct TryMap<P, F> {
    pub(super) inner: P,
    pub(super) f: F,
}

impl<T, P, F, U, E> Parser<T> for TryMap<P, F>
where
    T: Token,
    P: Parser<T>,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<Arc<str>>,
{
    type Output = U;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<U> {
        let value = self.inner.parse_into(state, expecteds)?;
        match (self.f)(value) {
            Ok(mapped) => Some(mapped),
            Err(message) => {
                let location = state.location();
                state.fail_with_message(location, &message.into());
                expecteds.push(location, Expected::nothing());
                None
            }
        }
    }
}

#[derive(Clone)]
pub struct Bind<P, F> {
    pub(super) inner: P,
    pub(super) f: F,
}

impl<T, P, F, Q> Parser<T> for Bind<P, F>
where
    T: Token,
    P: Parser<T>,
    Q: Parser<T>,
    F: Fn(P::Output) -> Q,
{
    type Output = Q::Output;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<Q::Output> {
        let value = self.inner.parse_into(state, expecteds)?;
        (self.f)(value).parse_into(state, expecteds)
    }
}

#[derive(Clone)]
pub struct Then<P, Q> {
    pub(super) first: P,
    pub(super) second: Q,
}

impl<T: Token, P: Parser<T>, Q: Parser<T>> Parser<T> for Then<P, Q> {
    type Output = Q::Output;

    #[inline]
    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<Q::Output> {
        self.first.parse_into(state, expecteds)?;
        self.second.parse_into(state, expecteds)
    }
}

#[derive(Clone)]
pub struct Before<P, Q> {
    pub(super) first: P,
    pub(super) second: Q,
}

impl<T: Token, P: Parser<T>, Q: Parser<T>> Parser<T> for Before<P, Q> {
    type Output = P::Output;

    #[inline]
    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<P::Output> {
        let value = self.first.parse_into(state, expecteds)?;
        self.second.parse_into(state, expecteds)?;
        Some(value)
    }
}

#[derive(Clone)]
pub struct And<P, Q> {
    pub(super) first: P,
    pub(super) second: Q,
}

impl<T: Token, P: Parser<T>, Q: Parser<T>> Parser<T> for And<P, Q> {
    type Output = (P::Output, Q::Output);

    #[inline]
    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<Self::Output> {
        let left = self.first.parse_into(state, expecteds)?;
        let right = self.second.parse_into(state, expecteds)?;
        Some((left, right))
    }
}

#[derive(Clone)]
pub struct ThenWith<P, Q, F> {
    pub(super) first: P,
    pub(super) second: Q,
    pub(super) f: F,
}

impl<T, P, Q, F, U> Parser<T> for ThenWith<P, Q, F>
where
    T: Token,
    P: Parser<T>,
    Q: Parser<T>,
    F: Fn(P::Output, Q::Output) -> U,
{
    type Output = U;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<U> {
        let left = self.first.parse_into(state, expecteds)?;
        let right = self.second.parse_into(state, expecteds)?;
        Some((self.f)(left, right))
    }
}

#[derive(Clone)]
pub struct Assert<P, F> {
    pub(super) inner: P,
    pub(super) predicate: F,
    pub(super) message: Arc<str>,
}

impl<T, P, F> Parser<T> for Assert<P, F>
where
    T: Token,
    P: Parser<T>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<P::Output> {
        let value = self.inner.parse_into(state, expecteds)?;
        if (self.predicate)(&value) {
            return Some(value);
        }
        let location = state.location();
        state.fail_with_message(location, &self.message);
        expecteds.push(location, Expected::nothing());
        None
    }
}

#[derive(Clone)]
pub struct Recognize<P> {
    pub(super) inner: P,
}

impl<T: Token, P: Parser<T>> Parser<T> for Recognize<P> {
    type Output = Vec<T>;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<Vec<T>> {
        let start = state.location();
        self.inner.parse_into(state, expecteds)?;
        Some(state.input()[start..state.location()].to_vec())
    }
}
