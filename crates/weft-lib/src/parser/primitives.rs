//! Leaf parsers: unconditional success and failure, token matching, end of
//! input, and closures.

use std::marker::PhantomData;
use std::sync::Arc;

use weft_core::Token;

use super::Parser;
use crate::error::{Expected, ExpectedCollector};
use crate::state::ParseState;
use crate::{Error, Result};

/// Always fails without consuming input.
pub struct Fail<T, O> {
    message: Arc<str>,
    expected: Expected<T>,
    _output: PhantomData<fn() -> O>,
}

impl<T: Token, O> Fail<T, O> {
    pub const DEFAULT_MESSAGE: &'static str = "Failed";

    pub fn new(message: impl Into<Arc<str>>) -> Self {
        Self {
            message: message.into(),
            expected: Expected::nothing(),
            _output: PhantomData,
        }
    }

    /// Like [`Fail::new`], rejecting an absent message. An empty one is
    /// allowed.
    pub fn try_new(message: Option<&str>) -> Result<Self> {
        match message {
            Some(message) => Ok(Self::new(message)),
            None => Err(Error::InvalidArgument {
                name: "message",
                reason: "is required",
            }),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T: Token, O> Default for Fail<T, O> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MESSAGE)
    }
}

impl<T: Token, O> Clone for Fail<T, O> {
    fn clone(&self) -> Self {
        Self {
            message: Arc::clone(&self.message),
            expected: self.expected.clone(),
            _output: PhantomData,
        }
    }
}

impl<T: Token, O> Parser<T> for Fail<T, O> {
    type Output = O;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<O> {
        let location = state.location();
        state.fail_with_message(location, &self.message);
        expecteds.add(location, &self.expected);
        None
    }
}

pub fn fail<T: Token, O>(message: impl Into<Arc<str>>) -> Fail<T, O> {
    Fail::new(message)
}

/// Succeeds with a clone of the value, consuming nothing.
#[derive(Clone, Debug)]
pub struct Return<O> {
    value: O,
}

impl<T: Token, O: Clone> Parser<T> for Return<O> {
    type Output = O;

    #[inline]
    fn parse_into(&self, _: &mut ParseState<'_, T>, _: &mut ExpectedCollector<T>) -> Option<O> {
        Some(self.value.clone())
    }
}

pub fn ret<O: Clone>(value: O) -> Return<O> {
    Return { value }
}

/// Matches one token equal to the given one.
#[derive(Clone, Debug)]
pub struct Literal<T> {
    token: T,
    expected: Expected<T>,
}

impl<T: Token> Parser<T> for Literal<T> {
    type Output = T;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<T> {
        match state.peek() {
            Some(found) if *found == self.token => {
                state.advance();
                Some(found.clone())
            }
            _ => {
                state.fail_expecting(&self.expected, expecteds);
                None
            }
        }
    }
}

pub fn token<T: Token>(token: T) -> Literal<T> {
    Literal {
        expected: Expected::token(token.clone()),
        token,
    }
}

/// Matches one token accepted by a predicate.
#[derive(Clone)]
pub struct Satisfy<T, F> {
    predicate: F,
    expected: Expected<T>,
}

impl<T: Token, F: Fn(&T) -> bool> Parser<T> for Satisfy<T, F> {
    type Output = T;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<T> {
        match state.peek() {
            Some(found) if (self.predicate)(found) => {
                state.advance();
                Some(found.clone())
            }
            _ => {
                state.fail_expecting(&self.expected, expecteds);
                None
            }
        }
    }
}

/// `label` names the accepted tokens in diagnostics.
pub fn satisfy<T, F>(predicate: F, label: impl Into<Arc<str>>) -> Satisfy<T, F>
where
    T: Token,
    F: Fn(&T) -> bool,
{
    Satisfy {
        predicate,
        expected: Expected::label(label),
    }
}

/// Matches any single token; fails only at end of input.
#[derive(Clone, Debug)]
pub struct Any<T> {
    expected: Expected<T>,
}

impl<T: Token> Parser<T> for Any<T> {
    type Output = T;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<T> {
        match state.peek() {
            Some(found) => {
                state.advance();
                Some(found.clone())
            }
            None => {
                state.fail_expecting(&self.expected, expecteds);
                None
            }
        }
    }
}

pub fn any<T: Token>() -> Any<T> {
    Any {
        expected: Expected::label("any token"),
    }
}

/// Succeeds only at end of input.
#[derive(Clone, Debug)]
pub struct End<T> {
    expected: Expected<T>,
}

impl<T: Token> Parser<T> for End<T> {
    type Output = ();

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<()> {
        if state.is_at_end() {
            return Some(());
        }
        state.fail_expecting(&self.expected, expecteds);
        None
    }
}

pub fn end<T: Token>() -> End<T> {
    End {
        expected: Expected::EndOfInput,
    }
}

/// Matches a literal run of tokens.
///
/// On a partial match the matched prefix stays consumed, so the failure is
/// committed; wrap in [`Parser::attempt`] to allow alternatives.
#[derive(Clone, Debug)]
pub struct Sequence<T> {
    tokens: Arc<[T]>,
    expected: Expected<T>,
}

impl<T: Token> Parser<T> for Sequence<T> {
    type Output = Arc<[T]>;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<Arc<[T]>> {
        for wanted in self.tokens.iter() {
            match state.peek() {
                Some(found) if found == wanted => state.advance(),
                _ => {
                    state.fail_expecting(&self.expected, expecteds);
                    return None;
                }
            }
        }
        Some(Arc::clone(&self.tokens))
    }
}

pub fn sequence<T: Token>(tokens: impl IntoIterator<Item = T>) -> Sequence<T> {
    let tokens: Arc<[T]> = tokens.into_iter().collect();
    Sequence {
        expected: Expected::Tokens(Arc::clone(&tokens)),
        tokens,
    }
}

/// A parser written as a closure over the state.
///
/// The closure must follow the [`Parser`] contract.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<T, O, F> Parser<T> for FromFn<F>
where
    T: Token,
    F: Fn(&mut ParseState<'_, T>, &mut ExpectedCollector<T>) -> Option<O>,
{
    type Output = O;

    #[inline]
    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<O> {
        (self.f)(state, expecteds)
    }
}

pub fn from_fn<T, O, F>(f: F) -> FromFn<F>
where
    T: Token,
    F: Fn(&mut ParseState<'_, T>, &mut ExpectedCollector<T>) -> Option<O>,
{
    FromFn { f }
}
