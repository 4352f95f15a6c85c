//! The parser contract and its combinators.
//!
//! Every parser implements [`Parser::parse_into`]:
//! - success returns `Some(value)` with the cursor past what was consumed and
//!   nothing left behind in the [`ExpectedCollector`];
//! - failure returns `None` with the state's error describing it and the
//!   failure's [`crate::Expected`] pushed at the error location.
//!
//! A parser may consume input and then fail. That failure is committed:
//! alternation does not try further branches unless the parser is wrapped in
//! [`Parser::attempt`], which rewinds.

mod backtrack;
mod choice;
mod invariants;
mod position;
mod primitives;
mod recursive;
mod repeat;
mod sequence;

#[cfg(test)]
mod backtrack_tests;
#[cfg(test)]
mod position_tests;
#[cfg(test)]
mod sequence_tests;

use std::sync::Arc;

use weft_core::Token;

use crate::error::{ExpectedCollector, ParseError};
use crate::runner::Runner;
use crate::state::ParseState;

pub use backtrack::{Lookahead, Not, Try};
pub use choice::{OneOf, Or, one_of};
pub use position::{CurrentOffset, CurrentPos, Labelled, WithSpan, current_offset, current_pos};
pub use primitives::{
    Any, End, Fail, FromFn, Literal, Return, Satisfy, Sequence, any, end, fail, from_fn, ret,
    satisfy, sequence, token,
};
pub use recursive::{Recursive, recursive};
pub use repeat::{AtLeastOnce, Many, Optional, Repeat, Separated, SkipMany};
pub use sequence::{And, Assert, Before, Bind, Map, Recognize, Then, ThenWith, TryMap};

/// A parser over tokens of type `T`.
pub trait Parser<T: Token> {
    type Output;

    /// Runs the parser at the state's cursor.
    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<Self::Output>;

    /// Parses `input` from its start with default [`crate::Limits`].
    fn parse(&self, input: &[T]) -> Result<Self::Output, ParseError<T>> {
        Runner::new(input).run(self)
    }

    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map { inner: self, f }
    }

    /// Maps the value, failing with the returned message on `Err`.
    ///
    /// The value's tokens stay consumed, so the failure is committed and
    /// reported at the cursor after them.
    fn try_map<U, E, F>(self, f: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Result<U, E>,
        E: Into<Arc<str>>,
    {
        TryMap { inner: self, f }
    }

    /// Feeds the value to `f` and runs the parser it returns.
    fn bind<Q, F>(self, f: F) -> Bind<Self, F>
    where
        Self: Sized,
        Q: Parser<T>,
        F: Fn(Self::Output) -> Q,
    {
        Bind { inner: self, f }
    }

    /// Runs `next` after `self`, keeping `next`'s value.
    fn then<Q>(self, next: Q) -> Then<Self, Q>
    where
        Self: Sized,
        Q: Parser<T>,
    {
        Then { first: self, second: next }
    }

    /// Runs `next` after `self`, keeping `self`'s value.
    fn before<Q>(self, next: Q) -> Before<Self, Q>
    where
        Self: Sized,
        Q: Parser<T>,
    {
        Before { first: self, second: next }
    }

    fn and<Q>(self, next: Q) -> And<Self, Q>
    where
        Self: Sized,
        Q: Parser<T>,
    {
        And { first: self, second: next }
    }

    fn then_with<Q, U, F>(self, next: Q, f: F) -> ThenWith<Self, Q, F>
    where
        Self: Sized,
        Q: Parser<T>,
        F: Fn(Self::Output, Q::Output) -> U,
    {
        ThenWith {
            first: self,
            second: next,
            f,
        }
    }

    fn between<L, R>(self, open: L, close: R) -> Before<Then<L, Self>, R>
    where
        Self: Sized,
        L: Parser<T>,
        R: Parser<T>,
    {
        open.then(self).before(close)
    }

    /// Fails with `message` when the value does not satisfy `predicate`.
    ///
    /// Like [`Parser::try_map`], the failure is committed.
    fn assert<F>(self, predicate: F, message: impl Into<Arc<str>>) -> Assert<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        Assert {
            inner: self,
            predicate,
            message: message.into(),
        }
    }

    /// Returns the consumed tokens instead of the value.
    fn recognize(self) -> Recognize<Self>
    where
        Self: Sized,
    {
        Recognize { inner: self }
    }

    /// Tries `other` when `self` fails without consuming input.
    fn or<Q>(self, other: Q) -> Or<Self, Q>
    where
        Self: Sized,
        Q: Parser<T, Output = Self::Output>,
    {
        Or {
            left: self,
            right: other,
        }
    }

    fn many(self) -> Many<Self>
    where
        Self: Sized,
    {
        Many { inner: self }
    }

    fn at_least_once(self) -> AtLeastOnce<Self>
    where
        Self: Sized,
    {
        AtLeastOnce { inner: self }
    }

    fn skip_many(self) -> SkipMany<Self>
    where
        Self: Sized,
    {
        SkipMany { inner: self }
    }

    /// Exactly `count` repetitions.
    fn repeat(self, count: usize) -> Repeat<Self>
    where
        Self: Sized,
    {
        Repeat { inner: self, count }
    }

    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional { inner: self }
    }

    /// Zero or more items separated by `separator`.
    fn separated<S>(self, separator: S) -> Separated<Self, S>
    where
        Self: Sized,
        S: Parser<T>,
    {
        Separated {
            item: self,
            separator,
            at_least_once: false,
        }
    }

    fn separated_at_least_once<S>(self, separator: S) -> Separated<Self, S>
    where
        Self: Sized,
        S: Parser<T>,
    {
        Separated {
            item: self,
            separator,
            at_least_once: true,
        }
    }

    /// Rewinds the cursor when the parser fails, making its failure
    /// non-committing.
    fn attempt(self) -> Try<Self>
    where
        Self: Sized,
    {
        Try { inner: self }
    }

    /// Runs the parser without consuming input on success.
    fn lookahead(self) -> Lookahead<Self>
    where
        Self: Sized,
    {
        Lookahead { inner: self }
    }

    /// Succeeds, consuming nothing, exactly when the parser fails.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not { inner: self }
    }

    /// Pairs the value with the offset range it was parsed from.
    fn with_span(self) -> WithSpan<Self>
    where
        Self: Sized,
    {
        WithSpan { inner: self }
    }

    /// Names the parser in diagnostics and traces.
    fn labelled(self, label: impl Into<Arc<str>>) -> Labelled<Self>
    where
        Self: Sized,
    {
        Labelled {
            inner: self,
            label: label.into(),
        }
    }

    fn boxed<'a>(self) -> BoxedParser<'a, T, Self::Output>
    where
        Self: Sized + Send + Sync + 'a,
    {
        BoxedParser::new(self)
    }
}

impl<T: Token, P: Parser<T> + ?Sized> Parser<T> for &P {
    type Output = P::Output;

    #[inline]
    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<Self::Output> {
        (**self).parse_into(state, expecteds)
    }
}

/// A type-erased, shareable parser.
pub struct BoxedParser<'a, T: Token, O> {
    inner: Arc<dyn Parser<T, Output = O> + Send + Sync + 'a>,
}

impl<'a, T: Token, O> BoxedParser<'a, T, O> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<T, Output = O> + Send + Sync + 'a,
    {
        Self {
            inner: Arc::new(parser),
        }
    }
}

impl<T: Token, O> Clone for BoxedParser<'_, T, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Token, O> Parser<T> for BoxedParser<'_, T, O> {
    type Output = O;

    #[inline]
    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<O> {
        self.inner.parse_into(state, expecteds)
    }
}
