//! Self-referential grammars.
//!
//! [`recursive`] hands the grammar builder a handle that refers back to the
//! parser being defined. The handle holds a weak reference, so the finished
//! grammar has no reference-count cycle and is freed when the returned
//! parser is dropped.
//!
//! Every entry into a recursive parser counts against the parse's recursion
//! limit. Exceeding it aborts the whole parse with
//! [`crate::ParseErrorKind::RecursionLimitExceeded`] instead of exhausting the
//! native stack.

use std::sync::{Arc, OnceLock, Weak};

use weft_core::Token;

use super::invariants::unlinked_recursive;
use super::{BoxedParser, Parser};
use crate::error::ExpectedCollector;
use crate::state::ParseState;

type Slot<'a, T, O> = OnceLock<BoxedParser<'a, T, O>>;

enum Link<'a, T: Token, O> {
    Strong(Arc<Slot<'a, T, O>>),
    Weak(Weak<Slot<'a, T, O>>),
}

/// A parser defined in terms of itself.
pub struct Recursive<'a, T: Token, O> {
    link: Link<'a, T, O>,
}

impl<T: Token, O> Clone for Recursive<'_, T, O> {
    fn clone(&self) -> Self {
        let link = match &self.link {
            Link::Strong(slot) => Link::Strong(Arc::clone(slot)),
            Link::Weak(slot) => Link::Weak(Weak::clone(slot)),
        };
        Self { link }
    }
}

impl<T: Token, O> Recursive<'_, T, O> {
    fn run(
        slot: &Slot<'_, T, O>,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<O> {
        match slot.get() {
            Some(parser) => parser.parse_into(state, expecteds),
            None => unlinked_recursive(),
        }
    }
}

impl<T: Token, O> Parser<T> for Recursive<'_, T, O> {
    type Output = O;

    fn parse_into(
        &self,
        state: &mut ParseState<'_, T>,
        expecteds: &mut ExpectedCollector<T>,
    ) -> Option<O> {
        if !state.enter_recursion() {
            return None;
        }
        let result = match &self.link {
            Link::Strong(slot) => Self::run(slot, state, expecteds),
            Link::Weak(slot) => match slot.upgrade() {
                Some(slot) => Self::run(&slot, state, expecteds),
                None => unlinked_recursive(),
            },
        };
        state.exit_recursion();
        result
    }
}

/// Builds a parser that may refer to itself through the handle passed to
/// `build`.
///
/// ```
/// use weft_lib::{Parser, recursive, text};
///
/// // Balanced parentheses, counting the nesting depth.
/// let parens = recursive(|inner| {
///     inner
///         .between(text::char('('), text::char(')'))
///         .map(|depth: u32| depth + 1)
///         .or(weft_lib::ret(0))
/// });
/// let input: Vec<char> = "((()))".chars().collect();
/// assert_eq!(parens.parse(&input).unwrap(), 3);
/// ```
pub fn recursive<'a, T, O, P, F>(build: F) -> Recursive<'a, T, O>
where
    T: Token,
    P: Parser<T, Output = O> + Send + Sync + 'a,
    F: FnOnce(Recursive<'a, T, O>) -> P,
{
    let slot: Arc<Slot<'a, T, O>> = Arc::new(OnceLock::new());
    let handle = Recursive {
        link: Link::Weak(Arc::downgrade(&slot)),
    };
    let parser = build(handle).boxed();
    slot.get_or_init(|| parser);
    Recursive {
        link: Link::Strong(slot),
    }
}
