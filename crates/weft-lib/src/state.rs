//! The cursor threaded through every parser.

use std::sync::Arc;

use weft_core::{SourcePos, Token};

use crate::error::{Expected, ExpectedCollector, InternalError, Mark, ParseError};
use crate::runner::Limits;
use crate::trace::Tracer;

/// A saved cursor location for [`ParseState::rewind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bookmark {
    location: usize,
}

impl Bookmark {
    pub fn location(self) -> usize {
        self.location
    }
}

/// Fatal conditions that stop every retrying combinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Abort {
    RecursionLimitExceeded { limit: u32, location: usize },
}

/// A failure a combinator recovered from after the cursor was rewound past
/// it, kept with the expecteds recorded at its location.
struct Shelved<T> {
    error: InternalError<T>,
    expected: Vec<Expected<T>>,
}

/// Mutable state of one parse invocation.
///
/// Created by [`crate::Runner`] (or [`crate::Parser::parse`]), handed by
/// `&mut` to every parser in the tree, dropped when the parse returns.
pub struct ParseState<'i, T> {
    input: &'i [T],
    location: usize,
    error: Option<InternalError<T>>,
    depth: u32,
    recursion_limit: Option<u32>,
    abort: Option<Abort>,
    /// Furthest failure recovered from so far.
    furthest: Option<Shelved<T>>,
    /// Last computed (offset, position) pair.
    pos_cache: (usize, SourcePos),
    tracer: Option<&'i mut dyn Tracer>,
}

impl<'i, T: Token> ParseState<'i, T> {
    pub fn new(input: &'i [T]) -> Self {
        Self {
            input,
            location: 0,
            error: None,
            depth: 0,
            recursion_limit: Limits::default().recursion_limit,
            abort: None,
            furthest: None,
            pos_cache: (0, SourcePos::START),
            tracer: None,
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.recursion_limit = limits.recursion_limit;
        self
    }

    pub fn with_tracer(mut self, tracer: &'i mut dyn Tracer) -> Self {
        self.tracer = Some(tracer);
        self
    }

    pub fn input(&self) -> &'i [T] {
        self.input
    }

    pub fn location(&self) -> usize {
        self.location
    }

    /// Unconsumed input.
    pub fn remaining(&self) -> &'i [T] {
        &self.input[self.location..]
    }

    pub fn peek(&self) -> Option<&'i T> {
        self.input.get(self.location)
    }

    pub fn is_at_end(&self) -> bool {
        self.location >= self.input.len()
    }

    /// Consumes the current token. No-op at end of input.
    pub fn advance(&mut self) {
        let input = self.input;
        let Some(token) = input.get(self.location) else {
            return;
        };
        if let Some(tracer) = self.tracer.as_deref_mut() {
            tracer.trace_consume(self.location, &token.describe());
        }
        self.location += 1;
    }

    pub fn bookmark(&self) -> Bookmark {
        Bookmark {
            location: self.location,
        }
    }

    pub fn rewind(&mut self, bookmark: Bookmark) {
        if bookmark.location != self.location
            && let Some(tracer) = self.tracer.as_deref_mut()
        {
            tracer.trace_backtrack(self.location, bookmark.location);
        }
        self.location = bookmark.location;
    }

    pub fn error(&self) -> Option<&InternalError<T>> {
        self.error.as_ref()
    }

    pub fn set_error(&mut self, error: InternalError<T>) {
        self.error = Some(error);
    }

    pub fn take_error(&mut self) -> Option<InternalError<T>> {
        self.error.take()
    }

    /// Records a mismatch at the cursor: the current token (or end of input)
    /// was not what `expected` describes.
    pub fn fail_expecting(&mut self, expected: &Expected<T>, expecteds: &mut ExpectedCollector<T>) {
        self.error = Some(InternalError::mismatch(self.peek().cloned(), self.location));
        expecteds.add(self.location, expected);
    }

    /// Records an unconditional failure at `location`.
    pub fn fail_with_message(&mut self, location: usize, message: &Arc<str>) {
        self.error = Some(InternalError::custom(location, Arc::clone(message)));
    }

    /// Merges a failure from an earlier alternative into the current one.
    ///
    /// The deeper of the two survives. On a tie both keep their expecteds;
    /// otherwise expecteds recorded since `mark` at shallower locations are
    /// dropped.
    pub fn keep_deepest_error(
        &mut self,
        other: Option<InternalError<T>>,
        expecteds: &mut ExpectedCollector<T>,
        mark: Mark,
    ) {
        let Some(other) = other else {
            return;
        };
        let current = self.error.as_ref().map(|error| error.location);
        let deepest = match current {
            Some(location) if location >= other.location => location,
            _ => {
                let location = other.location;
                self.error = Some(other);
                location
            }
        };
        expecteds.prune_shallower(mark, deepest);
    }

    /// Drops the current failure after a combinator recovered from it.
    ///
    /// See [`ParseState::discard_failure`].
    pub fn recover(&mut self, expecteds: &mut ExpectedCollector<T>, mark: Mark) {
        let error = self.error.take();
        self.discard_failure(error, expecteds, mark);
    }

    /// Drops `error` and the expecteds recorded since `mark`.
    ///
    /// A failure located past the cursor (one an `attempt` rewound) is kept
    /// aside when it is the furthest seen, so the final diagnostic reports it
    /// if no later failure gets further.
    pub fn discard_failure(
        &mut self,
        error: Option<InternalError<T>>,
        expecteds: &mut ExpectedCollector<T>,
        mark: Mark,
    ) {
        if let Some(error) = error
            && error.location > self.location
        {
            let location = error.location;
            let furthest_location = self.furthest.as_ref().map(|f| f.error.location);
            match furthest_location {
                Some(furthest) if furthest > location => {}
                Some(furthest) if furthest == location => {
                    if let Some(shelved) = self.furthest.as_mut() {
                        shelved
                            .expected
                            .extend(expecteds.at_since(mark, location).cloned());
                    }
                }
                _ => {
                    let expected = expecteds.at_since(mark, location).cloned().collect();
                    self.furthest = Some(Shelved { error, expected });
                }
            }
        }
        expecteds.truncate(mark);
    }

    /// Nesting depth of [`crate::recursive`] parsers.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The parse hit a fatal condition; no combinator may retry.
    pub fn is_aborted(&self) -> bool {
        self.abort.is_some()
    }

    /// Counts one more active [`crate::recursive`] entry.
    ///
    /// The outermost entry is free: a limit of `n` allows `n` entries nested
    /// inside it, so a document nested `n` levels deep fits.
    pub(crate) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_limit
            && self.depth > limit
        {
            if self.abort.is_none() {
                self.abort = Some(Abort::RecursionLimitExceeded {
                    limit,
                    location: self.location,
                });
                if let Some(tracer) = self.tracer.as_deref_mut() {
                    tracer.trace_recursion_limit(limit, self.location);
                }
            }
            self.error = Some(InternalError::custom(
                self.location,
                Arc::from("recursion limit exceeded"),
            ));
            return false;
        }
        self.depth += 1;
        true
    }

    pub(crate) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Line and column of `location`.
    ///
    /// Positions are folded from the last cached offset when moving forward,
    /// and from the start of the input otherwise.
    pub fn source_pos(&mut self, location: usize) -> SourcePos {
        let location = location.min(self.input.len());
        let (mut from, mut pos) = self.pos_cache;
        if location < from {
            (from, pos) = (0, SourcePos::START);
        }
        for token in &self.input[from..location] {
            pos = pos + token.pos_delta();
        }
        self.pos_cache = (location, pos);
        pos
    }

    pub fn current_pos(&mut self) -> SourcePos {
        self.source_pos(self.location)
    }

    pub(crate) fn trace_enter(&mut self, label: &str) {
        if let Some(tracer) = self.tracer.as_deref_mut() {
            tracer.trace_enter(label, self.location);
        }
    }

    pub(crate) fn trace_exit(&mut self, label: &str, success: bool) {
        if let Some(tracer) = self.tracer.as_deref_mut() {
            tracer.trace_exit(label, self.location, success);
        }
    }

    pub(crate) fn trace_alternative(&mut self) {
        if let Some(tracer) = self.tracer.as_deref_mut() {
            tracer.trace_alternative(self.location);
        }
    }

    /// Turns the state of a failed parse into the final diagnostic.
    pub(crate) fn into_parse_error(mut self, expecteds: &ExpectedCollector<T>) -> ParseError<T> {
        if let Some(Abort::RecursionLimitExceeded { limit, location }) = self.abort {
            let pos = self.source_pos(location);
            return ParseError::recursion_limit(limit, location, pos);
        }
        let error = match self.error.take() {
            Some(error) => error,
            None => InternalError::custom(
                self.location,
                Arc::from("parser failed without reporting an error"),
            ),
        };
        let location = error.location;
        match self.furthest.take() {
            Some(furthest) if furthest.error.location > location => {
                let pos = self.source_pos(furthest.error.location);
                ParseError::from_internal(furthest.error, &furthest.expected, pos)
            }
            Some(furthest) if furthest.error.location == location => {
                let pos = self.source_pos(location);
                let merged = furthest.expected.iter().chain(expecteds.at(location));
                ParseError::from_internal(error, merged, pos)
            }
            _ => {
                let pos = self.source_pos(location);
                ParseError::from_internal(error, expecteds.at(location), pos)
            }
        }
    }
}
