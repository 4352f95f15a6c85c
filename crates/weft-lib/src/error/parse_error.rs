use std::fmt;

use weft_core::{SourcePos, Token};

use super::{Expected, InternalError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A token (or the end of input) did not match.
    Mismatch,
    /// An unconditional or semantic failure carrying a message.
    Custom,
    /// The grammar nested deeper than the configured recursion limit.
    RecursionLimitExceeded,
}

/// The diagnostic returned by a failed top-level parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError<T> {
    kind: ParseErrorKind,
    unexpected: Option<T>,
    eof: bool,
    expected: Vec<Expected<T>>,
    message: Option<String>,
    location: usize,
    pos: SourcePos,
}

impl<T: Token> ParseError<T> {
    pub(crate) fn from_internal<'e>(
        error: InternalError<T>,
        expecteds: impl IntoIterator<Item = &'e Expected<T>>,
        pos: SourcePos,
    ) -> Self
    where
        T: 'e,
    {
        let mut expected: Vec<Expected<T>> = Vec::new();
        for candidate in expecteds {
            if !candidate.is_nothing() && !expected.contains(candidate) {
                expected.push(candidate.clone());
            }
        }
        Self {
            kind: if error.message.is_some() {
                ParseErrorKind::Custom
            } else {
                ParseErrorKind::Mismatch
            },
            unexpected: error.unexpected,
            eof: error.eof,
            expected,
            message: error.message.map(|m| m.to_string()),
            location: error.location,
            pos,
        }
    }

    pub(crate) fn recursion_limit(limit: u32, location: usize, pos: SourcePos) -> Self {
        Self {
            kind: ParseErrorKind::RecursionLimitExceeded,
            unexpected: None,
            eof: false,
            expected: Vec::new(),
            message: Some(format!("recursion limit of {limit} exceeded")),
            location,
            pos,
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn unexpected(&self) -> Option<&T> {
        self.unexpected.as_ref()
    }

    /// The failure happened because the input ran out.
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Everything that would have been accepted at [`Self::location`],
    /// without duplicates.
    pub fn expected(&self) -> &[Expected<T>] {
        &self.expected
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Offset of the failure in the token slice.
    pub fn location(&self) -> usize {
        self.location
    }

    pub fn pos(&self) -> SourcePos {
        self.pos
    }

    /// `"unexpected 'x'"` or `"unexpected end of input"`, when applicable.
    pub fn unexpected_text(&self) -> Option<String> {
        if self.kind == ParseErrorKind::RecursionLimitExceeded {
            return None;
        }
        if self.eof {
            return Some("unexpected end of input".to_string());
        }
        self.unexpected
            .as_ref()
            .map(|token| format!("unexpected {}", token.describe()))
    }

    /// `"expected a, b, or c"`, when anything was expected.
    pub fn expected_text(&self) -> Option<String> {
        let names: Vec<String> = self.expected.iter().filter_map(Expected::describe).collect();
        let list = match names.as_slice() {
            [] => return None,
            [one] => one.clone(),
            [a, b] => format!("{a} or {b}"),
            [init @ .., last] => format!("{}, or {last}", init.join(", ")),
        };
        Some(format!("expected {list}"))
    }

    /// One-line description without the position.
    pub fn summary(&self) -> String {
        let parts: Vec<String> = [
            self.message.clone(),
            self.unexpected_text(),
            self.expected_text(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();
        if parts.is_empty() {
            return "parse failed".to_string();
        }
        parts.join("; ")
    }
}

impl<T: Token> fmt::Display for ParseError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error at {}: {}", self.pos, self.summary())
    }
}

impl<T: Token> std::error::Error for ParseError<T> {}
