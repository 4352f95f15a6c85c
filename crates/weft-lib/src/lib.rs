#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Backtracking parser combinators over arbitrary token types.
//!
//! Grammars are built by composing small parsers (match one token, fail,
//! sequence, alternation, repetition) into larger ones. Every parser shares
//! one [`ParseState`] per invocation and reports failures into an
//! [`ExpectedCollector`], so a failed parse ends in a single [`ParseError`]
//! naming the deepest point reached and everything that would have been
//! accepted there.
//!
//! ```
//! use weft_lib::{Parser, text};
//!
//! let number = text::digit().at_least_once();
//! let list = number.separated(text::char(','));
//!
//! let parsed = list.parse(&['1', '2', ',', '3']).unwrap();
//! assert_eq!(parsed, vec![vec!['1', '2'], vec!['3']]);
//! ```

pub mod diagnostics;
pub mod error;
pub mod json;
pub mod parser;
pub mod runner;
pub mod state;
pub mod text;
pub mod trace;

#[cfg(test)]
mod json_tests;
#[cfg(test)]
mod state_tests;

pub use weft_core::{Colors, SourcePos, SourcePosDelta, Token};

pub use error::{Expected, ExpectedCollector, InternalError, ParseError, ParseErrorKind};
pub use parser::{
    BoxedParser, Fail, Parser, Recursive, any, current_offset, current_pos, end, fail, from_fn,
    one_of, recursive, ret, satisfy, sequence, token,
};
pub use runner::{Limits, Runner};
pub use state::{Bookmark, ParseState};
pub use trace::{PrintTracer, Tracer, Verbosity};

/// Errors raised while constructing parsers.
///
/// Parsing itself never returns this type: mismatches are reported as
/// [`ParseError`] values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A combinator constructor received an unusable argument.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },
}

/// Result type for parser construction.
pub type Result<T> = std::result::Result<T, Error>;
