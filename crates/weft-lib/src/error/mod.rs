//! Failure reporting.
//!
//! While parsing, a failed parser leaves an [`InternalError`] in the parse
//! state and pushes what it would have accepted into the
//! [`ExpectedCollector`]. Alternation merges these as it backtracks. When the
//! top-level parser fails, the surviving error and the expecteds recorded at
//! its location become one [`ParseError`].

mod collector;
mod expected;
mod internal;
mod parse_error;

#[cfg(test)]
mod collector_tests;

pub use collector::{ExpectedCollector, Mark};
pub use expected::Expected;
pub use internal::InternalError;
pub use parse_error::{ParseError, ParseErrorKind};
