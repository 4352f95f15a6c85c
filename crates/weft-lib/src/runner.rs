//! Top-level invocation.

use weft_core::Token;

use crate::error::{ExpectedCollector, ParseError};
use crate::parser::Parser;
use crate::state::ParseState;
use crate::trace::Tracer;

/// Resource limits for one parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// How many `recursive` entries may nest inside the outermost one
    /// (default: [`Limits::DEFAULT_RECURSION_LIMIT`]). `None` disables the
    /// check and leaves the native stack as the only bound.
    pub recursion_limit: Option<u32>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            recursion_limit: Some(Self::DEFAULT_RECURSION_LIMIT),
        }
    }
}

impl Limits {
    /// Deep enough for real documents, shallow enough that a debug build
    /// stays within a 2 MiB thread stack.
    pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }
}

/// Configures and runs a parse.
///
/// ```
/// use weft_lib::{Parser, Runner, text};
///
/// let input: Vec<char> = "42".chars().collect();
/// let digits = Runner::new(&input)
///     .recursion_limit(Some(64))
///     .run(&text::digit().at_least_once())
///     .unwrap();
/// assert_eq!(digits, vec!['4', '2']);
/// ```
pub struct Runner<'i, T> {
    input: &'i [T],
    limits: Limits,
    tracer: Option<&'i mut dyn Tracer>,
}

impl<'i, T: Token> Runner<'i, T> {
    pub fn new(input: &'i [T]) -> Self {
        Self {
            input,
            limits: Limits::default(),
            tracer: None,
        }
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.limits.recursion_limit = limit;
        self
    }

    pub fn tracer(mut self, tracer: &'i mut dyn Tracer) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Runs `parser` from the start of the input.
    ///
    /// Success does not require consuming the whole input; end the grammar
    /// with [`crate::end`] for that.
    pub fn run<P>(self, parser: &P) -> Result<P::Output, ParseError<T>>
    where
        P: Parser<T> + ?Sized,
    {
        let mut state = ParseState::new(self.input).with_limits(self.limits);
        if let Some(tracer) = self.tracer {
            state = state.with_tracer(tracer);
        }
        let mut expecteds = ExpectedCollector::new();
        match parser.parse_into(&mut state, &mut expecteds) {
            Some(value) if !state.is_aborted() => Ok(value),
            _ => Err(state.into_parse_error(&expecteds)),
        }
    }
}
