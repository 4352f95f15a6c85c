//! Line/column positions.
//!
//! Parsers track a plain offset into the token slice. Line and column are
//! only computed when someone asks for them (diagnostics, `current_pos`),
//! by folding each token's [`SourcePosDelta`] over the consumed prefix.

use std::fmt;
use std::ops::Add;

/// A 1-based line/column position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePos {
    pub line: u32,
    pub col: u32,
}

impl SourcePos {
    pub const START: Self = Self { line: 1, col: 1 };

    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl Default for SourcePos {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}", self.line, self.col)
    }
}

/// How far a single token (or a run of tokens) moves a [`SourcePos`].
///
/// A delta with `lines > 0` resets the column: `cols` then counts from the
/// start of the last line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourcePosDelta {
    pub lines: u32,
    pub cols: u32,
}

impl SourcePosDelta {
    pub const ZERO: Self = Self { lines: 0, cols: 0 };
    pub const ONE_COL: Self = Self { lines: 0, cols: 1 };
    pub const NEWLINE: Self = Self { lines: 1, cols: 0 };

    pub fn new(lines: u32, cols: u32) -> Self {
        Self { lines, cols }
    }
}

impl Add for SourcePosDelta {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if rhs.lines == 0 {
            Self::new(self.lines, self.cols + rhs.cols)
        } else {
            Self::new(self.lines + rhs.lines, rhs.cols)
        }
    }
}

impl Add<SourcePosDelta> for SourcePos {
    type Output = Self;

    fn add(self, delta: SourcePosDelta) -> Self {
        if delta.lines == 0 {
            Self::new(self.line, self.col + delta.cols)
        } else {
            Self::new(self.line + delta.lines, 1 + delta.cols)
        }
    }
}
