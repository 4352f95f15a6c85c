#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core primitives shared by the weft crates.
//!
//! - [`Token`]: what a parser consumes, and how it renders in diagnostics
//! - [`SourcePos`] / [`SourcePosDelta`]: line/column tracking derived from tokens
//! - [`Colors`]: ANSI palette for terminal output

pub mod colors;
mod pos;
mod token;

#[cfg(test)]
mod pos_tests;
#[cfg(test)]
mod token_tests;

pub use colors::Colors;
pub use pos::{SourcePos, SourcePosDelta};
pub use token::Token;
