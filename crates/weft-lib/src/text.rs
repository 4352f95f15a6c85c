//! Helpers for parsing text as a sequence of `char`s.

use std::sync::Arc;

use crate::error::ParseError;
use crate::parser::{Literal, Map, Parser, Recognize, Satisfy, Sequence, SkipMany};
use crate::parser::{satisfy, sequence, token};

type CharPredicate = fn(&char) -> bool;

pub fn char(c: char) -> Literal<char> {
    token(c)
}

/// An ASCII digit.
pub fn digit() -> Satisfy<char, CharPredicate> {
    satisfy::<char, CharPredicate>(|c| c.is_ascii_digit(), "digit")
}

pub fn hex_digit() -> Satisfy<char, CharPredicate> {
    satisfy::<char, CharPredicate>(|c| c.is_ascii_hexdigit(), "hex digit")
}

pub fn letter() -> Satisfy<char, CharPredicate> {
    satisfy::<char, CharPredicate>(|c| c.is_alphabetic(), "letter")
}

pub fn letter_or_digit() -> Satisfy<char, CharPredicate> {
    satisfy::<char, CharPredicate>(|c| c.is_alphanumeric(), "letter or digit")
}

pub fn whitespace() -> Satisfy<char, CharPredicate> {
    satisfy::<char, CharPredicate>(|c| c.is_whitespace(), "whitespace")
}

pub fn skip_whitespaces() -> SkipMany<Satisfy<char, CharPredicate>> {
    whitespace().skip_many()
}

/// One of the characters in `set`.
pub fn one_of_chars(
    set: &str,
) -> Satisfy<char, impl Fn(&char) -> bool + Clone + Send + Sync + use<>> {
    let chars: Arc<[char]> = set.chars().collect();
    let label = match chars.len() {
        1 => format!("{:?}", chars[0]),
        _ => format!("one of {set:?}"),
    };
    satisfy(move |c: &char| chars.contains(c), label)
}

/// Any character not in `set`.
pub fn any_char_except(
    set: &str,
) -> Satisfy<char, impl Fn(&char) -> bool + Clone + Send + Sync + use<>> {
    let chars: Arc<[char]> = set.chars().collect();
    let label = format!("any character except {set:?}");
    satisfy(move |c: &char| !chars.contains(c), label)
}

/// The literal string `s`, which commits once its first character matches.
pub fn string(s: &str) -> Sequence<char> {
    sequence(s.chars())
}

/// Entry points and combinators specific to `char` parsers.
pub trait CharParser: Parser<char> {
    /// Parses a string slice.
    fn parse_str(&self, source: &str) -> Result<Self::Output, ParseError<char>> {
        let input: Vec<char> = source.chars().collect();
        self.parse(&input)
    }

    /// Returns the consumed text instead of the value.
    fn recognize_string(self) -> Map<Recognize<Self>, fn(Vec<char>) -> String>
    where
        Self: Sized,
    {
        self.recognize().map(collect_string as fn(Vec<char>) -> String)
    }
}

impl<P: Parser<char> + ?Sized> CharParser for P {}

fn collect_string(chars: Vec<char>) -> String {
    chars.into_iter().collect()
}
