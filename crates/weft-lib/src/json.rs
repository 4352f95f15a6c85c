//! A JSON grammar built from the combinators.
//!
//! Serves as a realistic workload: deeply nested arrays and objects go
//! through [`crate::recursive`], long arrays through `separated`, and the
//! error messages show how alternation merges expecteds.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser, end, one_of, recursive, ret, satisfy};
use crate::runner::{Limits, Runner};
use crate::text::{
    CharParser, any_char_except, char, digit, hex_digit, one_of_chars, skip_whitespaces, string,
};

/// A parsed JSON document. Object keys keep their source order; a repeated
/// key keeps its last value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Json {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Json>),
    Object(IndexMap<String, Json>),
}

impl Json {
    /// Parses a complete document, surrounding whitespace allowed.
    pub fn parse(source: &str) -> Result<Json, ParseError<char>> {
        document().parse_str(source)
    }

    pub fn parse_with_limits(source: &str, limits: Limits) -> Result<Json, ParseError<char>> {
        let input: Vec<char> = source.chars().collect();
        Runner::new(&input).limits(limits).run(&document())
    }
}

/// Parser for a whole document: one value followed by end of input.
pub fn document() -> BoxedParser<'static, char, Json> {
    skip_whitespaces().then(value()).before(end()).boxed()
}

/// Parser for one value and the whitespace after it.
pub fn value() -> BoxedParser<'static, char, Json> {
    recursive(|value| {
        let array = value
            .clone()
            .separated(symbol(','))
            .between(symbol('['), char(']'))
            .map(Json::Array);

        let member = string_literal()
            .before(skip_whitespaces())
            .before(symbol(':'))
            .and(value);
        let object = member
            .separated(symbol(','))
            .between(symbol('{'), char('}'))
            .map(|members| Json::Object(members.into_iter().collect()));

        one_of(vec![
            object.boxed(),
            array.boxed(),
            string_literal().map(Json::String).boxed(),
            number().map(Json::Number).boxed(),
            string("true").map(|_| Json::Bool(true)).boxed(),
            string("false").map(|_| Json::Bool(false)).boxed(),
            string("null").map(|_| Json::Null).boxed(),
        ])
        .labelled("value")
        .before(skip_whitespaces())
    })
    .boxed()
}

/// A punctuation character and the whitespace after it.
fn symbol(c: char) -> impl Parser<char, Output = char> + Clone + Send + Sync {
    char(c).before(skip_whitespaces())
}

fn number() -> impl Parser<char, Output = f64> + Send + Sync {
    let integer = char('0').map(drop).or(satisfy_nonzero().then(digit().skip_many()));
    let fraction = char('.').then(digit().at_least_once()).optional();
    let exponent = one_of_chars("eE")
        .then(one_of_chars("+-").optional())
        .then(digit().at_least_once())
        .optional();

    char('-')
        .optional()
        .then(integer)
        .then(fraction)
        .then(exponent)
        .recognize_string()
        .try_map(|text| match text.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err("number out of range"),
        })
}

fn satisfy_nonzero() -> impl Parser<char, Output = char> + Clone + Send + Sync {
    satisfy(|c: &char| matches!(*c, '1'..='9'), "digit")
}

fn string_literal() -> impl Parser<char, Output = String> + Clone + Send + Sync {
    let plain = any_char_except("\"\\").assert(|c| *c >= ' ', "control character in string");
    let escaped = char('\\').then(one_of(vec![
        one_of_chars("\"\\/").boxed(),
        char('b').map(|_| '\u{8}').boxed(),
        char('f').map(|_| '\u{c}').boxed(),
        char('n').map(|_| '\n').boxed(),
        char('r').map(|_| '\r').boxed(),
        char('t').map(|_| '\t').boxed(),
        unicode_escape().boxed(),
    ]));

    escaped
        .or(plain)
        .many()
        .between(char('"'), char('"'))
        .map(|chars| chars.into_iter().collect::<String>())
        .labelled("string")
}

/// `uXXXX` after the backslash, including a `\uXXXX` low surrogate when the
/// first unit is a high surrogate.
fn unicode_escape() -> impl Parser<char, Output = char> + Send + Sync {
    code_unit()
        .bind(|high| -> BoxedParser<'static, char, u32> {
            if !(0xD800..0xDC00).contains(&high) {
                return ret(high).boxed();
            }
            char('\\')
                .then(code_unit())
                .attempt()
                .optional()
                .try_map(move |low| match low {
                    Some(low) if (0xDC00..0xE000).contains(&low) => {
                        Ok(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
                    }
                    _ => Err("unpaired surrogate in unicode escape"),
                })
                .boxed()
        })
        .try_map(|code| char::from_u32(code).ok_or("invalid unicode escape"))
}

fn code_unit() -> impl Parser<char, Output = u32> + Clone + Send + Sync {
    char('u').then(hex_digit().repeat(4)).map(|digits| {
        digits
            .iter()
            .filter_map(|d| d.to_digit(16))
            .fold(0, |acc, d| acc * 16 + d)
    })
}

impl fmt::Display for Json {
    /// Compact JSON text that parses back to an equal value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Json::Null => f.write_str("null"),
            Json::Bool(b) => write!(f, "{b}"),
            Json::Number(n) => write!(f, "{n}"),
            Json::String(s) => write_escaped(f, s),
            Json::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Json::Object(members) => {
                f.write_str("{")?;
                for (i, (key, item)) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_escaped(f, key)?;
                    write!(f, ":{item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{c}' => f.write_str("\\f")?,
            c if c < ' ' => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}
