use std::fmt::Debug;

use crate::SourcePosDelta;

/// Something a parser can consume.
///
/// Any `Clone + PartialEq + Debug` type can be a token with an empty
/// `impl Token for MyToken {}`. Override [`Token::pos_delta`] when tokens
/// span lines, and [`Token::describe`] for friendlier diagnostics.
pub trait Token: Clone + PartialEq + Debug {
    /// How consuming this token moves the line/column position.
    fn pos_delta(&self) -> SourcePosDelta {
        SourcePosDelta::ONE_COL
    }

    /// Rendering used in `unexpected ...` / `expected ...` messages.
    fn describe(&self) -> String {
        format!("{:?}", self)
    }

    /// Rendering of a literal run of tokens, e.g. the argument of `sequence`.
    fn describe_run(run: &[Self]) -> String {
        let parts: Vec<String> = run.iter().map(Token::describe).collect();
        parts.join(" ")
    }
}

const TAB_WIDTH: u32 = 4;

impl Token for char {
    fn pos_delta(&self) -> SourcePosDelta {
        match self {
            '\n' => SourcePosDelta::NEWLINE,
            '\t' => SourcePosDelta::new(0, TAB_WIDTH),
            _ => SourcePosDelta::ONE_COL,
        }
    }

    fn describe(&self) -> String {
        format!("{:?}", self)
    }

    fn describe_run(run: &[Self]) -> String {
        format!("{:?}", run.iter().collect::<String>())
    }
}

impl Token for u8 {
    fn pos_delta(&self) -> SourcePosDelta {
        match self {
            b'\n' => SourcePosDelta::NEWLINE,
            b'\t' => SourcePosDelta::new(0, TAB_WIDTH),
            _ => SourcePosDelta::ONE_COL,
        }
    }

    fn describe(&self) -> String {
        if self.is_ascii_graphic() || *self == b' ' {
            format!("'{}'", *self as char)
        } else {
            format!("0x{:02x}", self)
        }
    }

    fn describe_run(run: &[Self]) -> String {
        format!("{:?}", String::from_utf8_lossy(run))
    }
}
