//! Builder-pattern printer for rendering parse errors against their source.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::error::ParseError;

/// Renders a [`ParseError`] over `char` input with a source excerpt.
pub struct ErrorPrinter<'e, 's> {
    error: &'e ParseError<char>,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e ParseError<char>) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    /// The text that was parsed. Without it the error renders as one line.
    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return write!(w, "{}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let title = self.error.summary();
        let label = self
            .error
            .expected_text()
            .or_else(|| self.error.message().map(str::to_string))
            .unwrap_or_default();
        let range = byte_range(source, self.error.location());

        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&label));

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&title).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

/// Byte range of the char at `char_offset`, one column wide.
///
/// At a line break or the end of the source the range is empty, so the
/// annotation stays on the line where the failure happened.
pub(crate) fn byte_range(source: &str, char_offset: usize) -> Range<usize> {
    let start = source
        .char_indices()
        .nth(char_offset)
        .map_or(source.len(), |(i, _)| i);
    let rest = &source[start..];
    if rest.starts_with('\n') || rest.starts_with("\r\n") {
        return start..start;
    }
    let width = rest.chars().next().map_or(0, char::len_utf8);
    start..start + width
}

impl ParseError<char> {
    pub fn printer(&self) -> ErrorPrinter<'_, '_> {
        ErrorPrinter::new(self)
    }
}
