//! Shared logic for check, dump and trace.

use std::path::Path;

use weft_lib::ParseError;
use weft_lib::json::Json;
use weft_lib::{Limits, Tracer};

use super::source_loader::{LoadedSource, load_source};

/// Load the document or exit with status 1.
pub fn load_or_exit(file: Option<&Path>, text: Option<&str>) -> LoadedSource {
    load_source(file, text).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

pub fn limits(recursion_limit: Option<u32>) -> Limits {
    Limits::new().recursion_limit(recursion_limit)
}

/// Parse the whole document, optionally under a tracer.
pub fn parse_document(
    loaded: &LoadedSource,
    recursion_limit: Option<u32>,
    tracer: Option<&mut dyn Tracer>,
) -> Result<Json, ParseError<char>> {
    let input: Vec<char> = loaded.text.chars().collect();
    let runner = weft_lib::Runner::new(&input).limits(limits(recursion_limit));
    let document = weft_lib::json::document();
    match tracer {
        Some(tracer) => runner.tracer(tracer).run(&document),
        None => runner.run(&document),
    }
}

/// Render a parse error against its source on stderr.
pub fn report(error: &ParseError<char>, loaded: &LoadedSource, color: bool) {
    let rendered = error
        .printer()
        .source(&loaded.text)
        .path(&loaded.name)
        .colored(color)
        .render();
    eprintln!("{}", rendered);
}
