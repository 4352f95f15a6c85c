//! Tracing hooks for debugging grammars.
//!
//! The parse state holds an optional `&mut dyn Tracer`. When no tracer is
//! installed every hook is a single `None` check, and the arguments (token
//! descriptions in particular) are never built.
//!
//! Events are emitted at:
//! - `trace_enter` / `trace_exit` - around every `labelled` parser
//! - `trace_consume` - for each token a parser consumes
//! - `trace_alternative` - when an alternation moves on to its next branch
//! - `trace_backtrack` - when `Try` rewinds the cursor
//! - `trace_recursion_limit` - when nesting aborts the parse

use weft_core::Colors;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Default: labelled rules, backtracks, aborts.
    #[default]
    Default,
    /// Verbose (-v): also every alternation branch switch.
    Verbose,
    /// Very verbose (-vv): also every consumed token.
    VeryVerbose,
}

/// Observer of parser execution.
///
/// All hooks default to doing nothing, so implementations only override
/// what they display.
pub trait Tracer {
    /// Called before a labelled parser runs.
    fn trace_enter(&mut self, _label: &str, _location: usize) {}

    /// Called after a labelled parser returns.
    fn trace_exit(&mut self, _label: &str, _location: usize, _success: bool) {}

    /// Called when the token at `location` is consumed.
    fn trace_consume(&mut self, _location: usize, _token: &str) {}

    /// Called when an alternation tries its next branch at `location`.
    fn trace_alternative(&mut self, _location: usize) {}

    /// Called when the cursor is rewound from `from` to `to`.
    fn trace_backtrack(&mut self, _from: usize, _to: usize) {}

    /// Called once when the recursion limit aborts the parse.
    fn trace_recursion_limit(&mut self, _limit: u32, _location: usize) {}
}

/// Tracer that renders an indented, optionally colored log.
///
/// Lines are collected and can be printed or inspected afterwards.
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    depth: usize,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            depth: 0,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn push(&mut self, content: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{content}"));
    }

    fn offset(&self, location: usize) -> String {
        let c = self.colors;
        format!("{}@{location}{}", c.dim, c.reset)
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, label: &str, location: usize) {
        let c = self.colors;
        let line = format!("{}{label}{} {}", c.blue, c.reset, self.offset(location));
        self.push(line);
        self.depth += 1;
    }

    fn trace_exit(&mut self, label: &str, location: usize, success: bool) {
        self.depth = self.depth.saturating_sub(1);
        let c = self.colors;
        let (color, mark) = if success { (c.green, "✓") } else { (c.red, "✗") };
        let line = format!("{color}{mark} {label}{} {}", c.reset, self.offset(location));
        self.push(line);
    }

    fn trace_consume(&mut self, location: usize, token: &str) {
        if self.verbosity < Verbosity::VeryVerbose {
            return;
        }
        let c = self.colors;
        let line = format!("{}·{} {token} {}", c.dim, c.reset, self.offset(location));
        self.push(line);
    }

    fn trace_alternative(&mut self, location: usize) {
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        let c = self.colors;
        let line = format!("{}| next alternative{} {}", c.dim, c.reset, self.offset(location));
        self.push(line);
    }

    fn trace_backtrack(&mut self, from: usize, to: usize) {
        let c = self.colors;
        let line = format!(
            "{}↺ backtrack{} {} → {}",
            c.red,
            c.reset,
            self.offset(from),
            self.offset(to)
        );
        self.push(line);
    }

    fn trace_recursion_limit(&mut self, limit: u32, location: usize) {
        let c = self.colors;
        let line = format!(
            "{}! recursion limit {limit} exceeded{} {}",
            c.red,
            c.reset,
            self.offset(location)
        );
        self.push(line);
    }
}
