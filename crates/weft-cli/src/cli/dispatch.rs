//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but keep the raw clap values
//! (color choice, raw limit); the `From` impls resolve them.

use std::path::PathBuf;

use clap::ArgMatches;
use weft_lib::{Limits, Verbosity};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub file: Option<PathBuf>,
    pub source_text: Option<String>,
    pub recursion_limit: u32,
    pub color: ColorChoice,
    // Note: pretty, verbose, no_result are parsed but not extracted
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: m.get_one::<PathBuf>("file").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            file: p.file,
            source_text: p.source_text,
            recursion_limit: limit_option(p.recursion_limit),
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub file: Option<PathBuf>,
    pub source_text: Option<String>,
    pub recursion_limit: u32,
    pub pretty: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: m.get_one::<PathBuf>("file").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            recursion_limit: parse_recursion_limit(m),
            pretty: m.get_flag("pretty"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            file: p.file,
            source_text: p.source_text,
            recursion_limit: limit_option(p.recursion_limit),
            pretty: p.pretty,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub file: Option<PathBuf>,
    pub source_text: Option<String>,
    pub recursion_limit: u32,
    pub verbosity: Verbosity,
    pub no_result: bool,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: m.get_one::<PathBuf>("file").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            recursion_limit: parse_recursion_limit(m),
            verbosity: parse_verbosity(m),
            no_result: m.get_flag("no_result"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            file: p.file,
            source_text: p.source_text,
            recursion_limit: limit_option(p.recursion_limit),
            verbosity: p.verbosity,
            no_result: p.no_result,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_recursion_limit(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("recursion_limit")
        .copied()
        .unwrap_or(Limits::DEFAULT_RECURSION_LIMIT)
}

fn parse_verbosity(m: &ArgMatches) -> Verbosity {
    match m.get_count("verbose") {
        0 => Verbosity::Default,
        1 => Verbosity::Verbose,
        _ => Verbosity::VeryVerbose,
    }
}

fn limit_option(limit: u32) -> Option<u32> {
    (limit > 0).then_some(limit)
}
