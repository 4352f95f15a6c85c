//! Trace parser execution for debugging grammars.

use std::path::PathBuf;

use weft_lib::{Colors, PrintTracer, Verbosity};

use super::run_common::{load_or_exit, parse_document, report};

pub struct TraceArgs {
    pub file: Option<PathBuf>,
    pub source_text: Option<String>,
    pub recursion_limit: Option<u32>,
    pub verbosity: Verbosity,
    pub no_result: bool,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let loaded = load_or_exit(args.file.as_deref(), args.source_text.as_deref());

    let colors = Colors::new(args.color);
    let mut tracer = PrintTracer::new(args.verbosity, colors);

    let result = parse_document(&loaded, args.recursion_limit, Some(&mut tracer));
    tracer.print();

    let value = match result {
        Ok(value) => value,
        Err(e) => {
            report(&e, &loaded, args.color);
            std::process::exit(1);
        }
    };

    if args.no_result {
        return;
    }

    println!("{}---{}", colors.dim, colors.reset);
    println!("{}", value);
}
