use std::path::PathBuf;

use super::run_common::{load_or_exit, parse_document, report};

pub struct CheckArgs {
    pub file: Option<PathBuf>,
    pub source_text: Option<String>,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let loaded = load_or_exit(args.file.as_deref(), args.source_text.as_deref());

    if let Err(e) = parse_document(&loaded, args.recursion_limit, None) {
        report(&e, &loaded, args.color);
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
