use std::path::PathBuf;

use super::run_common::{load_or_exit, parse_document, report};

pub struct DumpArgs {
    pub file: Option<PathBuf>,
    pub source_text: Option<String>,
    pub recursion_limit: Option<u32>,
    pub pretty: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let loaded = load_or_exit(args.file.as_deref(), args.source_text.as_deref());

    let value = match parse_document(&loaded, args.recursion_limit, None) {
        Ok(value) => value,
        Err(e) => {
            report(&e, &loaded, args.color);
            std::process::exit(1);
        }
    };

    if !args.pretty {
        println!("{}", value);
        return;
    }

    match serde_json::to_string_pretty(&value) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("error: failed to serialize document: {}", e);
            std::process::exit(2);
        }
    }
}
