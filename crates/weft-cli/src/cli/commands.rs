//! Command builders for the CLI.

use clap::Command;

use super::args::*;

fn with_input_args(cmd: Command) -> Command {
    cmd.arg(file_arg())
        .arg(source_text_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
}

/// Add hidden dump args (for commands that don't print the document).
fn with_hidden_dump_args(cmd: Command) -> Command {
    cmd.arg(pretty_arg().hide(true))
}

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
        .arg(no_result_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("weft")
        .about("Parse JSON documents with backtracking parser combinators")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(trace_command())
}

/// Validate a document. Silent on success.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a JSON document")
        .override_usage(
            "\
  weft check <FILE>
  weft check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  weft check data.json                 # exit 1 with a diagnostic on error
  weft check -s '[1, 2,, 3]'           # inline document
  cat data.json | weft check -         # stdin"#,
        );

    with_hidden_trace_args(with_hidden_dump_args(with_input_args(cmd)))
}

/// Parse and re-serialize a document.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Parse a document and print it back")
        .override_usage(
            "\
  weft dump <FILE> [--pretty]
  weft dump -s <TEXT> [--pretty]",
        )
        .after_help(
            r#"EXAMPLES:
  weft dump data.json                  # compact
  weft dump data.json --pretty         # indented
  weft dump -s '{"a": [1, 2]}'"#,
        )
        .arg(pretty_arg());

    with_hidden_trace_args(with_input_args(cmd))
}

/// Parse a document while printing parser activity.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace the parser over a document")
        .override_usage(
            "\
  weft trace <FILE> [-v|-vv]
  weft trace -s <TEXT> [-v|-vv]",
        )
        .after_help(
            r#"EXAMPLES:
  weft trace -s '[1, true]'            # rules entered and left
  weft trace -s '[1, true]' -v         # also alternation branches
  weft trace data.json -vv --no-result # every consumed token"#,
        )
        .arg(verbose_arg())
        .arg(no_result_arg());

    with_hidden_dump_args(with_input_args(cmd))
}
