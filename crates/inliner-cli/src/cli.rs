//! Command tree

use clap::{value_parser, Arg, ArgAction, Command};
use inliner_core::DEFAULT_MARKER;
use std::path::PathBuf;

/// Build the `inliner` command
pub fn build() -> Command {
    Command::new("inliner")
        .version(inliner_core::VERSION)
        .about("Inline binary assets into text as base64")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .global(true)
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_parser(["compact", "json"])
                .default_value("compact")
                .global(true)
                .help("Log output format on stderr"),
        )
        .subcommand(
            Command::new("embed")
                .about("Embed a WASM module into an HTML template as base64")
                .arg(
                    Arg::new("wasm_file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("WASM file path"),
                )
                .arg(
                    Arg::new("html_file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("HTML template path"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(value_parser!(PathBuf))
                        .help("Output HTML path (default: overwrite the template)"),
                )
                .arg(
                    Arg::new("marker")
                        .long("marker")
                        .default_value(DEFAULT_MARKER)
                        .help("Placeholder text replaced by the encoded module"),
                )
                .arg(
                    Arg::new("allow-missing-marker")
                        .long("allow-missing-marker")
                        .action(ArgAction::SetTrue)
                        .help("Write the template unchanged when the marker is absent"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("data-url")
                .about("Convert an image to a base64 data URL")
                .arg(
                    Arg::new("image")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Image path (png, jpg, jpeg, gif, svg)"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(value_parser!(PathBuf))
                        .help("Text file to write the data URL to (default: print it)"),
                )
                .arg(json_flag()),
        )
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print a JSON report instead of a status line")
}
