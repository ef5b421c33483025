//! inliner command-line front end
//!
//! Two subcommands over [`inliner_core`]:
//! - `embed`: splice a WASM module into an HTML template
//! - `data-url`: convert an image to a `data:` URL

#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod logging;

use clap::ArgMatches;
use std::io::Write;

pub use commands::dispatch;
pub use logging::{LogFormat, LogLevel, LogOptions};

/// Install logging from the global flags and run the selected subcommand
///
/// # Errors
/// Returns the subcommand's error
pub fn execute(matches: &ArgMatches, out: &mut dyn Write) -> anyhow::Result<()> {
    logging::init(&LogOptions::from_matches(matches));
    dispatch(matches, out)
}

/// Parse `argv`, then [`execute`]
///
/// # Errors
/// Returns clap's error for bad arguments, otherwise the subcommand's error
pub fn run<I, T>(argv: I, out: &mut dyn Write) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = cli::build().try_get_matches_from(argv)?;
    execute(&matches, out)
}
