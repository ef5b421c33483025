//! Diagnostic logging on stderr
//!
//! `RUST_LOG` takes precedence over the level chosen on the command line.

use clap::ArgMatches;
use std::fmt::{self, Display, Formatter};

/// Log level selected by `-q` / `-v`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Level for a `-v` count, or `Error` when quiet
    #[must_use]
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Error;
        }
        match verbose {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl LogOptions {
    /// Read the global logging flags
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let verbose = matches.get_count("verbose");
        let quiet = matches.get_flag("quiet");
        let format = match matches.get_one::<String>("log-format").map(String::as_str) {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        };
        Self {
            level: LogLevel::from_flags(verbose, quiet),
            format,
        }
    }
}

/// Install the global subscriber; later calls are ignored
pub fn init(options: &LogOptions) {
    use std::io::IsTerminal;
    use std::sync::OnceLock;
    use tracing_subscriber::{fmt, EnvFilter};

    static INITIALISED: OnceLock<()> = OnceLock::new();

    INITIALISED.get_or_init(|| {
        let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(options.level.to_string()));
        let builder = fmt::fmt()
            .with_env_filter(filter)
            .with_ansi(use_ansi)
            .with_writer(std::io::stderr)
            .with_target(false);

        let installed = match options.format {
            LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
            LogFormat::Compact => tracing::subscriber::set_global_default(builder.compact().finish()),
        };
        if installed.is_err() {
            tracing::debug!("global subscriber already installed, keeping it");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_from_flags() {
        assert_eq!(LogLevel::from_flags(0, false), LogLevel::Warn);
        assert_eq!(LogLevel::from_flags(1, false), LogLevel::Info);
        assert_eq!(LogLevel::from_flags(2, false), LogLevel::Debug);
        assert_eq!(LogLevel::from_flags(7, false), LogLevel::Trace);
        assert_eq!(LogLevel::from_flags(0, true), LogLevel::Error);
    }

    #[test]
    fn options_from_matches() {
        let matches = crate::cli::build()
            .try_get_matches_from(["inliner", "-vv", "--log-format", "json", "data-url", "a.png"])
            .unwrap();
        let options = LogOptions::from_matches(&matches);
        assert_eq!(options.level, LogLevel::Debug);
        assert_eq!(options.format, LogFormat::Json);
    }

    #[test]
    fn init_is_idempotent() {
        let options = LogOptions {
            level: LogLevel::Warn,
            format: LogFormat::Compact,
        };
        init(&options);
        init(&options);
    }

    #[test]
    fn init_keeps_existing_subscriber() {
        let _ = tracing::subscriber::set_global_default(tracing_subscriber::registry());
        init(&LogOptions {
            level: LogLevel::Debug,
            format: LogFormat::Json,
        });
        tracing::debug!("still logging");
    }
}
