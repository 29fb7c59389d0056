//! `tracing` subscriber setup for the `fuzzlist` binary.
//!
//! Events go to stderr so stdout carries only wordlist values. `-v` raises
//! the level of this crate's own targets one step at a time while
//! dependencies stay at `warn`; only the fourth `-v` opens every target.
//! A non-blank `FUZZLIST_LOG_LEVEL` replaces the computed filter with any
//! `EnvFilter` directive string, e.g. `fuzzlist::input::pipeline=trace` to
//! see why individual lines were dropped.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::cli::args::ColorChoice;

/// Environment variable holding a filter directive override.
pub const LOG_LEVEL_ENV: &str = "FUZZLIST_LOG_LEVEL";

const CRATE_TARGET: &str = "fuzzlist";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact text, optionally colored.
    #[default]
    Human,
    /// One JSON object per event.
    Json,
}

/// Filter directive for `verbosity` repetitions of `-v`.
#[must_use]
pub fn default_directive(verbosity: u8) -> String {
    let crate_level = match verbosity {
        0 => return "warn".to_owned(),
        1 => "info",
        2 => "debug",
        3 => "trace",
        _ => return "trace".to_owned(),
    };
    format!("warn,{CRATE_TARGET}={crate_level}")
}

/// Picks the directive to use: a non-blank override wins over verbosity.
#[must_use]
pub fn resolve_directive(verbosity: u8, env_override: Option<&str>) -> String {
    env_override
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .map_or_else(|| default_directive(verbosity), str::to_owned)
}

/// Builds the event filter for `verbosity` and an optional override.
///
/// # Errors
///
/// Returns a [`ParseError`] if the override is not a valid directive.
pub fn build_filter(verbosity: u8, env_override: Option<&str>) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(resolve_directive(verbosity, env_override))
}

fn use_ansi(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Installs the global subscriber.
///
/// An unparsable `FUZZLIST_LOG_LEVEL` is reported on stderr and ignored.
/// Later calls are no-ops.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let env_override = std::env::var(LOG_LEVEL_ENV).ok();
    let filter = build_filter(verbosity, env_override.as_deref()).unwrap_or_else(|e| {
        eprintln!("warning: ignoring invalid {LOG_LEVEL_ENV}: {e}");
        EnvFilter::new(default_directive(verbosity))
    });

    match format {
        LogFormat::Human => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .compact()
                .without_time()
                .with_ansi(use_ansi(color))
                .with_target(verbosity >= 3)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
