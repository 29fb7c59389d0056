//! `version` command.
//!
//! Alongside the package version, reports the built-in defaults a caller
//! needs to reproduce a load: the default keyword and the scanner's line
//! limit after `FUZZLIST_MAX_LINE_LEN` is applied.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::config::{DEFAULT_KEYWORD, InputLimits};
use crate::error::FuzzlistError;

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    default_keyword: &'static str,
    max_line_len: usize,
}

impl VersionInfo {
    fn current(limits: InputLimits) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            default_keyword: DEFAULT_KEYWORD,
            max_line_len: limits.max_line_len,
        }
    }
}

/// Print version information.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn run(args: &VersionArgs) -> Result<(), FuzzlistError> {
    let info = VersionInfo::current(InputLimits::from_env());
    write_version(&mut io::stdout().lock(), &info, args.format)
}

fn write_version<W: Write>(
    out: &mut W,
    info: &VersionInfo,
    format: OutputFormat,
) -> Result<(), FuzzlistError> {
    match format {
        OutputFormat::Human => {
            writeln!(out, "{} {}", info.name, info.version)?;
            writeln!(out, "default keyword: {}", info.default_keyword)?;
            writeln!(out, "max line length: {}", info.max_line_len)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, info)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(limits: InputLimits, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_version(&mut out, &VersionInfo::current(limits), format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn human_lists_defaults() {
        let text = render(InputLimits { max_line_len: 128 }, OutputFormat::Human);
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(format!("fuzzlist {}", env!("CARGO_PKG_VERSION")).as_str())
        );
        assert_eq!(lines.next(), Some("default keyword: FUZZ"));
        assert_eq!(lines.next(), Some("max line length: 128"));
    }

    #[test]
    fn json_reports_effective_limit() {
        let text = render(InputLimits::default(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["name"], "fuzzlist");
        assert_eq!(parsed["default_keyword"], "FUZZ");
        assert_eq!(parsed["max_line_len"], 64 * 1024);
    }
}
