//! Filter configuration loader
//!
//! Reads a YAML filter configuration from disk. Missing and unreadable
//! files are distinguished so the CLI can report them precisely.

use std::path::Path;

use crate::config::schema::FilterConfig;
use crate::error::ConfigError;

/// Loads a [`FilterConfig`] from a YAML file.
///
/// A file that is empty or holds only whitespace and comments yields the
/// default configuration.
///
/// # Errors
///
/// Returns an error if:
/// - the file does not exist
/// - the file cannot be read
/// - the YAML is malformed or names an unknown field
pub fn load_filter_config(path: &Path) -> Result<FilterConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Unreadable {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let config = parse_filter_config(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        extensions = config.extensions.len(),
        dirsearch_compat = config.dirsearch_compat,
        "loaded filter configuration"
    );
    Ok(config)
}

/// Parses YAML text into a [`FilterConfig`].
///
/// `path` is only used for error reporting.
///
/// # Errors
///
/// Returns [`ConfigError::ParseError`] if the YAML is malformed.
pub fn parse_filter_config(content: &str, path: &Path) -> Result<FilterConfig, ConfigError> {
    let is_blank = content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'));
    if is_blank {
        return Ok(FilterConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        line: e.location().map(|loc| loc.line()),
        message: e.to_string(),
    })
}

/// Reads an environment variable, falling back to `default` when unset or
/// unparseable.
pub(crate) fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
