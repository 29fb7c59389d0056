//! Wordlist and extension arguments.
//!
//! Parses the `PATH[:KEYWORD]` form used to bind a wordlist to a keyword,
//! and the comma-separated extension list.

use std::str::FromStr;

use crate::config::schema::DEFAULT_KEYWORD;
use crate::error::ConfigError;

/// A wordlist path bound to the keyword it substitutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordlistSpec {
    /// File path, or `-` for standard input.
    pub path: String,
    /// Keyword the values are substituted for.
    pub keyword: String,
}

impl WordlistSpec {
    /// Parses `PATH[:KEYWORD]`.
    ///
    /// The text is split at its last `:`. The tail is taken as the keyword
    /// only if it is non-empty and holds no path separator, so Windows
    /// drive prefixes like `C:\lists\words.txt` stay part of the path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the path part is empty.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let (path, keyword) = match text.rsplit_once(':') {
            Some((path, keyword))
                if !keyword.is_empty() && !keyword.contains(['/', '\\']) =>
            {
                (path, keyword)
            }
            _ => (text, DEFAULT_KEYWORD),
        };

        if path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "wordlist".to_string(),
                value: text.to_string(),
                expected: "PATH[:KEYWORD] with a non-empty path".to_string(),
            });
        }

        Ok(Self {
            path: path.to_string(),
            keyword: keyword.to_string(),
        })
    }
}

impl FromStr for WordlistSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Splits a comma-separated extension list.
///
/// Items are trimmed and empty items dropped; order is preserved.
#[must_use]
pub fn parse_extensions(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
        .collect()
}
