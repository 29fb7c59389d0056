//! Filter configuration schema.
//!
//! `FilterConfig` is the read-only snapshot every wordlist source is built
//! from. It is passed by reference at construction and never stored.

use serde::{Deserialize, Serialize};

/// Keyword that enables suffix-style extension expansion.
pub const DEFAULT_KEYWORD: &str = "FUZZ";

/// Default maximum line length accepted by the wordlist scanner.
pub const DEFAULT_MAX_LINE_LEN: usize = 64 * 1024;

/// Per-line transformation and exclusion settings for wordlists.
///
/// Every toggle defaults to `false` and the extension list defaults to
/// empty, which makes the pipeline a pass-through apart from dropping
/// blank lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Extensions used for `%EXT%` substitution or `FUZZ` suffixing, in order.
    pub extensions: Vec<String>,

    /// Expand the `%EXT%` marker instead of suffixing.
    ///
    /// Only takes effect when `extensions` is non-empty.
    pub dirsearch_compat: bool,

    /// Drop full-line comments and cut trailing ` #` comments.
    pub ignore_wordlist_comments: bool,

    /// Exclude lines starting with `#`, `~` or `/`.
    pub exclude_comment_lines: bool,

    /// Exclude lines starting with `.`.
    pub exclude_dot_lines: bool,

    /// Exclude lines starting with an ASCII digit.
    pub exclude_number_lines: bool,

    /// Exclude lines whose letters are all uppercase.
    pub exclude_uppercase: bool,

    /// Exclude lines whose letters are all lowercase.
    pub exclude_lowercase: bool,

    /// Exclude lines starting with an uppercase letter.
    pub exclude_start_upper: bool,

    /// Exclude lines starting with a lowercase letter.
    pub exclude_start_lower: bool,
}

impl FilterConfig {
    /// Returns `true` when `%EXT%` marker expansion applies.
    #[must_use]
    pub fn marker_expansion(&self) -> bool {
        self.dirsearch_compat && !self.extensions.is_empty()
    }

    /// Returns `true` when any category exclusion toggle is set.
    #[must_use]
    pub const fn has_exclusions(&self) -> bool {
        self.exclude_comment_lines
            || self.exclude_dot_lines
            || self.exclude_number_lines
            || self.exclude_uppercase
            || self.exclude_lowercase
            || self.exclude_start_upper
            || self.exclude_start_lower
    }
}

/// Resource limits for the wordlist scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    /// Longest accepted line in bytes, `\n` or `\r\n` terminator excluded.
    pub max_line_len: usize,
}

impl InputLimits {
    /// Loads limits from environment variables with defaults.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `FUZZLIST_MAX_LINE_LEN` | 64 KiB |
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_line_len: super::loader::env_or("FUZZLIST_MAX_LINE_LEN", DEFAULT_MAX_LINE_LEN),
        }
    }
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_pass_through() {
        let config = FilterConfig::default();
        assert!(config.extensions.is_empty());
        assert!(!config.marker_expansion());
        assert!(!config.has_exclusions());
        assert!(!config.ignore_wordlist_comments);
    }

    #[test]
    fn marker_expansion_needs_extensions() {
        let mut config = FilterConfig {
            dirsearch_compat: true,
            ..FilterConfig::default()
        };
        assert!(!config.marker_expansion());
        config.extensions.push("php".to_string());
        assert!(config.marker_expansion());
    }

    #[test]
    fn any_exclusion_toggle_counts() {
        let config = FilterConfig {
            exclude_start_lower: true,
            ..FilterConfig::default()
        };
        assert!(config.has_exclusions());
    }

    #[test]
    fn deserialize_partial_yaml() {
        let config: FilterConfig = serde_yaml::from_str(
            "extensions: [.php, .bak]\nignore_wordlist_comments: true\n",
        )
        .unwrap();
        assert_eq!(config.extensions, vec![".php", ".bak"]);
        assert!(config.ignore_wordlist_comments);
        assert!(!config.dirsearch_compat);
    }

    #[test]
    fn deserialize_rejects_unknown_fields() {
        let result: Result<FilterConfig, _> = serde_yaml::from_str("exclude_everything: true\n");
        assert!(result.is_err());
    }

    #[test]
    fn default_limits() {
        assert_eq!(InputLimits::default().max_line_len, 65_536);
    }
}
