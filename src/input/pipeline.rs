//! Per-line transform pipeline.
//!
//! Every raw line goes through one of two strategies, chosen once per
//! source from the filter configuration:
//!
//! - [`LineStrategy::MarkerExpansion`]: lines holding `%EXT%` (any case)
//!   fan out into one value per extension. Other lines are only
//!   comment-stripped; category exclusion does not apply to them.
//! - [`LineStrategy::Filtered`]: lines are comment-stripped, checked
//!   against the exclusion rules, and, for the `FUZZ` keyword, followed by
//!   one suffixed copy per extension.

use std::sync::LazyLock;

use regex::bytes::{NoExpand, Regex};

use crate::config::{DEFAULT_KEYWORD, FilterConfig};
use crate::input::comments::strip_comments;
use crate::input::exclusion::ExclusionRules;

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)%ext%").expect("valid regex"));

/// How lines of one source are turned into values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStrategy {
    /// Substitute each extension for the `%EXT%` marker.
    MarkerExpansion,
    /// Strip, exclude, and optionally append each extension.
    Filtered {
        /// Append every extension to each kept line.
        suffix: bool,
    },
}

impl LineStrategy {
    /// Picks the strategy for a source bound to `keyword`.
    #[must_use]
    pub fn select(config: &FilterConfig, keyword: &str) -> Self {
        if config.marker_expansion() {
            Self::MarkerExpansion
        } else {
            Self::Filtered {
                suffix: keyword == DEFAULT_KEYWORD && !config.extensions.is_empty(),
            }
        }
    }
}

/// Counters gathered during one read pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Raw lines read from the source.
    pub lines_read: usize,
    /// Lines dropped as full-line comments.
    pub comments_dropped: usize,
    /// Lines dropped by category exclusion, blank lines included.
    pub excluded: usize,
    /// Values produced.
    pub emitted: usize,
}

/// Turns raw lines into values for one source.
#[derive(Debug)]
pub struct Pipeline<'a> {
    config: &'a FilterConfig,
    strategy: LineStrategy,
    exclusions: ExclusionRules,
    stats: LoadStats,
}

impl<'a> Pipeline<'a> {
    /// Builds the pipeline for a source bound to `keyword`.
    #[must_use]
    pub fn new(config: &'a FilterConfig, keyword: &str) -> Self {
        Self {
            config,
            strategy: LineStrategy::select(config, keyword),
            exclusions: ExclusionRules::from_config(config),
            stats: LoadStats::default(),
        }
    }

    /// The strategy in use.
    #[must_use]
    pub const fn strategy(&self) -> LineStrategy {
        self.strategy
    }

    /// The enabled exclusion rules.
    #[must_use]
    pub const fn exclusions(&self) -> &ExclusionRules {
        &self.exclusions
    }

    /// Counters so far.
    #[must_use]
    pub const fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Runs one raw line through the pipeline, appending its values to `out`.
    pub fn process(&mut self, line: &[u8], out: &mut Vec<Vec<u8>>) {
        self.stats.lines_read += 1;
        let before = out.len();
        match self.strategy {
            LineStrategy::MarkerExpansion => self.expand_marker(line, out),
            LineStrategy::Filtered { suffix } => self.filter(line, suffix, out),
        }
        self.stats.emitted += out.len() - before;
    }

    fn expand_marker(&mut self, line: &[u8], out: &mut Vec<Vec<u8>>) {
        if MARKER_RE.is_match(line) {
            out.extend(self.config.extensions.iter().map(|ext| {
                MARKER_RE
                    .replace_all(line, NoExpand(ext.as_bytes()))
                    .into_owned()
            }));
            return;
        }

        if let Some(text) = self.strip(line) {
            out.push(text.to_vec());
        }
    }

    fn filter(&mut self, line: &[u8], suffix: bool, out: &mut Vec<Vec<u8>>) {
        let Some(text) = self.strip(line) else {
            return;
        };

        if let Some(reason) = self.exclusions.check(text) {
            self.stats.excluded += 1;
            tracing::trace!(
                line = self.stats.lines_read,
                %reason,
                "excluded wordlist line"
            );
            return;
        }

        out.push(text.to_vec());
        if suffix {
            out.extend(self.config.extensions.iter().map(|ext| {
                let mut value = Vec::with_capacity(text.len() + ext.len());
                value.extend_from_slice(text);
                value.extend_from_slice(ext.as_bytes());
                value
            }));
        }
    }

    /// Applies comment stripping when enabled; `None` drops the line.
    fn strip<'l>(&mut self, line: &'l [u8]) -> Option<&'l [u8]> {
        if !self.config.ignore_wordlist_comments {
            return Some(line);
        }
        let stripped = strip_comments(line);
        if stripped.is_none() {
            self.stats.comments_dropped += 1;
            tracing::trace!(line = self.stats.lines_read, "dropped comment line");
        }
        stripped
    }
}
