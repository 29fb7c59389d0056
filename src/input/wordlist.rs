//! Wordlist-backed input provider.

use std::io::BufRead;

use crate::config::{FilterConfig, InputLimits};
use crate::error::{InputError, LoadError};
use crate::input::InputProvider;
use crate::input::pipeline::{LoadStats, Pipeline};
use crate::input::scanner::LineScanner;
use crate::input::source::Source;

/// A wordlist loaded into memory and walked with a cursor.
///
/// The whole source is read and filtered during construction; afterwards
/// only the cursor and the enabled flag change.
#[derive(Debug, Clone)]
pub struct WordlistInput {
    active: bool,
    keyword: String,
    position: usize,
    data: Vec<Vec<u8>>,
    stats: LoadStats,
}

impl WordlistInput {
    /// Loads the wordlist at `value` (`-` for standard input) for `keyword`.
    ///
    /// Scanner limits come from the environment, see
    /// [`InputLimits::from_env`].
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the source fails validation or the read
    /// pass fails. The error still holds the source with every value
    /// produced before the failure.
    pub fn new(
        keyword: impl Into<String>,
        value: &str,
        config: &FilterConfig,
    ) -> Result<Self, LoadError> {
        Self::with_limits(keyword, value, config, InputLimits::from_env())
    }

    /// Like [`WordlistInput::new`] with explicit scanner limits.
    ///
    /// # Errors
    ///
    /// See [`WordlistInput::new`].
    pub fn with_limits(
        keyword: impl Into<String>,
        value: &str,
        config: &FilterConfig,
        limits: InputLimits,
    ) -> Result<Self, LoadError> {
        let keyword = keyword.into();
        let opened = Source::validate(value).and_then(|source| {
            tracing::debug!(keyword = %keyword, source = %source.display_name(), "opening wordlist");
            source.open()
        });
        let reader = match opened {
            Ok(reader) => reader,
            Err(e) => return Err(LoadError::new(e, Self::empty(keyword))),
        };
        Self::from_reader(keyword, reader, config, limits)
    }

    /// Loads a wordlist from an already open stream.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] holding the partial source if reading fails
    /// or a line exceeds `limits.max_line_len`.
    pub fn from_reader<R: BufRead>(
        keyword: impl Into<String>,
        reader: R,
        config: &FilterConfig,
        limits: InputLimits,
    ) -> Result<Self, LoadError> {
        let mut input = Self::empty(keyword);
        let mut pipeline = Pipeline::new(config, &input.keyword);

        let mut failure: Option<InputError> = None;
        for line in LineScanner::new(reader, limits.max_line_len) {
            match line {
                Ok(line) => pipeline.process(&line, &mut input.data),
                Err(e) => failure = Some(e),
            }
        }
        input.stats = pipeline.stats();

        tracing::debug!(
            keyword = %input.keyword,
            strategy = ?pipeline.strategy(),
            exclusion_rules = pipeline.exclusions().len(),
            lines_read = input.stats.lines_read,
            comments_dropped = input.stats.comments_dropped,
            excluded = input.stats.excluded,
            values = input.data.len(),
            "wordlist loaded"
        );

        match failure {
            Some(e) => Err(LoadError::new(e, input)),
            None => Ok(input),
        }
    }

    /// An enabled source with no values.
    pub(crate) fn empty(keyword: impl Into<String>) -> Self {
        Self {
            active: true,
            keyword: keyword.into(),
            position: 0,
            data: Vec::new(),
            stats: LoadStats::default(),
        }
    }

    /// All values in order.
    #[must_use]
    pub fn values(&self) -> &[Vec<u8>] {
        &self.data
    }

    /// Counters from the read pass.
    #[must_use]
    pub const fn stats(&self) -> LoadStats {
        self.stats
    }
}

impl InputProvider for WordlistInput {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn position(&self) -> usize {
        self.position
    }

    fn set_position(&mut self, pos: usize) {
        self.position = pos;
    }

    fn reset_position(&mut self) {
        self.position = 0;
    }

    fn next(&self) -> bool {
        self.position < self.data.len()
    }

    fn increment_position(&mut self) {
        self.position += 1;
    }

    fn value(&self) -> &[u8] {
        &self.data[self.position]
    }

    fn total(&self) -> usize {
        self.data.len()
    }

    fn active(&self) -> bool {
        self.active
    }

    fn enable(&mut self) {
        self.active = true;
    }

    fn disable(&mut self) {
        self.active = false;
    }
}
