//! Error types for `fuzzlist`
//!
//! Configuration errors, wordlist input errors, and the top-level error
//! used by the CLI to pick a process exit code.

use std::path::PathBuf;
use thiserror::Error;

use crate::input::WordlistInput;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `fuzzlist` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, invalid wordlist spec)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (wordlist missing, unreadable, or failed mid-read)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `fuzzlist` operations.
#[derive(Debug, Error)]
pub enum FuzzlistError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Wordlist failed to load
    #[error(transparent)]
    Load(#[from] LoadError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FuzzlistError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::Load(_) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Filter configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Referenced configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Configuration file exists but could not be read
    #[error("cannot read {path}: {source}")]
    Unreadable {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

// ============================================================================
// Input Errors
// ============================================================================

/// Wordlist source errors.
///
/// Validation failures (`NotFound`, `Unreadable`) happen before any line is
/// read. Scan failures (`Read`, `LineTooLong`) end the read pass early.
#[derive(Debug, Error)]
pub enum InputError {
    /// The wordlist path does not exist
    #[error("wordlist not found: {path}")]
    NotFound {
        /// Path given for the wordlist
        path: PathBuf,
    },

    /// The wordlist exists but cannot be inspected or opened
    #[error("cannot open wordlist {path}: {source}")]
    Unreadable {
        /// Path given for the wordlist
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The stream failed while being scanned
    #[error("wordlist read failed: {0}")]
    Read(#[from] std::io::Error),

    /// A line did not fit in the scanner buffer
    #[error("line {line} exceeds the maximum length of {limit} bytes")]
    LineTooLong {
        /// One-based number of the offending line
        line: usize,
        /// Configured maximum line length in bytes
        limit: usize,
    },
}

impl InputError {
    /// Returns `true` for failures that happened before reading began.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Unreadable { .. })
    }
}

/// A wordlist that failed to load, together with whatever it held when the
/// failure occurred.
///
/// The retained source is empty for validation failures and holds every
/// value produced before the failing line for scan failures.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct LoadError {
    #[source]
    source: InputError,
    partial: Box<WordlistInput>,
}

impl LoadError {
    pub(crate) fn new(source: InputError, partial: WordlistInput) -> Self {
        Self {
            source,
            partial: Box::new(partial),
        }
    }

    /// The underlying input error.
    #[must_use]
    pub const fn kind(&self) -> &InputError {
        &self.source
    }

    /// The partially loaded source.
    #[must_use]
    pub fn partial(&self) -> &WordlistInput {
        &self.partial
    }

    /// Consumes the error, returning the partially loaded source.
    #[must_use]
    pub fn into_partial(self) -> WordlistInput {
        *self.partial
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `fuzzlist` operations.
pub type Result<T> = std::result::Result<T, FuzzlistError>;

// ============================================================================
// Tests
// ============================================================================
