//! CLI argument definitions
//!
//! All Clap derive structs for `fuzzlist` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::{FilterConfig, WordlistSpec, parse_extensions};
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Load, filter and inspect fuzzing wordlists.
#[derive(Parser, Debug)]
#[command(name = "fuzzlist", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "FUZZLIST_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "FUZZLIST_LOG_FORMAT")]
    pub log_format: LogFormatArg,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every value produced by the wordlists.
    List(ListArgs),

    /// Print the number of values per wordlist.
    Count(CountArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Wordlist selection and filters.
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `count`.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Wordlist selection and filters.
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `version`.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Filter Arguments
// ============================================================================

/// Wordlists plus the filter toggles applied while loading them.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Wordlist as PATH[:KEYWORD]; `-` reads stdin. Keyword defaults to FUZZ.
    #[arg(short, long = "wordlist", value_name = "PATH[:KEYWORD]", required = true)]
    pub wordlists: Vec<WordlistSpec>,

    /// YAML filter configuration; flags below are applied on top of it.
    #[arg(long, env = "FUZZLIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Comma-separated extensions, e.g. `.php,.bak`.
    #[arg(short, long, value_name = "LIST")]
    pub extensions: Option<String>,

    /// Substitute extensions for the %EXT% marker instead of suffixing.
    #[arg(short = 'D', long)]
    pub dirsearch_compat: bool,

    /// Ignore wordlist comments.
    #[arg(long = "ic")]
    pub ignore_comments: bool,

    /// Exclude lines starting with `#`, `~` or `/`.
    #[arg(long = "xc-c")]
    pub exclude_comment_lines: bool,

    /// Exclude lines starting with `.`.
    #[arg(long = "xc-d")]
    pub exclude_dot_lines: bool,

    /// Exclude lines starting with a digit.
    #[arg(long = "xc-n")]
    pub exclude_number_lines: bool,

    /// Exclude lines that are entirely uppercase.
    #[arg(long = "xc-upper")]
    pub exclude_uppercase: bool,

    /// Exclude lines that are entirely lowercase.
    #[arg(long = "xc-lower")]
    pub exclude_lowercase: bool,

    /// Exclude lines starting with an uppercase letter.
    #[arg(long = "xc-s-upper")]
    pub exclude_start_upper: bool,

    /// Exclude lines starting with a lowercase letter.
    #[arg(long = "xc-s-lower")]
    pub exclude_start_lower: bool,
}

impl FilterArgs {
    /// Applies the command-line flags over `base`.
    ///
    /// Toggles are OR-ed in; an extension list given on the command line
    /// replaces the one in `base`.
    #[must_use]
    pub fn apply(&self, mut base: FilterConfig) -> FilterConfig {
        if let Some(list) = &self.extensions {
            base.extensions = parse_extensions(list);
        }
        base.dirsearch_compat |= self.dirsearch_compat;
        base.ignore_wordlist_comments |= self.ignore_comments;
        base.exclude_comment_lines |= self.exclude_comment_lines;
        base.exclude_dot_lines |= self.exclude_dot_lines;
        base.exclude_number_lines |= self.exclude_number_lines;
        base.exclude_uppercase |= self.exclude_uppercase;
        base.exclude_lowercase |= self.exclude_lowercase;
        base.exclude_start_upper |= self.exclude_start_upper;
        base.exclude_start_lower |= self.exclude_start_lower;
        base
    }
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Log format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormatArg {
    /// Human-readable log lines.
    #[default]
    Human,
    /// Newline-delimited JSON log records.
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Human => Self::Human,
            LogFormatArg::Json => Self::Json,
        }
    }
}
