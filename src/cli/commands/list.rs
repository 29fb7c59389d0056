//! `list` and `count` commands.
//!
//! Both load every requested wordlist with the merged filter configuration
//! and then walk each one through the [`InputProvider`] cursor.

use std::borrow::Cow;
use std::io::{self, BufWriter, Write};

use serde::Serialize;

use crate::cli::args::{CountArgs, FilterArgs, ListArgs, OutputFormat};
use crate::config::{FilterConfig, InputLimits, load_filter_config};
use crate::error::FuzzlistError;
use crate::input::{InputProvider, WordlistInput};

#[derive(Serialize)]
struct ListEntry<'a> {
    keyword: &'a str,
    total: usize,
    values: Vec<Cow<'a, str>>,
}

#[derive(Serialize)]
struct CountEntry<'a> {
    keyword: &'a str,
    total: usize,
}

/// Print every value of every wordlist.
///
/// # Errors
///
/// Returns an error if the configuration or any wordlist fails to load, or
/// if writing to stdout fails.
pub fn list(args: &ListArgs) -> Result<(), FuzzlistError> {
    let mut inputs = load_all(&args.filters)?;
    let mut out = BufWriter::new(io::stdout().lock());
    write_list(&mut out, &mut inputs, args.format)?;
    out.flush()?;
    Ok(())
}

/// Print the number of values of every wordlist.
///
/// # Errors
///
/// Returns an error if the configuration or any wordlist fails to load, or
/// if writing to stdout fails.
pub fn count(args: &CountArgs) -> Result<(), FuzzlistError> {
    let inputs = load_all(&args.filters)?;
    let mut out = BufWriter::new(io::stdout().lock());
    write_counts(&mut out, &inputs, args.format)?;
    out.flush()?;
    Ok(())
}

/// Builds the effective filter configuration from the optional YAML file
/// and the command-line flags.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be loaded.
pub fn resolve_config(filters: &FilterArgs) -> Result<FilterConfig, FuzzlistError> {
    let base = match &filters.config {
        Some(path) => load_filter_config(path)?,
        None => FilterConfig::default(),
    };
    Ok(filters.apply(base))
}

/// Loads every wordlist named in `filters`, stopping at the first failure.
///
/// # Errors
///
/// Returns an error if the configuration or any wordlist fails to load.
pub fn load_all(filters: &FilterArgs) -> Result<Vec<WordlistInput>, FuzzlistError> {
    let config = resolve_config(filters)?;
    let limits = InputLimits::from_env();
    tracing::debug!(
        marker_expansion = config.marker_expansion(),
        extensions = config.extensions.len(),
        strip_comments = config.ignore_wordlist_comments,
        exclusions = config.has_exclusions(),
        max_line_len = limits.max_line_len,
        "filter configuration resolved"
    );

    let mut inputs = Vec::with_capacity(filters.wordlists.len());
    for spec in &filters.wordlists {
        match WordlistInput::with_limits(spec.keyword.as_str(), &spec.path, &config, limits) {
            Ok(input) => {
                tracing::info!(
                    keyword = %spec.keyword,
                    path = %spec.path,
                    total = input.total(),
                    "loaded wordlist"
                );
                inputs.push(input);
            }
            Err(e) => {
                tracing::warn!(
                    keyword = %spec.keyword,
                    path = %spec.path,
                    retained = e.partial().total(),
                    error = %e,
                    "wordlist failed to load"
                );
                return Err(e.into());
            }
        }
    }
    Ok(inputs)
}

/// Writes the values of `inputs` in the requested format.
///
/// Human output is one raw value per line, prefixed with `KEYWORD: ` when
/// there is more than one wordlist.
///
/// # Errors
///
/// Returns an error if writing or JSON serialization fails.
pub fn write_list<W: Write>(
    out: &mut W,
    inputs: &mut [WordlistInput],
    format: OutputFormat,
) -> Result<(), FuzzlistError> {
    match format {
        OutputFormat::Human => {
            let prefixed = inputs.len() > 1;
            for input in inputs.iter_mut() {
                input.reset_position();
                while input.next() {
                    if prefixed {
                        write!(out, "{}: ", input.keyword())?;
                    }
                    out.write_all(input.value())?;
                    out.write_all(b"\n")?;
                    input.increment_position();
                }
            }
        }
        OutputFormat::Json => {
            let entries: Vec<ListEntry<'_>> = inputs
                .iter()
                .map(|input| ListEntry {
                    keyword: input.keyword(),
                    total: input.total(),
                    values: input
                        .values()
                        .iter()
                        .map(|v| String::from_utf8_lossy(v))
                        .collect(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Writes the value counts of `inputs` in the requested format.
///
/// # Errors
///
/// Returns an error if writing or JSON serialization fails.
pub fn write_counts<W: Write>(
    out: &mut W,
    inputs: &[WordlistInput],
    format: OutputFormat,
) -> Result<(), FuzzlistError> {
    match format {
        OutputFormat::Human => {
            for input in inputs {
                writeln!(out, "{}\t{}", input.keyword(), input.total())?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<CountEntry<'_>> = inputs
                .iter()
                .map(|input| CountEntry {
                    keyword: input.keyword(),
                    total: input.total(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}
