//! `fuzzlist` - wordlist input provider for keyword-substitution fuzzers
//!
//! Loads newline-delimited wordlists from files or standard input, runs
//! each line through comment stripping, category exclusion and extension
//! expansion, and hands the resulting values to a job dispatcher through
//! the cursor-based [`input::InputProvider`] trait.
//!
//! ```no_run
//! use fuzzlist::config::FilterConfig;
//! use fuzzlist::input::{InputProvider, WordlistInput};
//!
//! let config = FilterConfig {
//!     extensions: vec![".bak".to_string()],
//!     ignore_wordlist_comments: true,
//!     ..FilterConfig::default()
//! };
//! let mut words = WordlistInput::new("FUZZ", "common.txt", &config)?;
//! while words.next() {
//!     let _value: &[u8] = words.value();
//!     words.increment_position();
//! }
//! # Ok::<(), fuzzlist::error::LoadError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod observability;
