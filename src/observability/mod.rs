//! Observability module
//!
//! Structured logging for wordlist loading and the CLI.

pub mod logging;

pub use logging::{LOG_LEVEL_ENV, LogFormat, init_logging};
