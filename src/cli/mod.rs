//! Command-line interface
//!
//! Argument definitions and command handlers for the `fuzzlist` binary.

pub mod args;
pub mod commands;
