//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod list;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::FuzzlistError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), FuzzlistError> {
    match cli.command {
        Commands::List(args) => list::list(&args),
        Commands::Count(args) => list::count(&args),
        Commands::Version(args) => version::run(&args),
    }
}
