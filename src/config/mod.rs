//! Configuration module
//!
//! Filter configuration schema, YAML loading, scanner limits, and parsing
//! of wordlist and extension arguments.

pub mod loader;
pub mod schema;
pub mod wordlist;

pub use loader::{load_filter_config, parse_filter_config};
pub use schema::{DEFAULT_KEYWORD, DEFAULT_MAX_LINE_LEN, FilterConfig, InputLimits};
pub use wordlist::{WordlistSpec, parse_extensions};
