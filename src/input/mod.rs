//! Wordlist input providers
//!
//! Loads newline-delimited wordlists, runs each line through the transform
//! pipeline, and exposes the resulting values through a cursor that a job
//! dispatcher pulls from one value at a time.
//!
//! The read pass is synchronous and completes inside the constructor.
//! Cursor mutators take `&mut self`; callers sharing a provider across
//! workers must supply their own synchronization.

pub mod comments;
pub mod exclusion;
pub mod pipeline;
pub mod scanner;
pub mod source;
pub mod wordlist;

pub use comments::strip_comments;
pub use exclusion::{ExclusionReason, ExclusionRules, should_exclude};
pub use pipeline::{LineStrategy, LoadStats, Pipeline};
pub use scanner::LineScanner;
pub use source::{STDIN_SENTINEL, Source};
pub use wordlist::WordlistInput;

/// Cursor-based access to an ordered list of input values.
///
/// Positions are zero-based. `set_position` does no bounds checking and
/// `value` panics when the position is past the end, so drivers should
/// gate every `value` call on `next`.
pub trait InputProvider {
    /// Keyword this provider substitutes into request templates.
    fn keyword(&self) -> &str;

    /// Current cursor position.
    fn position(&self) -> usize;

    /// Moves the cursor to `pos`.
    fn set_position(&mut self, pos: usize);

    /// Moves the cursor back to the first value.
    fn reset_position(&mut self);

    /// Returns `true` while the cursor points at a value.
    fn next(&self) -> bool;

    /// Advances the cursor by one.
    fn increment_position(&mut self);

    /// Value under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the position is not below [`InputProvider::total`].
    fn value(&self) -> &[u8];

    /// Number of values.
    fn total(&self) -> usize;

    /// Whether the driver should consult this provider. Advisory only.
    fn active(&self) -> bool;

    /// Marks the provider as active.
    fn enable(&mut self);

    /// Marks the provider as inactive.
    fn disable(&mut self);
}
