//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `ArenaError` via `From` impls or stay separate; both patterns are
//! acceptable — prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `arena-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `arena-*` crates.
pub type ArenaResult<T> = Result<T, ArenaError>;
