//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when building a tracker or loading its config.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("History limit must be at least 1. Use None for an unbounded history")]
    ZeroHistoryLimit,

    #[error("Invalid tracker configuration: {0}")]
    InvalidConfig(String),
}
