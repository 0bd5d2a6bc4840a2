//! Contract violations reported by tracker commands.

use thiserror::Error;

/// Errors returned when a caller breaks a command's preconditions.
///
/// A rejected command never touches the sessions or the undo/redo stacks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Page {page} out of range (expected 1..={pages})")]
    PageOutOfRange { page: usize, pages: usize },

    #[error("Entry position {position} out of range (history has {len} entries)")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Rotation must be non-negative (got {0})")]
    NegativeRotation(i64),

    #[error("Amount must be non-negative (got {0})")]
    NegativeAmount(i64),

    #[error("Command would overflow the {total} total")]
    TotalOverflow { total: &'static str },

    #[error("Command rejected with {} violations", .0.len())]
    Multiple(Vec<TrackerError>),
}

impl TrackerError {
    /// Flatten into the individual violations.
    pub fn violations(&self) -> Vec<&TrackerError> {
        match self {
            Self::Multiple(errors) => errors.iter().collect(),
            other => vec![other],
        }
    }
}
