//! Tracker configuration and builder.
//!
//! Two behaviors have more than one reasonable reading, so they are explicit
//! settings rather than hidden choices:
//!
//! - [`ContinuationPolicy`]: what a continuation start does on an empty page
//! - [`UndoScope`]: which page undo and redo restore into
//!
//! # Example
//!
//! ```rust
//! use rotation_tracker::config::{ContinuationPolicy, TrackerConfig, UndoScope};
//!
//! let config = TrackerConfig::from_json(r#"{ "continuation_policy": "legacy" }"#).unwrap();
//! assert_eq!(config.continuation_policy, ContinuationPolicy::Legacy);
//! assert_eq!(config.undo_scope, UndoScope::SnapshotPage);
//! assert_eq!(config.history_limit, None);
//! ```

pub mod builder;
pub mod error;

pub use builder::TrackerBuilder;
pub use error::BuildError;

use serde::{Deserialize, Serialize};

/// What a continuation start does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuationPolicy {
    /// Always append a zero-cost, zero-delta marker entry. The baseline is
    /// never touched, so history indexing is the same on every page.
    #[default]
    Uniform,

    /// On an empty page, move the baseline instead of appending an entry.
    /// On a non-empty page, append a marker like `Uniform`.
    Legacy,
}

/// Which page undo and redo restore into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndoScope {
    /// Restore into the page that was active when the snapshot was taken,
    /// and make that page active again.
    #[default]
    SnapshotPage,

    /// Restore into whichever page is active at undo/redo time.
    ActivePage,
}

/// Settings for a [`Tracker`](crate::engine::Tracker).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub continuation_policy: ContinuationPolicy,
    pub undo_scope: UndoScope,
    /// Maximum snapshots kept per stack; `None` keeps everything
    pub history_limit: Option<usize>,
}

impl TrackerConfig {
    /// Parse a JSON config, filling missing keys with defaults.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.history_limit == Some(0) {
            return Err(BuildError::ZeroHistoryLimit);
        }
        Ok(())
    }
}
