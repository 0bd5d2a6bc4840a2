//! Builder for constructing trackers.

use crate::config::error::BuildError;
use crate::config::{ContinuationPolicy, TrackerConfig, UndoScope};
use crate::engine::Tracker;

/// Builder for constructing a [`Tracker`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use rotation_tracker::config::{ContinuationPolicy, TrackerBuilder, UndoScope};
///
/// let tracker = TrackerBuilder::new()
///     .continuation_policy(ContinuationPolicy::Legacy)
///     .undo_scope(UndoScope::ActivePage)
///     .history_limit(50)
///     .build()
///     .unwrap();
///
/// assert_eq!(tracker.config().history_limit, Some(50));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TrackerBuilder {
    config: TrackerConfig,
}

impl TrackerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config.
    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn continuation_policy(mut self, policy: ContinuationPolicy) -> Self {
        self.config.continuation_policy = policy;
        self
    }

    pub fn undo_scope(mut self, scope: UndoScope) -> Self {
        self.config.undo_scope = scope;
        self
    }

    /// Cap each undo/redo stack at `limit` snapshots.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Keep every snapshot.
    pub fn unbounded_history(mut self) -> Self {
        self.config.history_limit = None;
        self
    }

    /// Build the tracker.
    /// Returns an error if the config is inconsistent.
    pub fn build(self) -> Result<Tracker, BuildError> {
        self.config.validate()?;
        Ok(Tracker::with_config(self.config))
    }
}
