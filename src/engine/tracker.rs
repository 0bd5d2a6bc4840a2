//! The tracker: owns the pages and the undo history, and is the only path
//! through which a session changes.

use crate::config::{TrackerBuilder, TrackerConfig, UndoScope};
use crate::core::{Session, SessionReport};
use crate::engine::command::{Command, CommandOutcome};
use crate::engine::history::{Snapshot, UndoHistory};
use crate::error::TrackerError;
use crate::store::{PageIndex, SessionStore};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Rotation tracker for one user's interaction context.
///
/// Every mutating command follows the same sequence: check arguments,
/// snapshot the active page onto the undo stack, clear the redo stack,
/// then mutate. Rejected commands and no-ops touch nothing.
///
/// # Example
///
/// ```rust
/// use rotation_tracker::Tracker;
///
/// let mut tracker = Tracker::new();
/// tracker.continuation_start(100).unwrap();
/// tracker.record_top_up(150, 1000).unwrap();
/// assert_eq!(tracker.active().total_rotation(), 50);
///
/// tracker.undo();
/// assert_eq!(tracker.active().total_rotation(), 0);
///
/// tracker.redo();
/// assert_eq!(tracker.active().total_rate(), 50.0);
/// ```
#[derive(Clone, Debug)]
pub struct Tracker {
    id: Uuid,
    config: TrackerConfig,
    store: SessionStore,
    history: UndoHistory,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracker {
    /// Create a tracker with the default config.
    pub fn new() -> Self {
        Self::with_config(TrackerConfig::default())
    }

    pub fn builder() -> TrackerBuilder {
        TrackerBuilder::new()
    }

    pub(crate) fn with_config(config: TrackerConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            history: UndoHistory::new(config.history_limit),
            store: SessionStore::new(),
            config,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Select the active page by its 1-based number.
    pub fn select_page(&mut self, number: usize) -> Result<(), TrackerError> {
        let page = PageIndex::from_number(number)?;
        self.store.select(page);
        debug!(tracker = %self.id, page = %page, "Page selected");
        Ok(())
    }

    pub fn active_page(&self) -> PageIndex {
        self.store.active_page()
    }

    pub fn active(&self) -> &Session {
        self.store.active()
    }

    pub fn session(&self, page: PageIndex) -> &Session {
        self.store.session(page)
    }

    /// Report for the active page.
    pub fn report(&self) -> SessionReport {
        self.active().report()
    }

    /// Run a mutating command against the active page.
    pub fn execute(&mut self, command: Command) -> Result<CommandOutcome, TrackerError> {
        let page = self.store.active_page();
        let session = self.store.active();

        if let Err(err) = command.validate(session) {
            warn!(
                tracker = %self.id,
                page = %page,
                command = command.name(),
                error = %err,
                "Command rejected"
            );
            return Err(err);
        }

        if command.is_noop(session) {
            debug!(tracker = %self.id, page = %page, command = command.name(), "Nothing to do");
            return Ok(CommandOutcome::NoOp);
        }

        self.history
            .record(Snapshot::capture(page, session.clone(), command.name()));
        command.apply(
            self.store.session_mut(page),
            self.config.continuation_policy,
        );

        if matches!(command, Command::ResetPage) {
            info!(tracker = %self.id, page = %page, "Page reset");
        } else {
            debug!(
                tracker = %self.id,
                page = %page,
                command = command.name(),
                entries = self.store.session(page).len(),
                "Command applied"
            );
        }
        Ok(CommandOutcome::Applied)
    }

    pub fn record_top_up(
        &mut self,
        rotation: i64,
        amount: i64,
    ) -> Result<CommandOutcome, TrackerError> {
        self.execute(Command::RecordTopUp { rotation, amount })
    }

    pub fn continuation_start(&mut self, rotation: i64) -> Result<CommandOutcome, TrackerError> {
        self.execute(Command::ContinuationStart { rotation })
    }

    /// Remove the newest entry. A no-op on an empty page.
    pub fn delete_last_entry(&mut self) -> Result<CommandOutcome, TrackerError> {
        self.execute(Command::DeleteLastEntry)
    }

    /// Remove the entry at a 1-based position.
    pub fn delete_entry_at(&mut self, position: usize) -> Result<CommandOutcome, TrackerError> {
        self.execute(Command::DeleteEntryAt { position })
    }

    /// Replace the active page with an empty session. Undoable.
    pub fn reset_active(&mut self) -> Result<CommandOutcome, TrackerError> {
        self.execute(Command::ResetPage)
    }

    /// Restore the most recent undo snapshot.
    pub fn undo(&mut self) -> CommandOutcome {
        let Some(snapshot) = self.history.pop_undo() else {
            debug!(tracker = %self.id, "Nothing to undo");
            return CommandOutcome::NoOp;
        };

        let page = self.restore_target(&snapshot);
        let command = snapshot.command;
        let current = self.store.replace(page, snapshot.session);
        self.history
            .push_redo(Snapshot::capture(page, current, command));
        self.store.select(page);

        info!(tracker = %self.id, page = %page, command, "Undo");
        CommandOutcome::Applied
    }

    /// Reapply the most recently undone change.
    pub fn redo(&mut self) -> CommandOutcome {
        let Some(snapshot) = self.history.pop_redo() else {
            debug!(tracker = %self.id, "Nothing to redo");
            return CommandOutcome::NoOp;
        };

        let page = self.restore_target(&snapshot);
        let command = snapshot.command;
        let current = self.store.replace(page, snapshot.session);
        self.history
            .push_undo(Snapshot::capture(page, current, command));
        self.store.select(page);

        info!(tracker = %self.id, page = %page, command, "Redo");
        CommandOutcome::Applied
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Names of the commands undo would revert, newest first.
    pub fn undo_labels(&self) -> Vec<&'static str> {
        self.history.undo_snapshots().map(|s| s.command).collect()
    }

    /// Names of the commands redo would reapply, newest first.
    pub fn redo_labels(&self) -> Vec<&'static str> {
        self.history.redo_snapshots().map(|s| s.command).collect()
    }

    /// Drop both stacks. Sessions are left as they are.
    pub fn clear_history(&mut self) {
        self.history.clear();
        debug!(tracker = %self.id, "History cleared");
    }

    fn restore_target(&self, snapshot: &Snapshot) -> PageIndex {
        match self.config.undo_scope {
            UndoScope::SnapshotPage => snapshot.page,
            UndoScope::ActivePage => self.store.active_page(),
        }
    }
}
