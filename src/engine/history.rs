//! Undo and redo stacks of whole-session snapshots.

use crate::core::Session;
use crate::store::PageIndex;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A deep copy of one page's session, taken just before it changed.
///
/// Snapshots own their session outright, so later mutation of the live
/// page can never reach into the stacks.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// Page the session was copied from
    pub page: PageIndex,
    /// The session as it was
    pub session: Session,
    /// Name of the command this snapshot undoes
    pub command: &'static str,
    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn capture(page: PageIndex, session: Session, command: &'static str) -> Self {
        Self {
            page,
            session,
            command,
            taken_at: Utc::now(),
        }
    }
}

/// Paired undo/redo stacks.
///
/// Any new mutation clears the redo stack; undo and redo themselves only
/// move snapshots between the two stacks. With a limit set, the oldest
/// snapshots are dropped first.
#[derive(Clone, Debug, Default)]
pub struct UndoHistory {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
    limit: Option<usize>,
}

impl UndoHistory {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            limit,
        }
    }

    /// Record the state before a new mutation. Invalidates redo.
    pub(crate) fn record(&mut self, snapshot: Snapshot) {
        self.redo.clear();
        push_bounded(&mut self.undo, snapshot, self.limit);
    }

    pub(crate) fn push_undo(&mut self, snapshot: Snapshot) {
        push_bounded(&mut self.undo, snapshot, self.limit);
    }

    pub(crate) fn push_redo(&mut self, snapshot: Snapshot) {
        push_bounded(&mut self.redo, snapshot, self.limit);
    }

    pub(crate) fn pop_undo(&mut self) -> Option<Snapshot> {
        self.undo.pop()
    }

    pub(crate) fn pop_redo(&mut self) -> Option<Snapshot> {
        self.redo.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Pending undo snapshots, newest first.
    pub fn undo_snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.undo.iter().rev()
    }

    /// Pending redo snapshots, newest first.
    pub fn redo_snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.redo.iter().rev()
    }

    pub(crate) fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

fn push_bounded(stack: &mut Vec<Snapshot>, snapshot: Snapshot, limit: Option<usize>) {
    stack.push(snapshot);
    if let Some(limit) = limit {
        if stack.len() > limit {
            let excess = stack.len() - limit;
            stack.drain(..excess);
        }
    }
}
