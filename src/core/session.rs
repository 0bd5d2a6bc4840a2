//! Per-page rotation and spending record.

use super::entry::Entry;
use super::metrics;
use super::report::SessionReport;
use serde::Serialize;

/// One page's record: a rotation baseline, the ordered history of entries,
/// and the running spend total.
///
/// Sessions are read-only from outside the crate. Every mutation goes
/// through [`Tracker`](crate::engine::Tracker) so that it is snapshotted
/// for undo first.
///
/// `total_spent` is maintained incrementally and always equals the sum of
/// `amount_spent` over `history`.
///
/// # Example
///
/// ```rust
/// use rotation_tracker::Tracker;
///
/// let mut tracker = Tracker::new();
/// tracker.record_top_up(120, 1000).unwrap();
///
/// let session = tracker.active();
/// assert_eq!(session.total_rotation(), 120);
/// assert_eq!(session.total_spent(), 1000);
/// assert_eq!(session.total_rate(), 120.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    initial_rotation: i64,
    history: Vec<Entry>,
    total_spent: i64,
}

impl Session {
    /// Create an empty session with a zero baseline.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_rotation(&self) -> i64 {
        self.initial_rotation
    }

    /// Entries in chronological order.
    pub fn history(&self) -> &[Entry] {
        &self.history
    }

    pub fn total_spent(&self) -> i64 {
        self.total_spent
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The reading the next top-up is measured against: the last entry's
    /// rotation, or the baseline when history is empty.
    pub fn last_rotation(&self) -> i64 {
        self.history
            .last()
            .map_or(self.initial_rotation, |entry| entry.resulting_rotation)
    }

    /// Sum of all deltas.
    pub fn total_rotation(&self) -> i64 {
        metrics::total_rotation(self)
    }

    /// Rotations per 1000 currency units, `0.0` when nothing was spent.
    pub fn total_rate(&self) -> f64 {
        metrics::total_rate(self)
    }

    /// Cumulative delta after each entry.
    pub fn running_totals(&self) -> Vec<i64> {
        metrics::running_totals(self)
    }

    /// Display-ready summary of this session.
    pub fn report(&self) -> SessionReport {
        SessionReport::from_session(self)
    }

    /// Append a top-up. The caller has checked that `total_spent` cannot
    /// overflow.
    pub(crate) fn push_top_up(&mut self, rotation: i64, amount: i64) -> Entry {
        let entry = Entry::top_up(rotation, amount, self.last_rotation());
        let total_spent = self.total_spent + amount;
        self.history.push(entry);
        self.total_spent = total_spent;
        entry
    }

    pub(crate) fn push_continuation(&mut self, rotation: i64) -> Entry {
        let entry = Entry::continuation_start(rotation);
        self.history.push(entry);
        entry
    }

    pub(crate) fn rebase(&mut self, rotation: i64) {
        self.initial_rotation = rotation;
    }

    pub(crate) fn pop_entry(&mut self) -> Option<Entry> {
        let removed = self.history.pop()?;
        self.total_spent -= removed.amount_spent;
        Some(removed)
    }

    /// Remove the entry at a zero-based index the caller has already checked.
    pub(crate) fn remove_entry(&mut self, index: usize) -> Entry {
        let removed = self.history.remove(index);
        self.total_spent -= removed.amount_spent;
        removed
    }
}
