//! Mutating commands and how each one transforms a session.

use crate::config::ContinuationPolicy;
use crate::core::Session;
use crate::engine::validate;
use crate::error::TrackerError;
use serde::{Deserialize, Serialize};

/// A mutating operation on the active page.
///
/// Commands are plain values so a presentation layer can build them from
/// form input and hand them to [`Tracker::execute`](crate::Tracker::execute).
///
/// # Example
///
/// ```rust
/// use rotation_tracker::{Command, CommandOutcome, Tracker};
///
/// let mut tracker = Tracker::new();
/// let outcome = tracker
///     .execute(Command::RecordTopUp { rotation: 75, amount: 1000 })
///     .unwrap();
///
/// assert_eq!(outcome, CommandOutcome::Applied);
/// assert_eq!(tracker.active().total_rotation(), 75);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Spend `amount` and record the rotation reading afterwards
    RecordTopUp { rotation: i64, amount: i64 },

    /// Rebase later top-ups on `rotation` without crediting anything
    ContinuationStart { rotation: i64 },

    /// Remove the newest entry; a no-op on an empty page
    DeleteLastEntry,

    /// Remove the entry at a 1-based position
    DeleteEntryAt { position: usize },

    /// Replace the page with a fresh empty session
    ResetPage,
}

/// What happened when a command, undo, or redo ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// State changed and the change is undoable
    Applied,

    /// Nothing to do; state and stacks are untouched
    NoOp,
}

impl CommandOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl Command {
    /// Stable name for logging and undo labels.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RecordTopUp { .. } => "record_top_up",
            Self::ContinuationStart { .. } => "continuation_start",
            Self::DeleteLastEntry => "delete_last_entry",
            Self::DeleteEntryAt { .. } => "delete_entry_at",
            Self::ResetPage => "reset_page",
        }
    }

    pub(crate) fn validate(&self, session: &Session) -> Result<(), TrackerError> {
        validate::check(self, session)
    }

    /// Whether running this command would leave `session` unchanged, in
    /// which case no snapshot is taken.
    pub(crate) fn is_noop(&self, session: &Session) -> bool {
        matches!(self, Self::DeleteLastEntry) && session.is_empty()
    }

    /// Mutate `session`. Arguments must already have passed `validate`.
    pub(crate) fn apply(&self, session: &mut Session, policy: ContinuationPolicy) {
        match *self {
            Self::RecordTopUp { rotation, amount } => {
                session.push_top_up(rotation, amount);
            }
            Self::ContinuationStart { rotation } => match policy {
                ContinuationPolicy::Legacy if session.is_empty() => session.rebase(rotation),
                _ => {
                    session.push_continuation(rotation);
                }
            },
            Self::DeleteLastEntry => {
                session.pop_entry();
            }
            Self::DeleteEntryAt { position } => {
                session.remove_entry(position - 1);
            }
            Self::ResetPage => *session = Session::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entry;

    #[test]
    fn uniform_continuation_always_appends_marker() {
        let mut session = Session::new();
        Command::ContinuationStart { rotation: 100 }.apply(&mut session, ContinuationPolicy::Uniform);

        assert_eq!(session.initial_rotation(), 0);
        assert_eq!(session.history(), &[Entry::continuation_start(100)]);
    }

    #[test]
    fn legacy_continuation_rebases_empty_page() {
        let mut session = Session::new();
        Command::ContinuationStart { rotation: 100 }.apply(&mut session, ContinuationPolicy::Legacy);

        assert_eq!(session.initial_rotation(), 100);
        assert!(session.is_empty());
    }

    #[test]
    fn legacy_continuation_appends_marker_on_non_empty_page() {
        let mut session = Session::new();
        session.push_top_up(50, 1000);

        Command::ContinuationStart { rotation: 7 }.apply(&mut session, ContinuationPolicy::Legacy);

        assert_eq!(session.len(), 2);
        assert_eq!(session.history()[1], Entry::continuation_start(7));
        assert_eq!(session.initial_rotation(), 0);
    }

    #[test]
    fn both_policies_measure_next_top_up_from_continuation() {
        for policy in [ContinuationPolicy::Uniform, ContinuationPolicy::Legacy] {
            let mut session = Session::new();
            Command::ContinuationStart { rotation: 100 }.apply(&mut session, policy);
            Command::RecordTopUp {
                rotation: 150,
                amount: 1000,
            }
            .apply(&mut session, policy);

            assert_eq!(session.total_rotation(), 50);
            assert_eq!(session.total_rate(), 50.0);
        }
    }

    #[test]
    fn delete_entry_at_uses_one_based_position() {
        let mut session = Session::new();
        session.push_top_up(10, 100);
        session.push_top_up(30, 200);

        Command::DeleteEntryAt { position: 1 }.apply(&mut session, ContinuationPolicy::Uniform);

        assert_eq!(session.len(), 1);
        assert_eq!(session.history()[0].resulting_rotation, 30);
        assert_eq!(session.total_spent(), 200);
    }

    #[test]
    fn reset_page_clears_everything() {
        let mut session = Session::new();
        session.rebase(40);
        session.push_top_up(90, 1000);

        Command::ResetPage.apply(&mut session, ContinuationPolicy::Uniform);

        assert_eq!(session, Session::new());
    }

    #[test]
    fn only_delete_last_on_empty_is_noop() {
        let empty = Session::new();
        assert!(Command::DeleteLastEntry.is_noop(&empty));
        assert!(!Command::ResetPage.is_noop(&empty));

        let mut filled = Session::new();
        filled.push_top_up(1, 1);
        assert!(!Command::DeleteLastEntry.is_noop(&filled));
    }

    #[test]
    fn command_serializes_with_type_tag() {
        let json = serde_json::to_string(&Command::ContinuationStart { rotation: 12 }).unwrap();
        assert_eq!(json, r#"{"type":"continuation_start","rotation":12}"#);

        let parsed: Command = serde_json::from_str(r#"{"type":"delete_last_entry"}"#).unwrap();
        assert_eq!(parsed, Command::DeleteLastEntry);
    }
}
