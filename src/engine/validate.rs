//! Argument checks for commands using Validation.
//!
//! All checks for one command run together so a caller learns about every
//! bad argument at once, not just the first.

use crate::core::{metrics, Session};
use crate::engine::command::Command;
use crate::error::TrackerError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<TrackerError>>;

fn non_negative_rotation(rotation: i64) -> Check {
    if rotation < 0 {
        Validation::fail(TrackerError::NegativeRotation(rotation))
    } else {
        Validation::success(())
    }
}

fn non_negative_amount(amount: i64) -> Check {
    if amount < 0 {
        Validation::fail(TrackerError::NegativeAmount(amount))
    } else {
        Validation::success(())
    }
}

/// `position` is 1-based and must address an existing entry.
fn position_in_range(position: usize, len: usize) -> Check {
    if (1..=len).contains(&position) {
        Validation::success(())
    } else {
        Validation::fail(TrackerError::PositionOutOfRange { position, len })
    }
}

fn spend_fits(total_spent: i64, amount: i64) -> Check {
    if amount >= 0 && total_spent.checked_add(amount).is_none() {
        Validation::fail(TrackerError::TotalOverflow { total: "spent" })
    } else {
        Validation::success(())
    }
}

/// The rotation total after adding `change` must stay within `i64`.
fn rotation_total_fits(session: &Session, change: i128) -> Check {
    let total = metrics::rotation_sum(session) + change;
    if i64::try_from(total).is_ok() {
        Validation::success(())
    } else {
        Validation::fail(TrackerError::TotalOverflow { total: "rotation" })
    }
}

/// Check every precondition of `command` against the session it targets.
pub(crate) fn check(command: &Command, session: &Session) -> Result<(), TrackerError> {
    let checks: Vec<Check> = match *command {
        Command::RecordTopUp { rotation, amount } => {
            let mut checks = vec![non_negative_rotation(rotation), non_negative_amount(amount)];
            if rotation >= 0 {
                let delta = i128::from(rotation) - i128::from(session.last_rotation());
                checks.push(rotation_total_fits(session, delta));
            }
            checks.push(spend_fits(session.total_spent(), amount));
            checks
        }
        Command::ContinuationStart { rotation } => vec![non_negative_rotation(rotation)],
        Command::DeleteEntryAt { position } => {
            let mut checks = vec![position_in_range(position, session.len())];
            if let Some(entry) = position.checked_sub(1).and_then(|i| session.history().get(i)) {
                checks.push(rotation_total_fits(session, -i128::from(entry.delta)));
            }
            checks
        }
        Command::DeleteLastEntry => match session.history().last() {
            Some(entry) => vec![rotation_total_fits(session, -i128::from(entry.delta))],
            None => Vec::new(),
        },
        Command::ResetPage => Vec::new(),
    };

    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => {
            let mut errors: Vec<TrackerError> = errors.iter().cloned().collect();
            if errors.len() == 1 {
                Err(errors.remove(0))
            } else {
                Err(TrackerError::Multiple(errors))
            }
        }
    }
}
