//! Derived metrics over a session's history.
//!
//! Everything here is a pure function of a [`Session`]; nothing is cached.

use super::session::Session;

/// Currency units the rotation rate is normalized to.
pub const RATE_UNIT: i64 = 1000;

/// Exact sum of every entry's delta.
///
/// Continuation markers break the telescoping of deltas, so the sum of
/// valid `i64` deltas can leave the `i64` range.
pub fn rotation_sum(session: &Session) -> i128 {
    session
        .history()
        .iter()
        .map(|entry| i128::from(entry.delta))
        .sum()
}

/// Sum of every entry's delta. Zero for an empty history.
///
/// Saturates at the `i64` bounds; the tracker rejects commands that would
/// push the sum past them.
pub fn total_rotation(session: &Session) -> i64 {
    saturate(rotation_sum(session))
}

/// Rotations per [`RATE_UNIT`] currency units.
///
/// Defined as exactly `0.0` when nothing has been spent, whatever the
/// rotation total is.
pub fn total_rate(session: &Session) -> f64 {
    let spent = session.total_spent();
    if spent == 0 {
        return 0.0;
    }
    total_rotation(session) as f64 / (spent as f64 / RATE_UNIT as f64)
}

/// Cumulative delta after each entry, in history order.
pub fn running_totals(session: &Session) -> Vec<i64> {
    session
        .history()
        .iter()
        .scan(0i128, |running, entry| {
            *running += i128::from(entry.delta);
            Some(saturate(*running))
        })
        .collect()
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}
