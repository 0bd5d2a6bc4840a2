//! A single row of a session's history.

use serde::{Deserialize, Serialize};

/// One recorded action: the rotation reading it produced, what it cost,
/// and how many rotations it credited.
///
/// A row with zero `amount_spent` and zero `delta` is a continuation start.
/// A free top-up that still moved the reading keeps its non-zero delta and
/// is treated as a top-up.
///
/// # Example
///
/// ```rust
/// use rotation_tracker::core::Entry;
///
/// let entry = Entry::top_up(150, 1000, 100);
/// assert_eq!(entry.delta, 50);
/// assert!(!entry.is_continuation_start());
///
/// let marker = Entry::continuation_start(420);
/// assert_eq!(marker.delta, 0);
/// assert!(marker.is_continuation_start());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Rotation reading after this action
    pub resulting_rotation: i64,
    /// Currency units spent; zero for continuation starts
    pub amount_spent: i64,
    /// Rotations gained since the previous reading (may be negative)
    pub delta: i64,
}

impl Entry {
    /// Build a top-up row relative to the previous rotation reading.
    ///
    /// A reading lower than `previous` yields a negative delta. That happens
    /// when a machine's counter is reset and is kept as-is.
    pub fn top_up(resulting_rotation: i64, amount_spent: i64, previous: i64) -> Self {
        Self {
            resulting_rotation,
            amount_spent,
            delta: resulting_rotation - previous,
        }
    }

    /// Build a zero-cost, zero-delta marker that rebases later top-ups.
    pub fn continuation_start(resulting_rotation: i64) -> Self {
        Self {
            resulting_rotation,
            amount_spent: 0,
            delta: 0,
        }
    }

    /// Zero cost and zero credited rotations.
    pub fn is_continuation_start(&self) -> bool {
        self.amount_spent == 0 && self.delta == 0
    }
}
