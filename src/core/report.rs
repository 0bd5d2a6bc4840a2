//! Display-ready view of a session.
//!
//! Reports are plain serializable values computed from a session on demand,
//! so a presentation layer can render rows without redoing the arithmetic.

use super::entry::Entry;
use super::session::Session;
use serde::Serialize;

/// How a history row should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    TopUp,
    ContinuationStart,
}

/// One history row plus its cumulative delta.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    /// 1-based position, the same numbering `delete_entry_at` accepts
    pub position: usize,
    pub resulting_rotation: i64,
    pub amount_spent: i64,
    pub delta: i64,
    pub running_total: i64,
    pub kind: RowKind,
}

/// Totals and rows for one session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionReport {
    pub initial_rotation: i64,
    pub total_rotation: i64,
    pub total_rate: f64,
    pub total_spent: i64,
    pub rows: Vec<ReportRow>,
}

impl SessionReport {
    pub fn from_session(session: &Session) -> Self {
        let rows = session
            .history()
            .iter()
            .zip(session.running_totals())
            .enumerate()
            .map(|(index, (entry, running_total))| row(index + 1, entry, running_total))
            .collect();

        Self {
            initial_rotation: session.initial_rotation(),
            total_rotation: session.total_rotation(),
            total_rate: session.total_rate(),
            total_spent: session.total_spent(),
            rows,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn row(position: usize, entry: &Entry, running_total: i64) -> ReportRow {
    let kind = if entry.is_continuation_start() {
        RowKind::ContinuationStart
    } else {
        RowKind::TopUp
    };
    ReportRow {
        position,
        resulting_rotation: entry.resulting_rotation,
        amount_spent: entry.amount_spent,
        delta: entry.delta,
        running_total,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_numbers_rows_from_one() {
        let mut session = Session::new();
        session.push_top_up(100, 1000);
        session.push_continuation(10);
        session.push_top_up(70, 1000);

        let report = session.report();

        let positions: Vec<usize> = report.rows.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(report.rows[1].kind, RowKind::ContinuationStart);
        assert_eq!(report.rows[2].running_total, 160);
        assert_eq!(report.total_rotation, 160);
        assert_eq!(report.total_spent, 2000);
        assert_eq!(report.total_rate, 80.0);
    }

    #[test]
    fn free_top_up_with_rotations_is_reported_as_top_up() {
        let mut session = Session::new();
        session.push_continuation(100);
        session.push_top_up(180, 0);

        let report = session.report();

        assert_eq!(report.rows[0].kind, RowKind::ContinuationStart);
        assert_eq!(report.rows[1].kind, RowKind::TopUp);
        assert_eq!(report.rows[1].delta, 80);
    }

    #[test]
    fn empty_report_has_no_rows() {
        let report = Session::new().report();
        assert!(report.rows.is_empty());
        assert_eq!(report.total_rate, 0.0);
    }

    #[test]
    fn report_serializes_row_kind_in_snake_case() {
        let mut session = Session::new();
        session.push_continuation(5);

        let json = session.report().to_json().unwrap();

        assert!(json.contains("\"kind\":\"continuation_start\""));
    }
}
