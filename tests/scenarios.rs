//! End-to-end usage scenarios through the public API.

use rotation_tracker::core::RowKind;
use rotation_tracker::{
    CommandOutcome, ContinuationPolicy, Entry, PageIndex, Tracker, TrackerError, UndoScope,
};

#[test]
fn continuation_then_top_up_then_undo_redo_uniform() {
    let mut tracker = Tracker::new();

    tracker.continuation_start(100).unwrap();
    assert_eq!(tracker.active().initial_rotation(), 0);
    assert_eq!(tracker.active().history(), &[Entry::continuation_start(100)]);
    let after_continuation = tracker.active().clone();

    tracker.record_top_up(150, 1000).unwrap();
    let top_up = Entry {
        resulting_rotation: 150,
        amount_spent: 1000,
        delta: 50,
    };
    assert_eq!(tracker.active().history().last(), Some(&top_up));
    assert_eq!(tracker.active().total_spent(), 1000);
    assert_eq!(tracker.active().total_rotation(), 50);
    assert_eq!(tracker.active().total_rate(), 50.0);

    tracker.undo();
    assert_eq!(tracker.active(), &after_continuation);

    tracker.redo();
    assert_eq!(tracker.active().history().last(), Some(&top_up));
    assert_eq!(tracker.active().len(), 2);
}

#[test]
fn continuation_then_top_up_then_undo_redo_legacy() {
    let mut tracker = Tracker::builder()
        .continuation_policy(ContinuationPolicy::Legacy)
        .build()
        .unwrap();

    tracker.continuation_start(100).unwrap();
    assert_eq!(tracker.active().initial_rotation(), 100);
    assert!(tracker.active().is_empty());

    tracker.record_top_up(150, 1000).unwrap();
    assert_eq!(tracker.active().history()[0].delta, 50);
    assert_eq!(tracker.active().total_rate(), 50.0);

    tracker.undo();
    assert_eq!(tracker.active().initial_rotation(), 100);
    assert!(tracker.active().is_empty());

    tracker.redo();
    assert_eq!(tracker.active().len(), 1);
    assert_eq!(tracker.active().total_rotation(), 50);
}

#[test]
fn decreasing_reading_gives_negative_delta() {
    let mut tracker = Tracker::new();

    tracker.record_top_up(200, 500).unwrap();
    tracker.record_top_up(180, 500).unwrap();

    let history = tracker.active().history();
    assert_eq!(history[1].delta, -20);
    assert_eq!(
        tracker.active().total_rotation(),
        history[0].delta + history[1].delta
    );
    assert_eq!(tracker.active().total_rotation(), 180);
}

#[test]
fn delete_last_entry_on_empty_page_is_silent() {
    let mut tracker = Tracker::new();

    assert_eq!(tracker.delete_last_entry(), Ok(CommandOutcome::NoOp));
    assert!(!tracker.can_undo());
    assert!(!tracker.can_redo());
    assert_eq!(tracker.active().total_spent(), 0);
}

#[test]
fn multiple_bad_arguments_are_reported_together() {
    let mut tracker = Tracker::new();

    let err = tracker.record_top_up(-1, -1000).unwrap_err();

    assert!(matches!(err, TrackerError::Multiple(_)));
    let violations = err.violations();
    assert_eq!(violations.len(), 2);
    assert!(violations.contains(&&TrackerError::NegativeRotation(-1)));
    assert!(violations.contains(&&TrackerError::NegativeAmount(-1000)));
    assert!(!tracker.can_undo());
}

#[test]
fn switching_pages_between_mutation_and_undo() {
    let mut tracker = Tracker::new();
    tracker.record_top_up(40, 1000).unwrap();
    tracker.select_page(5).unwrap();
    tracker.record_top_up(70, 1000).unwrap();
    tracker.select_page(3).unwrap();

    tracker.undo();
    assert_eq!(tracker.active_page().number(), 5);
    assert!(tracker.active().is_empty());

    tracker.undo();
    assert_eq!(tracker.active_page().number(), 1);
    assert!(tracker.active().is_empty());

    let third = PageIndex::from_number(3).unwrap();
    assert!(tracker.session(third).is_empty());
}

#[test]
fn active_page_scope_restores_into_selected_page() {
    let mut tracker = Tracker::builder()
        .undo_scope(UndoScope::ActivePage)
        .build()
        .unwrap();
    tracker.record_top_up(40, 1000).unwrap();
    tracker.record_top_up(90, 1000).unwrap();
    tracker.select_page(2).unwrap();

    tracker.undo();

    assert_eq!(tracker.active_page().number(), 2);
    assert_eq!(tracker.active().len(), 1);
    assert_eq!(tracker.active().total_rotation(), 40);
}

#[test]
fn report_lists_rows_with_running_totals() {
    let mut tracker = Tracker::new();
    tracker.record_top_up(120, 1000).unwrap();
    tracker.continuation_start(10).unwrap();
    tracker.record_top_up(75, 1000).unwrap();

    let report = tracker.report();

    assert_eq!(report.total_rotation, 185);
    assert_eq!(report.total_spent, 2000);
    assert_eq!(report.total_rate, 92.5);
    let running: Vec<i64> = report.rows.iter().map(|r| r.running_total).collect();
    assert_eq!(running, vec![120, 120, 185]);
    let kinds: Vec<RowKind> = report.rows.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![RowKind::TopUp, RowKind::ContinuationStart, RowKind::TopUp]
    );

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["rows"][2]["delta"], 65);
}

#[test]
fn top_up_that_would_overflow_spend_is_rejected_cleanly() {
    let mut tracker = Tracker::new();
    tracker.record_top_up(10, i64::MAX).unwrap();
    let before = tracker.active().clone();

    let result = tracker.record_top_up(20, 1);

    assert_eq!(result, Err(TrackerError::TotalOverflow { total: "spent" }));
    assert_eq!(tracker.active(), &before);
    assert_eq!(tracker.active().total_spent(), i64::MAX);
    assert_eq!(tracker.undo_depth(), 1);
}

#[test]
fn rotation_total_past_i64_is_rejected_after_continuation() {
    let mut tracker = Tracker::new();
    tracker.record_top_up(i64::MAX, 1000).unwrap();
    tracker.continuation_start(0).unwrap();
    let before = tracker.active().clone();

    let result = tracker.record_top_up(i64::MAX, 1000);

    assert_eq!(
        result,
        Err(TrackerError::TotalOverflow { total: "rotation" })
    );
    assert_eq!(tracker.active(), &before);
    assert_eq!(tracker.active().total_rotation(), i64::MAX);
    assert_eq!(tracker.active().total_spent(), 1000);
    assert_eq!(tracker.undo_depth(), 2);
}
