//! Walk through a short play session across two pages.
//!
//! Run with `RUST_LOG=debug cargo run --example five_pages` to see the
//! tracker's log output.

use rotation_tracker::core::RowKind;
use rotation_tracker::{Tracker, TrackerError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TrackerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tracker = Tracker::new();

    println!("=== Page 1 ===");
    tracker.continuation_start(312)?;
    tracker.record_top_up(330, 1000)?;
    tracker.record_top_up(351, 1000)?;
    tracker.record_top_up(366, 1000)?;
    print_page(&tracker);

    println!("\n=== Page 2: machine counter reset mid-session ===");
    tracker.select_page(2)?;
    tracker.record_top_up(40, 1000)?;
    tracker.continuation_start(0)?;
    tracker.record_top_up(22, 1000)?;
    print_page(&tracker);

    println!("\n=== Oops, delete the last top-up, then undo that ===");
    tracker.delete_last_entry()?;
    print_page(&tracker);
    tracker.undo();
    print_page(&tracker);

    println!("\nUndo would revert: {:?}", tracker.undo_labels());
    Ok(())
}

fn print_page(tracker: &Tracker) {
    let report = tracker.report();
    println!(
        "page {}: {} rotations, {:.2} per 1000, {} spent",
        tracker.active_page(),
        report.total_rotation,
        report.total_rate,
        report.total_spent
    );
    for row in &report.rows {
        match row.kind {
            RowKind::TopUp => println!(
                "  #{}: +{} / {} (running {})",
                row.position, row.delta, row.amount_spent, row.running_total
            ),
            RowKind::ContinuationStart => println!(
                "  #{}: continuation start at {}",
                row.position, row.resulting_rotation
            ),
        }
    }
}
