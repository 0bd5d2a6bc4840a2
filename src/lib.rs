//! Rotation tracker: per-page rotation rate bookkeeping with undo and redo
//!
//! A tracker holds five independent pages. Each page records top-ups (money
//! spent plus the rotation reading afterwards) and continuation starts
//! (free markers that rebase the reading). From that history it derives the
//! total rotation and the rotation rate per 1000 currency units.
//!
//! # Core Concepts
//!
//! - **Session**: one page's baseline, history, and spend total
//! - **SessionStore**: the five pages and the active-page pointer
//! - **Tracker**: applies commands, snapshotting each page before it changes
//! - **Metrics**: pure functions over a session
//!
//! # Example
//!
//! ```rust
//! use rotation_tracker::Tracker;
//!
//! let mut tracker = Tracker::new();
//! tracker.select_page(2).unwrap();
//! tracker.record_top_up(200, 500).unwrap();
//! tracker.record_top_up(180, 500).unwrap();
//!
//! let session = tracker.active();
//! assert_eq!(session.history()[1].delta, -20);
//! assert_eq!(session.total_rotation(), 180);
//! assert_eq!(session.total_rate(), 180.0);
//!
//! tracker.undo();
//! assert_eq!(tracker.active().len(), 1);
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use config::{ContinuationPolicy, TrackerBuilder, TrackerConfig, UndoScope};
pub use core::{Entry, Session, SessionReport};
pub use engine::{Command, CommandOutcome, Tracker};
pub use error::TrackerError;
pub use store::{PageIndex, SessionStore, PAGE_COUNT};
