//! Command execution with snapshot-based undo and redo.
//!
//! # Key Concepts
//!
//! - **Commands**: plain values describing one mutation of the active page
//! - **Snapshots**: deep copies of a page taken before each mutation
//! - **Tracker**: owns the pages and both stacks, and applies commands
//!
//! A command either applies fully or is rejected before anything changes.

mod command;
mod history;
mod tracker;
mod validate;

pub use command::{Command, CommandOutcome};
pub use history::{Snapshot, UndoHistory};
pub use tracker::Tracker;
