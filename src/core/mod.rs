//! Session data and derived metrics.
//!
//! This module is the pure part of the crate:
//! - `Entry` rows and the `Session` that orders them
//! - Derived metrics (total rotation, rotation rate, running totals)
//! - `SessionReport` views for presentation
//!
//! Nothing here mutates a session from outside the crate; mutation is the
//! engine's job.

mod entry;
pub mod metrics;
mod report;
mod session;

pub use entry::Entry;
pub use report::{ReportRow, RowKind, SessionReport};
pub use session::Session;
