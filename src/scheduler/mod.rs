//! Batch scheduling service.
//!
//! Wires the pure checks in [`validation`](crate::validation) to the
//! data-access traits in [`store`](crate::store): looks up the unit and
//! its lesson history, validates, then commits accepted batches day by day.
//!
//! # Components
//!
//! - `BatchScheduler`: lookups, validation, per-day commits and retries
//! - `CommitReport`: which days were persisted and which need a retry
//! - `BatchSummary`: derived figures for the editing screen

mod report;
mod service;
mod summary;

pub use report::{BatchOutcome, CommitReport, DayOutcome, DayStatus};
pub use service::BatchScheduler;
pub use summary::BatchSummary;
