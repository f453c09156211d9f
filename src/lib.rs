//! Lesson batch scheduling for class timetables.
//!
//! Decides whether the same lesson slot can be scheduled on a set of days
//! for one curricular unit (UC) of one turma, and commits accepted
//! batches through a pluggable store.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ClockTime`, `TeachingPeriod`, `LessonSlot`,
//!   `CurricularUnit`, `Turma`, `ScheduledLessonRecord`, `SchedulingBatchRequest`
//! - **`policy`**: Time-window rules (period classification, duration limit, end time)
//! - **`workload`**: Hours already used and remaining capacity per unit
//! - **`validation`**: Batch validation with typed rejections
//! - **`store`**: Async data-access traits and an in-memory implementation
//! - **`scheduler`**: Lookup → validate → commit service with per-day reports
//! - **`config`**: TOML configuration
//!
//! # Architecture
//!
//! `policy`, `workload` and `validation` are pure and synchronous. All I/O
//! goes through the traits in `store`, awaited sequentially by
//! `scheduler`. No state is shared between calls.

pub mod config;
pub mod error;
pub mod models;
pub mod policy;
pub mod scheduler;
pub mod store;
pub mod validation;
pub mod workload;

pub use error::{Result, ScheduleError};
