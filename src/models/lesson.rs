//! Committed lessons and commit payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ClockTime;

/// Status written with newly committed lessons unless configured otherwise.
pub const DEFAULT_LESSON_STATUS: &str = "Agendada";

/// A lesson already committed to the backing store.
///
/// Read-only input to the workload accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledLessonRecord {
    /// Curricular unit the lesson counts against.
    pub unit_id: String,
    /// Lesson date.
    pub date: NaiveDate,
    /// Lesson hours. `None` counts as zero.
    pub hours: Option<u32>,
}

impl ScheduledLessonRecord {
    /// Creates a record with known hours.
    pub fn new(unit_id: impl Into<String>, date: NaiveDate, hours: u32) -> Self {
        Self {
            unit_id: unit_id.into(),
            date,
            hours: Some(hours),
        }
    }

    /// Creates a record whose hours were never filled in.
    pub fn without_hours(unit_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            unit_id: unit_id.into(),
            date,
            hours: None,
        }
    }

    /// Hours, treating absent as zero.
    #[inline]
    pub fn hours_or_zero(&self) -> u32 {
        self.hours.unwrap_or(0)
    }
}

/// One lesson to be persisted by the commit collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonCommit {
    /// Turma receiving the lesson.
    pub turma_id: String,
    /// Curricular unit taught.
    pub unit_id: String,
    /// Lesson date.
    pub date: NaiveDate,
    /// Start time.
    pub start: ClockTime,
    /// End time (wrapped clock).
    pub end: ClockTime,
    /// Lesson hours.
    pub hours: u32,
    /// Status label stored with the lesson.
    pub status: String,
}

impl LessonCommit {
    /// The record this commit produces once persisted.
    pub fn to_record(&self) -> ScheduledLessonRecord {
        ScheduledLessonRecord::new(self.unit_id.clone(), self.date, self.hours)
    }
}
