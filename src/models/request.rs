//! Scheduling batch request.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ClockTime, LessonSlot};
use crate::error::Result;

/// Caller input for one batch: the same slot on every selected day.
///
/// Built transiently from form input, evaluated once, then discarded.
/// Fields the user may not have filled in yet are `Option`s; the
/// validator reports the first one missing.
///
/// Days are a set, so duplicates collapse. Only the earliest day matters
/// for the workload cutoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingBatchRequest {
    /// Turma receiving the lessons.
    pub turma_id: Option<String>,
    /// Curricular unit being taught.
    pub unit_id: Option<String>,
    /// Raw `"HH:MM"` start time as entered.
    pub start_time: Option<String>,
    /// Hours per lesson.
    pub duration_hours: u32,
    /// Selected calendar days.
    pub days: BTreeSet<NaiveDate>,
}

impl SchedulingBatchRequest {
    /// Creates an empty request with a one-hour duration.
    pub fn new() -> Self {
        Self {
            turma_id: None,
            unit_id: None,
            start_time: None,
            duration_hours: 1,
            days: BTreeSet::new(),
        }
    }

    /// Sets the turma.
    pub fn with_turma(mut self, turma_id: impl Into<String>) -> Self {
        self.turma_id = Some(turma_id.into());
        self
    }

    /// Sets the curricular unit.
    pub fn with_unit(mut self, unit_id: impl Into<String>) -> Self {
        self.unit_id = Some(unit_id.into());
        self
    }

    /// Sets the raw start time.
    pub fn with_start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    /// Sets hours per lesson.
    pub fn with_duration(mut self, hours: u32) -> Self {
        self.duration_hours = hours;
        self
    }

    /// Adds one day.
    pub fn with_day(mut self, day: NaiveDate) -> Self {
        self.days.insert(day);
        self
    }

    /// Adds several days.
    pub fn with_days(mut self, days: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.days.extend(days);
        self
    }

    /// Number of distinct days.
    #[inline]
    pub fn day_count(&self) -> u32 {
        self.days.len() as u32
    }

    /// Earliest selected day.
    pub fn earliest_day(&self) -> Option<NaiveDate> {
        self.days.first().copied()
    }

    /// Total hours requested: days × hours per lesson. Saturates at `u32::MAX`.
    pub fn total_hours(&self) -> u32 {
        self.day_count().saturating_mul(self.duration_hours)
    }

    /// Parses the start time. Blank or absent input yields `Ok(None)`;
    /// malformed input is an error.
    pub fn parsed_start(&self) -> Result<Option<ClockTime>> {
        match self.start_time.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }

    /// The lesson slot, if a start time was entered.
    pub fn slot(&self) -> Result<Option<LessonSlot>> {
        Ok(self
            .parsed_start()?
            .map(|start| LessonSlot::new(start, self.duration_hours)))
    }
}

impl Default for SchedulingBatchRequest {
    fn default() -> Self {
        Self::new()
    }
}
