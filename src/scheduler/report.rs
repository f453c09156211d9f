//! Per-day commit outcomes.
//!
//! Day-by-day commits are not transactional. A report records what
//! happened to every day so the caller can show which days made it and
//! retry only the rest.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::Rejection;

/// What happened to one day of an accepted batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DayStatus {
    /// The lesson was persisted.
    Committed,
    /// The store refused or failed the commit.
    Failed {
        /// Store error message.
        error: String,
    },
    /// Not attempted because an earlier day failed.
    Skipped,
}

/// Outcome for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOutcome {
    /// Lesson date.
    pub date: NaiveDate,
    /// Commit status.
    pub status: DayStatus,
}

impl DayOutcome {
    /// Whether the lesson for this day was persisted.
    pub fn is_committed(&self) -> bool {
        self.status == DayStatus::Committed
    }
}

/// Result of committing an accepted batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitReport {
    /// Hours per lesson.
    pub hours_per_lesson: u32,
    /// One entry per day, ascending by date.
    pub days: Vec<DayOutcome>,
}

impl CommitReport {
    /// Creates an empty report.
    pub fn new(hours_per_lesson: u32) -> Self {
        Self {
            hours_per_lesson,
            days: Vec::new(),
        }
    }

    /// Records an outcome.
    pub fn push(&mut self, date: NaiveDate, status: DayStatus) {
        self.days.push(DayOutcome { date, status });
    }

    /// Days whose lesson was persisted.
    pub fn committed_days(&self) -> Vec<NaiveDate> {
        self.days
            .iter()
            .filter(|d| d.is_committed())
            .map(|d| d.date)
            .collect()
    }

    /// Days that failed or were skipped; the ones to retry.
    pub fn failed_days(&self) -> Vec<NaiveDate> {
        self.days
            .iter()
            .filter(|d| !d.is_committed())
            .map(|d| d.date)
            .collect()
    }

    /// Whether every day was persisted.
    pub fn is_complete(&self) -> bool {
        self.days.iter().all(DayOutcome::is_committed)
    }

    /// Hours actually persisted.
    pub fn committed_hours(&self) -> u32 {
        self.committed_days().len() as u32 * self.hours_per_lesson
    }

    /// Hours the batch was meant to persist.
    pub fn total_hours(&self) -> u32 {
        self.days.len() as u32 * self.hours_per_lesson
    }
}

/// Outcome of [`BatchScheduler::schedule`](super::BatchScheduler::schedule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BatchOutcome {
    /// Validation failed; nothing was committed.
    Rejected(Rejection),
    /// Validation passed; see the per-day report.
    Committed(CommitReport),
}

impl BatchOutcome {
    /// The commit report, if the batch was accepted.
    pub fn report(&self) -> Option<&CommitReport> {
        match self {
            Self::Committed(r) => Some(r),
            Self::Rejected(_) => None,
        }
    }

    /// The rejection, if the batch was rejected.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(r) => Some(r),
            Self::Committed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn sample_report() -> CommitReport {
        let mut r = CommitReport::new(2);
        r.push(day(10), DayStatus::Committed);
        r.push(
            day(11),
            DayStatus::Failed {
                error: "timeout".into(),
            },
        );
        r.push(day(12), DayStatus::Skipped);
        r
    }

    #[test]
    fn test_partition() {
        let r = sample_report();
        assert_eq!(r.committed_days(), vec![day(10)]);
        assert_eq!(r.failed_days(), vec![day(11), day(12)]);
        assert!(!r.is_complete());
        assert_eq!(r.committed_hours(), 2);
        assert_eq!(r.total_hours(), 6);
    }

    #[test]
    fn test_complete() {
        let mut r = CommitReport::new(3);
        r.push(day(10), DayStatus::Committed);
        assert!(r.is_complete());
        assert!(r.failed_days().is_empty());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["days"][0]["status"]["state"], "committed");
        assert_eq!(json["days"][1]["status"]["error"], "timeout");
        assert_eq!(json["days"][2]["date"], "2025-03-12");
    }
}
