//! Batch summary shown while a batch is being edited.
//!
//! Recomputed from scratch on every input change; no cached state.

use serde::{Deserialize, Serialize};

use crate::models::{SchedulingBatchRequest, TeachingPeriod};
use crate::policy::{format_time_range, max_duration_hours, period_label};
use crate::workload::remaining_after;

/// Derived figures for the current editing state of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Period containing the start time, if any.
    pub period: Option<TeachingPeriod>,
    /// `"HH:MM-HH:MM"` once a valid start time is entered.
    pub time_range: Option<String>,
    /// Hours per lesson.
    pub hours_per_lesson: u32,
    /// Upper bound for the duration picker.
    pub max_duration_hours: u32,
    /// Number of selected days.
    pub day_count: u32,
    /// days × hours per lesson.
    pub total_hours: u32,
    /// Remaining unit hours, once known.
    pub remaining_capacity: Option<u32>,
    /// Remaining hours after this batch, clamped at zero.
    pub remaining_after: Option<u32>,
}

impl BatchSummary {
    /// Builds the summary for `request`.
    ///
    /// A missing or malformed start time leaves the time fields empty.
    pub fn compute(request: &SchedulingBatchRequest, remaining_capacity: Option<u32>) -> Self {
        let start = request.parsed_start().ok().flatten();
        let total_hours = request.total_hours();

        Self {
            period: start.and_then(|s| period_label(s.minutes())),
            time_range: start.map(|s| format_time_range(s, request.duration_hours)),
            hours_per_lesson: request.duration_hours,
            max_duration_hours: start
                .map_or(max_duration_hours(0), |s| max_duration_hours(s.minutes())),
            day_count: request.day_count(),
            total_hours,
            remaining_capacity,
            remaining_after: remaining_capacity.map(|r| remaining_after(r, total_hours)),
        }
    }

    /// Whether the batch, as currently entered, needs more hours than remain.
    pub fn exceeds_capacity(&self) -> bool {
        self.remaining_capacity
            .is_some_and(|remaining| self.total_hours > remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_full_summary() {
        let request = SchedulingBatchRequest::new()
            .with_start_time("13:30")
            .with_duration(3)
            .with_days([day(3), day(4), day(5)]);
        let s = BatchSummary::compute(&request, Some(20));
        assert_eq!(s.period, Some(TeachingPeriod::Afternoon));
        assert_eq!(s.time_range.as_deref(), Some("13:30-16:30"));
        assert_eq!(s.max_duration_hours, 4);
        assert_eq!(s.day_count, 3);
        assert_eq!(s.total_hours, 9);
        assert_eq!(s.remaining_after, Some(11));
        assert!(!s.exceeds_capacity());
    }

    #[test]
    fn test_over_capacity_clamps() {
        let request = SchedulingBatchRequest::new()
            .with_start_time("19:00")
            .with_duration(3)
            .with_days([day(3), day(4)]);
        let s = BatchSummary::compute(&request, Some(4));
        assert_eq!(s.max_duration_hours, 3);
        assert_eq!(s.remaining_after, Some(0));
        assert!(s.exceeds_capacity());
    }

    #[test]
    fn test_no_start_time() {
        let request = SchedulingBatchRequest::new().with_day(day(3));
        let s = BatchSummary::compute(&request, None);
        assert_eq!(s.period, None);
        assert_eq!(s.time_range, None);
        assert_eq!(s.max_duration_hours, 4);
        assert_eq!(s.remaining_after, None);
        assert!(!s.exceeds_capacity());
    }

    #[test]
    fn test_huge_duration_does_not_wrap() {
        let request = SchedulingBatchRequest::new()
            .with_start_time("08:00")
            .with_duration(1_073_741_826)
            .with_days([day(3), day(4), day(5), day(6)]);
        let s = BatchSummary::compute(&request, Some(40));
        assert_eq!(s.period, Some(TeachingPeriod::Morning));
        assert_eq!(s.time_range.as_deref(), Some("08:00-02:00"));
        assert_eq!(s.total_hours, u32::MAX);
        assert_eq!(s.remaining_after, Some(0));
        assert!(s.exceeds_capacity());
    }

    #[test]
    fn test_gap_start_has_range_but_no_period() {
        let request = SchedulingBatchRequest::new()
            .with_start_time("13:00")
            .with_day(day(3));
        let s = BatchSummary::compute(&request, None);
        assert_eq!(s.period, None);
        assert_eq!(s.time_range.as_deref(), Some("13:00-14:00"));
    }
}
