//! Time-window policy.
//!
//! Classifies a (start, duration) pair into the [`TeachingPeriod`] that
//! fully contains it, or rejects it. Also derives the advisory values the
//! editing screen shows while the user types: period label, maximum
//! selectable duration, and computed end time.
//!
//! Every rule here reads the same window constants from
//! [`TeachingPeriod`], so the label and the strict check cannot disagree.
//!
//! All functions are pure; callers re-invoke them on every input change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ClockTime, LessonSlot, TeachingPeriod};

/// A slot that does not fit entirely inside any teaching period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidTimeWindow {
    /// Proposed start (minutes since midnight).
    pub start_minutes: u32,
    /// Proposed end (minutes since midnight, unwrapped).
    pub end_minutes: u32,
}

impl InvalidTimeWindow {
    /// Human-readable explanation listing the valid periods.
    pub fn explanation(&self) -> String {
        let windows = TeachingPeriod::ALL
            .iter()
            .map(|p| format!("{} {}", p.name(), p.window_label()))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "The lesson {}-{} must lie entirely within one of the valid periods: {windows}.",
            ClockTime::from_minutes(self.start_minutes),
            ClockTime::from_minutes(self.end_minutes),
        )
    }
}

impl fmt::Display for InvalidTimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.explanation())
    }
}

impl std::error::Error for InvalidTimeWindow {}

/// Classifies `[start, start + duration*60)` into the one period that
/// encloses it.
///
/// Partial overlaps that cross a period boundary, slots in the gaps
/// between periods and zero-hour durations are all rejected.
///
/// # Examples
///
/// ```
/// use lesson_schedule::models::TeachingPeriod;
/// use lesson_schedule::policy::classify_and_validate;
///
/// // 08:00 + 4h fills the morning exactly.
/// assert_eq!(classify_and_validate(480, 4), Ok(TeachingPeriod::Morning));
/// // 11:00 + 2h runs past noon.
/// assert!(classify_and_validate(660, 2).is_err());
/// ```
pub fn classify_and_validate(
    start_minutes: u32,
    duration_hours: u32,
) -> Result<TeachingPeriod, InvalidTimeWindow> {
    let end_minutes = duration_hours
        .checked_mul(60)
        .and_then(|minutes| start_minutes.checked_add(minutes));
    let rejected = InvalidTimeWindow {
        start_minutes,
        end_minutes: end_minutes.unwrap_or(u32::MAX),
    };

    // Zero hours, or so many that the end overflows.
    let Some(end_minutes) = end_minutes.filter(|_| duration_hours > 0) else {
        return Err(rejected);
    };

    // Windows are disjoint, so at most one can enclose a non-empty slot.
    TeachingPeriod::ALL
        .into_iter()
        .find(|p| p.encloses(start_minutes, end_minutes))
        .ok_or(rejected)
}

/// [`classify_and_validate`] for a [`LessonSlot`].
pub fn classify_slot(slot: &LessonSlot) -> Result<TeachingPeriod, InvalidTimeWindow> {
    classify_and_validate(slot.start_minutes(), slot.duration_hours)
}

/// Upper bound for the duration picker.
///
/// Starts at or after the evening window opens (19:00) get the evening
/// length (3h); anything earlier gets the longest daytime length (4h).
/// Advisory only: [`classify_and_validate`] is what rejects.
pub fn max_duration_hours(start_minutes: u32) -> u32 {
    if start_minutes >= TeachingPeriod::Evening.start_minute() {
        TeachingPeriod::Evening.length_hours()
    } else {
        TeachingPeriod::Morning
            .length_hours()
            .max(TeachingPeriod::Afternoon.length_hours())
    }
}

/// Display label for a start time: the period whose window contains it.
///
/// Returns `None` for starts between or outside the windows (e.g. 13:00),
/// which is exactly where [`classify_and_validate`] would also refuse.
pub fn period_label(start_minutes: u32) -> Option<TeachingPeriod> {
    TeachingPeriod::ALL
        .into_iter()
        .find(|p| p.contains(start_minutes))
}

/// End time of a lesson. Wraps past midnight.
pub fn compute_end_time(start: ClockTime, duration_hours: u32) -> ClockTime {
    start.add_hours(duration_hours)
}

/// `"HH:MM-HH:MM"` range shown as the scheduled time.
pub fn format_time_range(start: ClockTime, duration_hours: u32) -> String {
    format!("{start}-{}", compute_end_time(start, duration_hours))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn hm(s: &str) -> u32 {
        s.parse::<ClockTime>().unwrap().minutes()
    }

    #[test]
    fn test_morning_exact_fill() {
        // 08:00 + 4h = 12:00
        assert_eq!(classify_and_validate(hm("08:00"), 4), Ok(TeachingPeriod::Morning));
    }

    #[test]
    fn test_morning_overrun() {
        // 11:00 + 2h = 13:00: past Morning, before Afternoon
        let err = classify_and_validate(hm("11:00"), 2).unwrap_err();
        assert_eq!(err.start_minutes, 660);
        assert_eq!(err.end_minutes, 780);
    }

    #[test]
    fn test_evening_bounds() {
        assert_eq!(classify_and_validate(hm("19:30"), 3).unwrap_err().end_minutes, 1350);
        assert_eq!(classify_and_validate(hm("19:00"), 3), Ok(TeachingPeriod::Evening));
        assert_eq!(classify_and_validate(hm("19:30"), 2), Ok(TeachingPeriod::Evening));
    }

    #[test]
    fn test_afternoon() {
        assert_eq!(classify_and_validate(hm("13:30"), 4), Ok(TeachingPeriod::Afternoon));
        assert_eq!(classify_and_validate(hm("14:00"), 3), Ok(TeachingPeriod::Afternoon));
        assert!(classify_and_validate(hm("13:00"), 1).is_err()); // before 13:30
        assert!(classify_and_validate(hm("16:00"), 2).is_err()); // ends 18:00
    }

    #[test]
    fn test_outside_all_windows() {
        assert!(classify_and_validate(hm("06:00"), 1).is_err());
        assert!(classify_and_validate(hm("18:00"), 1).is_err());
        assert!(classify_and_validate(hm("23:00"), 1).is_err());
    }

    #[test]
    fn test_huge_duration_rejected() {
        for duration in [u32::MAX, u32::MAX / 60 + 1, 1_073_741_826] {
            let err = classify_and_validate(hm("08:00"), duration).unwrap_err();
            assert_eq!(err.start_minutes, 480);
            assert!(err.end_minutes > TeachingPeriod::Evening.end_minute());
            assert!(!err.explanation().is_empty());
        }
        let late = hm("23:59");
        assert!(classify_and_validate(late, u32::MAX / 60).is_err());
    }

    #[test]
    fn test_huge_duration_end_time_wraps() {
        let start: ClockTime = "08:00".parse().unwrap();
        // 1_073_741_826 h = 44_739_242 days + 18 h
        assert_eq!(compute_end_time(start, 1_073_741_826).to_string(), "02:00");
        assert_eq!(compute_end_time(start, u32::MAX).to_string(), "23:00");
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(classify_and_validate(hm("09:00"), 0).is_err());
    }

    #[test]
    fn test_explanation_lists_periods() {
        let msg = classify_and_validate(hm("11:00"), 2).unwrap_err().to_string();
        assert!(msg.contains("11:00-13:00"));
        assert!(msg.contains("Morning 08:00-12:00"));
        assert!(msg.contains("Afternoon 13:30-17:30"));
        assert!(msg.contains("Evening 19:00-22:00"));
    }

    #[test]
    fn test_window_containment_property() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..5_000 {
            let start = rng.random_range(0..24 * 60);
            let duration = rng.random_range(1..=6);
            let end = start + duration * 60;
            let expected = TeachingPeriod::ALL
                .into_iter()
                .find(|p| start >= p.start_minute() && end <= p.end_minute());
            assert_eq!(classify_and_validate(start, duration).ok(), expected);
        }
    }

    #[test]
    fn test_max_duration_hours() {
        assert_eq!(max_duration_hours(hm("08:00")), 4);
        assert_eq!(max_duration_hours(hm("18:59")), 4);
        assert_eq!(max_duration_hours(hm("19:00")), 3);
        assert_eq!(max_duration_hours(hm("21:00")), 3);
    }

    #[test]
    fn test_period_label_from_windows() {
        assert_eq!(period_label(hm("08:00")), Some(TeachingPeriod::Morning));
        assert_eq!(period_label(hm("13:30")), Some(TeachingPeriod::Afternoon));
        assert_eq!(period_label(hm("19:45")), Some(TeachingPeriod::Evening));
        // The gap between Morning and Afternoon has no label.
        assert_eq!(period_label(hm("13:00")), None);
        assert_eq!(period_label(hm("12:00")), None);
    }

    #[test]
    fn test_label_agrees_with_classifier() {
        // Any slot that validates is labelled with the same period.
        for start in 0..24 * 60 {
            for duration in 1..=4 {
                if let Ok(period) = classify_and_validate(start, duration) {
                    assert_eq!(period_label(start), Some(period));
                }
            }
        }
    }

    #[test]
    fn test_compute_end_time() {
        let start: ClockTime = "13:30".parse().unwrap();
        assert_eq!(compute_end_time(start, 2).to_string(), "15:30");
        assert_eq!(format_time_range(start, 4), "13:30-17:30");
        let late: ClockTime = "23:00".parse().unwrap();
        assert_eq!(format_time_range(late, 2), "23:00-01:00");
    }
}
