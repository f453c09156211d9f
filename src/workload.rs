//! Workload accumulation for curricular units.
//!
//! Sums the hours already committed for a unit before a cutoff date and
//! derives how many of the unit's required hours are still open.
//!
//! # Cutoff
//! The cutoff is the earliest day of the proposed batch. Lessons on or
//! after it are not counted, and the days of one batch are not counted
//! against each other.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::{CurricularUnit, ScheduledLessonRecord};

/// Sum of `hours` over lessons dated strictly before `cutoff`.
///
/// Missing hours count as zero.
pub fn scheduled_hours_before(prior: &[ScheduledLessonRecord], cutoff: NaiveDate) -> u32 {
    prior
        .iter()
        .filter(|l| l.date < cutoff)
        .map(ScheduledLessonRecord::hours_or_zero)
        .sum()
}

/// Hours of `unit` still open as of `cutoff`.
///
/// `max(total_hours - scheduled_before_cutoff, 0)`: never negative, even
/// when past scheduling overran the unit's total.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lesson_schedule::models::{CurricularUnit, ScheduledLessonRecord};
/// use lesson_schedule::workload::remaining_capacity;
///
/// let uc = CurricularUnit::new("uc-1", 40);
/// let d = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
/// let prior = vec![
///     ScheduledLessonRecord::new("uc-1", d(3), 4),
///     ScheduledLessonRecord::new("uc-1", d(20), 4), // on/after cutoff
/// ];
/// assert_eq!(remaining_capacity(&uc, &prior, d(20)), 36);
/// ```
pub fn remaining_capacity(
    unit: &CurricularUnit,
    prior: &[ScheduledLessonRecord],
    cutoff: NaiveDate,
) -> u32 {
    unit.total_hours
        .saturating_sub(scheduled_hours_before(prior, cutoff))
}

/// Cutoff date for a batch: its earliest day.
pub fn cutoff_date(days: &BTreeSet<NaiveDate>) -> Option<NaiveDate> {
    days.first().copied()
}

/// Hours left after scheduling `requested`, clamped at zero.
pub fn remaining_after(remaining: u32, requested: u32) -> u32 {
    remaining.saturating_sub(requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn lesson(d: u32, hours: u32) -> ScheduledLessonRecord {
        ScheduledLessonRecord::new("uc-1", day(d), hours)
    }

    #[test]
    fn test_sum_strictly_before_cutoff() {
        let prior = vec![lesson(1, 2), lesson(9, 3), lesson(10, 4), lesson(11, 5)];
        // Lesson on the cutoff day itself is excluded.
        assert_eq!(scheduled_hours_before(&prior, day(10)), 5);
    }

    #[test]
    fn test_missing_hours_count_as_zero() {
        let prior = vec![
            lesson(1, 2),
            ScheduledLessonRecord::without_hours("uc-1", day(2)),
        ];
        assert_eq!(scheduled_hours_before(&prior, day(10)), 2);
    }

    #[test]
    fn test_remaining_capacity() {
        let uc = CurricularUnit::new("uc-1", 40);
        let prior: Vec<_> = (1..=19).map(|d| lesson(d, 2)).collect(); // 38h
        assert_eq!(remaining_capacity(&uc, &prior, day(25)), 2);
    }

    #[test]
    fn test_remaining_capacity_clamps_overrun() {
        let uc = CurricularUnit::new("uc-1", 10);
        let prior = vec![lesson(1, 8), lesson(2, 8)];
        assert_eq!(remaining_capacity(&uc, &prior, day(5)), 0);
    }

    #[test]
    fn test_remaining_capacity_no_history() {
        let uc = CurricularUnit::new("uc-1", 60);
        assert_eq!(remaining_capacity(&uc, &[], day(1)), 60);
    }

    #[test]
    fn test_remaining_monotone_and_non_negative() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let uc = CurricularUnit::new("uc-1", rng.random_range(0..120));
            let mut prior = Vec::new();
            let mut last = remaining_capacity(&uc, &prior, day(28));
            for d in 1..=27 {
                prior.push(lesson(d, rng.random_range(0..6)));
                let now = remaining_capacity(&uc, &prior, day(28));
                assert!(now <= last);
                last = now;
            }
        }
    }

    #[test]
    fn test_cutoff_is_earliest_day() {
        let days: BTreeSet<_> = [day(14), day(7), day(21)].into_iter().collect();
        assert_eq!(cutoff_date(&days), Some(day(7)));
        assert_eq!(cutoff_date(&BTreeSet::new()), None);
    }

    #[test]
    fn test_remaining_after() {
        assert_eq!(remaining_after(20, 4), 16);
        assert_eq!(remaining_after(2, 4), 0);
    }
}
