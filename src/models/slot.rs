//! Lesson slot model.

use serde::{Deserialize, Serialize};

use super::ClockTime;

/// A start time plus a duration in whole hours.
///
/// The slot covers `[start, start + duration_hours * 60)`. The end is kept
/// as a raw minute count (it may pass midnight) for window checks; the
/// displayed end clock wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSlot {
    /// Start of the lesson.
    pub start: ClockTime,
    /// Duration in whole hours (≥ 1 for a usable slot).
    pub duration_hours: u32,
}

impl LessonSlot {
    /// Creates a new slot.
    pub fn new(start: ClockTime, duration_hours: u32) -> Self {
        Self {
            start,
            duration_hours,
        }
    }

    /// Start in minutes since midnight.
    #[inline]
    pub fn start_minutes(&self) -> u32 {
        self.start.minutes()
    }

    /// End in minutes since midnight, unwrapped. Saturates at `u32::MAX`.
    #[inline]
    pub fn end_minutes(&self) -> u32 {
        self.start
            .minutes()
            .saturating_add(self.duration_hours.saturating_mul(60))
    }

    /// End time of day (wraps past midnight).
    pub fn end(&self) -> ClockTime {
        self.start.add_hours(self.duration_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_minutes() {
        let slot = LessonSlot::new(ClockTime::from_hm(8, 0).unwrap(), 4);
        assert_eq!(slot.start_minutes(), 480);
        assert_eq!(slot.end_minutes(), 720);
        assert_eq!(slot.end().to_string(), "12:00");
    }

    #[test]
    fn test_end_past_midnight() {
        let slot = LessonSlot::new(ClockTime::from_hm(22, 30).unwrap(), 3);
        assert_eq!(slot.end_minutes(), 1530); // unwrapped
        assert_eq!(slot.end().to_string(), "01:30");
    }

    #[test]
    fn test_huge_duration_saturates() {
        let slot = LessonSlot::new(ClockTime::from_hm(8, 0).unwrap(), u32::MAX);
        assert_eq!(slot.end_minutes(), u32::MAX);
        let slot = LessonSlot::new(ClockTime::from_hm(8, 0).unwrap(), 1_073_741_826);
        assert_eq!(slot.end_minutes(), u32::MAX);
        assert_eq!(slot.end().to_string(), "02:00");
    }
}
