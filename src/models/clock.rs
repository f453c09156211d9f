//! Wall-clock time of day.
//!
//! # Time Model
//! Lesson times are minutes since midnight. Dates are carried separately
//! (`chrono::NaiveDate`), so a `ClockTime` has no day component.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day in minutes since midnight, always in `0..1440`.
///
/// Parsed from and displayed as a 24-hour `"HH:MM"` string.
///
/// # Examples
///
/// ```
/// use lesson_schedule::models::ClockTime;
///
/// let t: ClockTime = "13:30".parse().unwrap();
/// assert_eq!(t.minutes(), 810);
/// assert_eq!(t.to_string(), "13:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: Self = Self(0);

    /// Creates a time from minutes since midnight, wrapping past 24h.
    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes % MINUTES_PER_DAY)
    }

    /// Creates a time from hour and minute. Returns `None` out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self(hour * 60 + minute))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(&self) -> u32 {
        self.0
    }

    /// Hour component (0..24).
    #[inline]
    pub fn hour(&self) -> u32 {
        self.0 / 60
    }

    /// Minute component (0..60).
    #[inline]
    pub fn minute(&self) -> u32 {
        self.0 % 60
    }

    /// Adds whole hours, wrapping past midnight.
    pub fn add_hours(&self, hours: u32) -> Self {
        // Whole days drop out, so reduce first.
        Self::from_minutes(self.0 + (hours % 24) * 60)
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
            .map_err(|_| ScheduleError::InvalidTimeFormat(trimmed.to_string()))?;
        Ok(Self(time.hour() * 60 + time.minute()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
