//! Teaching periods.
//!
//! Three fixed, pairwise-disjoint daily windows, half-open `[start, end)`
//! in minutes since midnight:
//!
//! | Period | Window | Clock |
//! |--------|--------|-------|
//! | Morning | [480, 720) | 08:00–12:00 |
//! | Afternoon | [810, 1050) | 13:30–17:30 |
//! | Evening | [1140, 1320) | 19:00–22:00 |
//!
//! These constants are the single source for validation, labelling and
//! the advisory duration limit.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ClockTime;

/// A daily teaching period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeachingPeriod {
    /// 08:00–12:00.
    Morning,
    /// 13:30–17:30.
    Afternoon,
    /// 19:00–22:00.
    Evening,
}

impl TeachingPeriod {
    /// All periods in chronological order.
    pub const ALL: [TeachingPeriod; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    /// Window start (minutes since midnight, inclusive).
    #[inline]
    pub const fn start_minute(self) -> u32 {
        match self {
            Self::Morning => 480,
            Self::Afternoon => 810,
            Self::Evening => 1140,
        }
    }

    /// Window end (minutes since midnight, exclusive).
    #[inline]
    pub const fn end_minute(self) -> u32 {
        match self {
            Self::Morning => 720,
            Self::Afternoon => 1050,
            Self::Evening => 1320,
        }
    }

    /// Window length in whole hours.
    pub const fn length_hours(self) -> u32 {
        (self.end_minute() - self.start_minute()) / 60
    }

    /// Whether a minute-of-day lies inside this window.
    #[inline]
    pub fn contains(self, minute: u32) -> bool {
        minute >= self.start_minute() && minute < self.end_minute()
    }

    /// Whether `[start, end)` lies entirely inside this window.
    #[inline]
    pub fn encloses(self, start_minute: u32, end_minute: u32) -> bool {
        start_minute >= self.start_minute() && end_minute <= self.end_minute()
    }

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }

    /// Portuguese label used on the scheduling screens.
    pub fn label_pt(self) -> &'static str {
        match self {
            Self::Morning => "Matutino",
            Self::Afternoon => "Vespertino",
            Self::Evening => "Noturno",
        }
    }

    /// Human-readable window, e.g. `"13:30-17:30"`.
    pub fn window_label(self) -> String {
        format!(
            "{}-{}",
            ClockTime::from_minutes(self.start_minute()),
            ClockTime::from_minutes(self.end_minute())
        )
    }
}

impl fmt::Display for TeachingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
