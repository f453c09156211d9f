//! Batch scheduling validation.
//!
//! Decides whether the same lesson slot can be scheduled on every day of
//! a batch for one curricular unit. Checks run in order and stop at the
//! first failure:
//! 1. Required fields (turma, unit, start time, duration, days)
//! 2. Time window: the slot lies inside one teaching period
//! 3. Capacity: `days × hours` fits the unit's remaining hours as of the
//!    batch's earliest day
//!
//! Rule violations are returned as [`ValidationResult::Rejected`], never
//! as errors. Only a start time that cannot be parsed takes the error
//! path ([`ScheduleError::InvalidTimeFormat`](crate::error::ScheduleError)).
//!
//! Nothing here commits or mutates anything.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{
    CurricularUnit, LessonSlot, ScheduledLessonRecord, SchedulingBatchRequest, TeachingPeriod,
};
use crate::policy::classify_slot;
use crate::workload::remaining_capacity;

/// Outcome of validating one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    /// The batch fits; `total_hours` = days × hours per lesson.
    Accepted {
        /// Hours the batch will consume.
        total_hours: u32,
    },
    /// The batch breaks a rule.
    Rejected(Rejection),
}

impl ValidationResult {
    /// Whether the batch was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Accepted total hours, if accepted.
    pub fn total_hours(&self) -> Option<u32> {
        match self {
            Self::Accepted { total_hours } => Some(*total_hours),
            Self::Rejected(_) => None,
        }
    }

    /// The rejection, if rejected.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(r) => Some(r),
        }
    }
}

/// Reason codes rendered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    /// A required input was not provided.
    MissingRequiredField,
    /// The slot does not fit inside one teaching period.
    InvalidTimeWindow,
    /// The batch needs more hours than the unit has left.
    InsufficientCapacity,
}

/// Inputs the user must provide before a batch can be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    /// Turma.
    Turma,
    /// Curricular unit.
    Unit,
    /// Start time.
    StartTime,
    /// Hours per lesson.
    Duration,
    /// At least one day.
    Days,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Turma => "turma",
            Self::Unit => "curricular unit",
            Self::StartTime => "start time",
            Self::Duration => "hours per lesson",
            Self::Days => "days",
        })
    }
}

/// Figures behind an insufficient-capacity rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityShortfall {
    /// Unit display name.
    pub unit_name: String,
    /// Hours still open as of the batch's earliest day.
    pub remaining_capacity: u32,
    /// days × hours per lesson.
    pub total_hours_requested: u32,
    /// Number of days in the batch.
    pub day_count: u32,
    /// Hours per lesson.
    pub duration_hours: u32,
}

/// A rejected batch with the detail needed to explain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// A required input is missing.
    MissingRequiredField {
        /// First missing field.
        field: RequiredField,
    },
    /// The slot is outside every teaching period.
    InvalidTimeWindow {
        /// Policy explanation.
        explanation: String,
    },
    /// Not enough hours left on the unit.
    InsufficientCapacity(CapacityShortfall),
}

impl Rejection {
    /// Reason code.
    pub fn reason(&self) -> RejectionReason {
        match self {
            Self::MissingRequiredField { .. } => RejectionReason::MissingRequiredField,
            Self::InvalidTimeWindow { .. } => RejectionReason::InvalidTimeWindow,
            Self::InsufficientCapacity(_) => RejectionReason::InsufficientCapacity,
        }
    }

    /// User-facing message.
    pub fn message(&self) -> String {
        match self {
            Self::MissingRequiredField { field } => {
                format!("Fill in all required fields: {field} is missing.")
            }
            Self::InvalidTimeWindow { explanation } => explanation.clone(),
            Self::InsufficientCapacity(s) => format!(
                "Insufficient workload hours!\n\n\
                 UC: {}\n\
                 Remaining hours: {}h\n\
                 Trying to schedule: {}h ({} lessons x {}h)\n\n\
                 Reduce the number of days or the hours per lesson.",
                s.unit_name,
                s.remaining_capacity,
                s.total_hours_requested,
                s.day_count,
                s.duration_hours,
            ),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Step 1: reports the first missing required input.
///
/// Only presence is checked here; a start time that is present but
/// malformed is caught when the slot is parsed.
pub fn check_required_fields(request: &SchedulingBatchRequest) -> Option<Rejection> {
    let missing = if is_blank(request.turma_id.as_deref()) {
        RequiredField::Turma
    } else if is_blank(request.unit_id.as_deref()) {
        RequiredField::Unit
    } else if is_blank(request.start_time.as_deref()) {
        RequiredField::StartTime
    } else if request.duration_hours == 0 {
        RequiredField::Duration
    } else if request.days.is_empty() {
        RequiredField::Days
    } else {
        return None;
    };
    Some(Rejection::MissingRequiredField { field: missing })
}

/// Step 2: the slot must fit inside one teaching period.
pub fn check_time_window(slot: &LessonSlot) -> std::result::Result<TeachingPeriod, Rejection> {
    classify_slot(slot).map_err(|e| Rejection::InvalidTimeWindow {
        explanation: e.explanation(),
    })
}

/// Step 3: requested hours must not exceed the unit's remaining hours.
///
/// The cutoff is the earliest day of the batch. Returns the requested
/// total on success.
pub fn check_capacity(
    request: &SchedulingBatchRequest,
    unit: &CurricularUnit,
    prior: &[ScheduledLessonRecord],
) -> std::result::Result<u32, Rejection> {
    let Some(cutoff) = request.earliest_day() else {
        return Err(Rejection::MissingRequiredField {
            field: RequiredField::Days,
        });
    };

    let requested = request.total_hours();
    let remaining = remaining_capacity(unit, prior, cutoff);

    if requested > remaining {
        return Err(Rejection::InsufficientCapacity(CapacityShortfall {
            unit_name: unit.name.clone(),
            remaining_capacity: remaining,
            total_hours_requested: requested,
            day_count: request.day_count(),
            duration_hours: request.duration_hours,
        }));
    }

    Ok(requested)
}

/// Validates a batch against the time-window and workload rules.
///
/// `unit` and `prior` are the already-fetched unit and its committed
/// lessons. Stateless: identical inputs give identical results.
///
/// # Errors
/// [`ScheduleError::InvalidTimeFormat`](crate::error::ScheduleError) when
/// the start time is present but not `HH:MM`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lesson_schedule::models::{CurricularUnit, SchedulingBatchRequest};
/// use lesson_schedule::validation::{validate_batch, ValidationResult};
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
/// let uc = CurricularUnit::new("uc-1", 40).with_name("Databases");
/// let request = SchedulingBatchRequest::new()
///     .with_turma("t-1")
///     .with_unit("uc-1")
///     .with_start_time("08:00")
///     .with_duration(2)
///     .with_days([d(10), d(11)]);
///
/// let result = validate_batch(&request, &uc, &[]).unwrap();
/// assert_eq!(result, ValidationResult::Accepted { total_hours: 4 });
/// ```
pub fn validate_batch(
    request: &SchedulingBatchRequest,
    unit: &CurricularUnit,
    prior: &[ScheduledLessonRecord],
) -> Result<ValidationResult> {
    if let Some(rejection) = check_required_fields(request) {
        return Ok(ValidationResult::Rejected(rejection));
    }

    let Some(slot) = request.slot()? else {
        return Ok(ValidationResult::Rejected(Rejection::MissingRequiredField {
            field: RequiredField::StartTime,
        }));
    };

    if let Err(rejection) = check_time_window(&slot) {
        return Ok(ValidationResult::Rejected(rejection));
    }

    Ok(match check_capacity(request, unit, prior) {
        Ok(total_hours) => ValidationResult::Accepted { total_hours },
        Err(rejection) => ValidationResult::Rejected(rejection),
    })
}
