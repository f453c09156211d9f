//! Batch scheduler service.
//!
//! # Flow
//!
//! 1. Required-field and time-window checks (no I/O).
//! 2. Unit lookup, then prior-lesson lookup, strictly in that order.
//! 3. Pure validation ([`validate_batch`]).
//! 4. On acceptance, one commit per day, ascending by date, one at a time.
//!
//! Commits are not transactional. Each day's outcome lands in a
//! [`CommitReport`]; failed days can be retried with
//! [`BatchScheduler::retry_failed`].

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::report::{BatchOutcome, CommitReport, DayStatus};
use super::summary::BatchSummary;
use crate::config::SchedulerConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{
    CurricularUnit, LessonCommit, LessonSlot, ScheduledLessonRecord, SchedulingBatchRequest,
};
use crate::store::SchedulingStore;
use crate::validation::{
    check_required_fields, check_time_window, validate_batch, Rejection, RequiredField,
    ValidationResult,
};
use crate::workload::remaining_capacity;

/// Request fields that passed the I/O-free checks.
struct CheckedInput<'a> {
    turma_id: &'a str,
    unit_id: &'a str,
    slot: LessonSlot,
    cutoff: NaiveDate,
}

/// Verdict plus the checked input needed to commit.
enum Evaluation<'a> {
    Accepted {
        input: CheckedInput<'a>,
        total_hours: u32,
    },
    Rejected(Rejection),
}

/// Validates and commits lesson batches against a store.
///
/// Holds no mutable state of its own; every call reads fresh data.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use lesson_schedule::models::{CurricularUnit, SchedulingBatchRequest};
/// use lesson_schedule::scheduler::BatchScheduler;
/// use lesson_schedule::store::InMemoryStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryStore::new().with_unit(CurricularUnit::new("uc-1", 40));
/// let scheduler = BatchScheduler::new(store.clone());
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
/// let request = SchedulingBatchRequest::new()
///     .with_turma("t-1")
///     .with_unit("uc-1")
///     .with_start_time("19:00")
///     .with_duration(3)
///     .with_days([d(10), d(12)]);
///
/// let outcome = scheduler.schedule(&request).await.unwrap();
/// assert!(outcome.report().unwrap().is_complete());
/// assert_eq!(store.commits().len(), 2);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct BatchScheduler<S> {
    store: S,
    config: SchedulerConfig,
}

impl<S: SchedulingStore> BatchScheduler<S> {
    /// Creates a scheduler with default configuration.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: SchedulerConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Units selectable for a turma: those of its course, sorted by name.
    pub async fn units_for_turma(&self, turma_id: &str) -> Result<Vec<CurricularUnit>> {
        let turma = self
            .store
            .lookup_turma(turma_id)
            .await?
            .ok_or_else(|| ScheduleError::UnknownTurma(turma_id.to_string()))?;

        let mut units = self.store.units_for_course(&turma.course_id).await?;
        units.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(units)
    }

    /// Hours of `unit_id` still open as of `cutoff`.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownUnit`] when the unit does not exist;
    /// [`ScheduleError::LookupFailure`] when the store fails. In both cases
    /// capacity is unknown and the batch must not proceed.
    pub async fn remaining_capacity(&self, unit_id: &str, cutoff: NaiveDate) -> Result<u32> {
        let (unit, prior) = self.load_workload(unit_id, cutoff).await?;
        Ok(remaining_capacity(&unit, &prior, cutoff))
    }

    /// Validates a batch without committing anything.
    ///
    /// Idempotent as long as nothing is committed in between.
    pub async fn validate(&self, request: &SchedulingBatchRequest) -> Result<ValidationResult> {
        Ok(match self.evaluate(request).await? {
            Evaluation::Accepted { total_hours, .. } => ValidationResult::Accepted { total_hours },
            Evaluation::Rejected(rejection) => ValidationResult::Rejected(rejection),
        })
    }

    /// Validates a batch and, if accepted, commits one lesson per day.
    ///
    /// A failed day does not undo earlier days. With
    /// `commit.stop_on_failure`, later days are reported as skipped.
    pub async fn schedule(&self, request: &SchedulingBatchRequest) -> Result<BatchOutcome> {
        let (input, total_hours) = match self.evaluate(request).await? {
            Evaluation::Accepted { input, total_hours } => (input, total_hours),
            Evaluation::Rejected(rejection) => {
                info!(reason = ?rejection.reason(), "batch not scheduled");
                return Ok(BatchOutcome::Rejected(rejection));
            }
        };

        info!(
            turma = input.turma_id,
            unit = input.unit_id,
            days = request.day_count(),
            total_hours,
            "committing batch"
        );
        let report = self
            .commit_days(&input, request.days.iter().copied())
            .await;
        Ok(BatchOutcome::Committed(report))
    }

    /// Commits only the days of `previous` that were not persisted.
    ///
    /// The hours for these days were already counted when the batch was
    /// accepted, so capacity is not re-checked. The slot checks still run.
    /// Failed days that are not in `request.days` are ignored.
    pub async fn retry_failed(
        &self,
        request: &SchedulingBatchRequest,
        previous: &CommitReport,
    ) -> Result<BatchOutcome> {
        let input = match precheck(request)? {
            Ok(input) => input,
            Err(rejection) => return Ok(BatchOutcome::Rejected(rejection)),
        };

        let (days, foreign): (Vec<_>, Vec<_>) = previous
            .failed_days()
            .into_iter()
            .partition(|d| request.days.contains(d));
        if !foreign.is_empty() {
            warn!(
                unit = input.unit_id,
                ignored = foreign.len(),
                "failed days outside the request were not retried"
            );
        }
        info!(unit = input.unit_id, days = days.len(), "retrying failed days");
        let report = self.commit_days(&input, days).await;
        Ok(BatchOutcome::Committed(report))
    }

    /// Summary for the editing screen.
    ///
    /// Remaining capacity is looked up when a unit and at least one day
    /// are chosen. An unknown unit leaves it empty.
    pub async fn summary(&self, request: &SchedulingBatchRequest) -> Result<BatchSummary> {
        let unit_id = request.unit_id.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let remaining = match (unit_id, request.earliest_day()) {
            (Some(unit_id), Some(cutoff)) => match self.remaining_capacity(unit_id, cutoff).await {
                Ok(remaining) => Some(remaining),
                Err(ScheduleError::UnknownUnit(_)) => None,
                Err(error) => return Err(error),
            },
            _ => None,
        };
        Ok(BatchSummary::compute(request, remaining))
    }

    async fn evaluate<'a>(&self, request: &'a SchedulingBatchRequest) -> Result<Evaluation<'a>> {
        let input = match precheck(request)? {
            Ok(input) => input,
            Err(rejection) => return Ok(Evaluation::Rejected(rejection)),
        };

        let (unit, prior) = self.load_workload(input.unit_id, input.cutoff).await?;
        match validate_batch(request, &unit, &prior)? {
            ValidationResult::Accepted { total_hours } => {
                debug!(unit = input.unit_id, total_hours, "batch accepted");
                Ok(Evaluation::Accepted { input, total_hours })
            }
            ValidationResult::Rejected(rejection) => {
                debug!(unit = input.unit_id, reason = ?rejection.reason(), "batch rejected");
                Ok(Evaluation::Rejected(rejection))
            }
        }
    }

    async fn load_workload(
        &self,
        unit_id: &str,
        cutoff: NaiveDate,
    ) -> Result<(CurricularUnit, Vec<ScheduledLessonRecord>)> {
        let unit = self
            .store
            .lookup_unit(unit_id)
            .await
            .inspect_err(|error| warn!(unit = unit_id, %error, "unit lookup failed"))?
            .ok_or_else(|| ScheduleError::UnknownUnit(unit_id.to_string()))?;

        let prior = self
            .store
            .list_prior_lessons(unit_id, cutoff)
            .await
            .inspect_err(|error| warn!(unit = unit_id, %error, "lesson history lookup failed"))?;

        debug!(unit = unit_id, %cutoff, prior = prior.len(), "workload loaded");
        Ok((unit, prior))
    }

    async fn commit_days(
        &self,
        input: &CheckedInput<'_>,
        days: impl IntoIterator<Item = NaiveDate>,
    ) -> CommitReport {
        let mut report = CommitReport::new(input.slot.duration_hours);
        let mut halted = false;

        for date in days {
            if halted {
                report.push(date, DayStatus::Skipped);
                continue;
            }

            let lesson = LessonCommit {
                turma_id: input.turma_id.to_string(),
                unit_id: input.unit_id.to_string(),
                date,
                start: input.slot.start,
                end: input.slot.end(),
                hours: input.slot.duration_hours,
                status: self.config.commit.lesson_status.clone(),
            };

            match self.store.commit_lesson(&lesson).await {
                Ok(()) => {
                    debug!(%date, "lesson committed");
                    report.push(date, DayStatus::Committed);
                }
                Err(error) => {
                    warn!(%date, %error, "lesson commit failed");
                    report.push(
                        date,
                        DayStatus::Failed {
                            error: error.to_string(),
                        },
                    );
                    halted = self.config.commit.stop_on_failure;
                }
            }
        }

        report
    }
}

/// Runs the checks that need no lookups.
///
/// The outer `Result` carries parse errors; the inner one a rule rejection.
fn precheck(
    request: &SchedulingBatchRequest,
) -> Result<std::result::Result<CheckedInput<'_>, Rejection>> {
    if let Some(rejection) = check_required_fields(request) {
        return Ok(Err(rejection));
    }

    let Some(turma_id) = request.turma_id.as_deref().map(str::trim) else {
        return Ok(Err(Rejection::MissingRequiredField {
            field: RequiredField::Turma,
        }));
    };
    let Some(unit_id) = request.unit_id.as_deref().map(str::trim) else {
        return Ok(Err(Rejection::MissingRequiredField {
            field: RequiredField::Unit,
        }));
    };
    let Some(slot) = request.slot()? else {
        return Ok(Err(Rejection::MissingRequiredField {
            field: RequiredField::StartTime,
        }));
    };
    let Some(cutoff) = request.earliest_day() else {
        return Ok(Err(Rejection::MissingRequiredField {
            field: RequiredField::Days,
        }));
    };

    if let Err(rejection) = check_time_window(&slot) {
        return Ok(Err(rejection));
    }

    Ok(Ok(CheckedInput {
        turma_id,
        unit_id,
        slot,
        cutoff,
    }))
}
