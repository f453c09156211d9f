//! In-memory store.
//!
//! Implements every store trait over shared `HashMap`/`Vec` state. Used by
//! unit tests and local development; supports failure injection so
//! partial-commit paths can be exercised.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{CurricularUnitCatalog, LessonHistory, LessonSink, StoreError, StoreResult};
use crate::models::{CurricularUnit, LessonCommit, ScheduledLessonRecord, Turma};

/// In-memory implementation of the scheduling store.
///
/// Cloning shares the underlying data.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use lesson_schedule::models::{CurricularUnit, ScheduledLessonRecord};
/// use lesson_schedule::store::InMemoryStore;
///
/// let store = InMemoryStore::new()
///     .with_unit(CurricularUnit::new("uc-1", 40))
///     .with_lesson(ScheduledLessonRecord::new(
///         "uc-1",
///         NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///         4,
///     ));
/// assert_eq!(store.lessons().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    data: Arc<RwLock<MemoryData>>,
}

#[derive(Debug, Default)]
struct MemoryData {
    units: HashMap<String, CurricularUnit>,
    turmas: HashMap<String, Turma>,
    lessons: Vec<ScheduledLessonRecord>,
    commits: Vec<LessonCommit>,

    // Failure injection
    failing_commit_dates: HashSet<NaiveDate>,
    offline: bool,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a curricular unit.
    pub fn with_unit(self, unit: CurricularUnit) -> Self {
        self.insert_unit(unit);
        self
    }

    /// Adds a turma.
    pub fn with_turma(self, turma: Turma) -> Self {
        if let Ok(mut data) = self.data.write() {
            data.turmas.insert(turma.id.clone(), turma);
        }
        self
    }

    /// Adds an already-committed lesson.
    pub fn with_lesson(self, lesson: ScheduledLessonRecord) -> Self {
        if let Ok(mut data) = self.data.write() {
            data.lessons.push(lesson);
        }
        self
    }

    /// Inserts or replaces a curricular unit.
    pub fn insert_unit(&self, unit: CurricularUnit) {
        if let Ok(mut data) = self.data.write() {
            data.units.insert(unit.id.clone(), unit);
        }
    }

    /// Makes commits for `date` fail until cleared.
    pub fn fail_commits_on(&self, date: NaiveDate) {
        if let Ok(mut data) = self.data.write() {
            data.failing_commit_dates.insert(date);
        }
    }

    /// Clears all injected commit failures.
    pub fn clear_commit_failures(&self) {
        if let Ok(mut data) = self.data.write() {
            data.failing_commit_dates.clear();
        }
    }

    /// While offline, every read and write fails with `Unavailable`.
    pub fn set_offline(&self, offline: bool) {
        if let Ok(mut data) = self.data.write() {
            data.offline = offline;
        }
    }

    /// Snapshot of all lesson records, committed ones included.
    pub fn lessons(&self) -> Vec<ScheduledLessonRecord> {
        self.data
            .read()
            .map(|d| d.lessons.clone())
            .unwrap_or_default()
    }

    /// Snapshot of the commits accepted so far, in commit order.
    pub fn commits(&self) -> Vec<LessonCommit> {
        self.data
            .read()
            .map(|d| d.commits.clone())
            .unwrap_or_default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, MemoryData>> {
        let data = self
            .data
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))?;
        if data.offline {
            return Err(StoreError::Unavailable("store is offline".into()));
        }
        Ok(data)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, MemoryData>> {
        let data = self
            .data
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))?;
        if data.offline {
            return Err(StoreError::Unavailable("store is offline".into()));
        }
        Ok(data)
    }
}

#[async_trait]
impl CurricularUnitCatalog for InMemoryStore {
    async fn lookup_unit(&self, unit_id: &str) -> StoreResult<Option<CurricularUnit>> {
        Ok(self.read()?.units.get(unit_id).cloned())
    }

    async fn lookup_turma(&self, turma_id: &str) -> StoreResult<Option<Turma>> {
        Ok(self.read()?.turmas.get(turma_id).cloned())
    }

    async fn units_for_course(&self, course_id: &str) -> StoreResult<Vec<CurricularUnit>> {
        Ok(self
            .read()?
            .units
            .values()
            .filter(|u| u.course_id == course_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LessonHistory for InMemoryStore {
    async fn list_prior_lessons(
        &self,
        unit_id: &str,
        before: NaiveDate,
    ) -> StoreResult<Vec<ScheduledLessonRecord>> {
        let mut lessons: Vec<_> = self
            .read()?
            .lessons
            .iter()
            .filter(|l| l.unit_id == unit_id && l.date < before)
            .cloned()
            .collect();
        lessons.sort_by_key(|l| l.date);
        Ok(lessons)
    }
}

#[async_trait]
impl LessonSink for InMemoryStore {
    async fn commit_lesson(&self, lesson: &LessonCommit) -> StoreResult<()> {
        let mut data = self.write()?;
        if data.failing_commit_dates.contains(&lesson.date) {
            return Err(StoreError::Rejected(format!(
                "commit refused for {}",
                lesson.date
            )));
        }
        data.lessons.push(lesson.to_record());
        data.commits.push(lesson.clone());
        Ok(())
    }
}
