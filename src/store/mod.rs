//! Data-access collaborators.
//!
//! The scheduler never talks to a database directly. It depends on three
//! narrow traits supplied by the host application:
//!
//! - [`CurricularUnitCatalog`]: unit and turma lookups
//! - [`LessonHistory`]: lessons already committed for a unit
//! - [`LessonSink`]: persists one lesson at a time
//!
//! Lookups must be side-effect free so that a caller can drop a pending
//! future without consequences. Timeouts and retries belong to the
//! implementation, not to the scheduler.
//!
//! [`InMemoryStore`] implements all three for tests and local runs.
//!
//! # Convenience Trait Bound
//!
//! ```ignore
//! async fn plan<S: SchedulingStore>(store: &S) -> StoreResult<()> {
//!     let unit = store.lookup_unit("uc-1").await?;
//!     store.commit_lesson(&lesson).await?;
//!     Ok(())
//! }
//! ```

mod error;
mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{CurricularUnit, LessonCommit, ScheduledLessonRecord, Turma};

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;

/// Read access to the course catalog.
#[async_trait]
pub trait CurricularUnitCatalog: Send + Sync {
    /// Looks up a curricular unit.
    ///
    /// # Returns
    /// * `Ok(Some(unit))` - The unit exists
    /// * `Ok(None)` - No such unit
    /// * `Err(StoreError)` - The lookup itself failed
    async fn lookup_unit(&self, unit_id: &str) -> StoreResult<Option<CurricularUnit>>;

    /// Looks up a turma.
    async fn lookup_turma(&self, turma_id: &str) -> StoreResult<Option<Turma>>;

    /// All units of a course, in any order.
    async fn units_for_course(&self, course_id: &str) -> StoreResult<Vec<CurricularUnit>>;
}

/// Read access to committed lessons.
#[async_trait]
pub trait LessonHistory: Send + Sync {
    /// Lessons of `unit_id` dated strictly before `before`.
    ///
    /// Implementations may return extra records; callers filter by date
    /// again before summing.
    async fn list_prior_lessons(
        &self,
        unit_id: &str,
        before: NaiveDate,
    ) -> StoreResult<Vec<ScheduledLessonRecord>>;
}

/// Write access for accepted lessons.
#[async_trait]
pub trait LessonSink: Send + Sync {
    /// Persists one lesson.
    async fn commit_lesson(&self, lesson: &LessonCommit) -> StoreResult<()>;
}

/// Composite bound for a store providing every capability the scheduler needs.
pub trait SchedulingStore: CurricularUnitCatalog + LessonHistory + LessonSink {}

impl<T> SchedulingStore for T where T: CurricularUnitCatalog + LessonHistory + LessonSink {}
