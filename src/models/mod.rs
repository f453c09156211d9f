//! Lesson scheduling domain models.
//!
//! Provides the data types for proposing a batch of lessons and for the
//! records the backing store already holds.
//!
//! # Domain Mappings
//!
//! | lesson-schedule | Portuguese UI | Meaning |
//! |-----------------|---------------|---------|
//! | CurricularUnit | Unidade Curricular (UC) | Subject with a fixed hour budget |
//! | Turma | Turma | Class/cohort enrolled in a course |
//! | total_hours | Carga horária | Required teaching hours |
//! | ScheduledLessonRecord | Aula | A lesson already committed |

mod clock;
mod lesson;
mod period;
mod request;
mod slot;
mod unit;

pub use clock::{ClockTime, MINUTES_PER_DAY};
pub use lesson::{LessonCommit, ScheduledLessonRecord, DEFAULT_LESSON_STATUS};
pub use period::TeachingPeriod;
pub use request::SchedulingBatchRequest;
pub use slot::LessonSlot;
pub use unit::{CurricularUnit, Turma};
