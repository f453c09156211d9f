//! Curricular units and turmas.
//!
//! Both are owned by the external course catalog; the scheduler only
//! reads them.

use serde::{Deserialize, Serialize};

/// A curricular unit (UC) with its total required teaching hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurricularUnit {
    /// Unique unit identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Total required hours (carga horária).
    pub total_hours: u32,
    /// Course the unit belongs to.
    pub course_id: String,
}

impl CurricularUnit {
    /// Creates a unit with the given ID and total hours.
    pub fn new(id: impl Into<String>, total_hours: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            total_hours,
            course_id: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owning course.
    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = course_id.into();
        self
    }
}

/// A class/cohort group enrolled in one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turma {
    /// Unique turma identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Course the turma is enrolled in.
    pub course_id: String,
    /// Course display name.
    pub course_name: String,
}

impl Turma {
    /// Creates a turma enrolled in `course_id`.
    pub fn new(id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            course_id: course_id.into(),
            course_name: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the course display name.
    pub fn with_course_name(mut self, course_name: impl Into<String>) -> Self {
        self.course_name = course_name.into();
        self
    }

    /// Label shown in selection lists: `"<course> - <turma>"`.
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.course_name, self.name)
    }
}
