//! Scheduler configuration.
//!
//! Read from TOML. Every field has a default, so an empty file (or no
//! file) is a valid configuration.
//!
//! ```toml
//! [commit]
//! lesson_status = "Agendada"
//! stop_on_failure = false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::DEFAULT_LESSON_STATUS;

/// Top-level scheduler settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// How accepted batches are committed.
    #[serde(default)]
    pub commit: CommitSettings,
}

/// Commit behaviour for accepted batches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSettings {
    /// Status stored with each new lesson.
    #[serde(default = "default_lesson_status")]
    pub lesson_status: String,
    /// Stop at the first failed day and report the rest as skipped,
    /// instead of attempting every day.
    #[serde(default)]
    pub stop_on_failure: bool,
}

fn default_lesson_status() -> String {
    DEFAULT_LESSON_STATUS.to_string()
}

impl Default for CommitSettings {
    fn default() -> Self {
        Self {
            lesson_status: default_lesson_status(),
            stop_on_failure: false,
        }
    }
}

impl SchedulerConfig {
    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SchedulerConfig = toml::from_str(content)
            .map_err(|e| ScheduleError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ScheduleError::Config(format!(
                "Failed to read config file {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Sets the status stored with new lessons.
    pub fn with_lesson_status(mut self, status: impl Into<String>) -> Self {
        self.commit.lesson_status = status.into();
        self
    }

    /// Stops committing at the first failed day.
    pub fn with_stop_on_failure(mut self, stop: bool) -> Self {
        self.commit.stop_on_failure = stop;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.commit.lesson_status.trim().is_empty() {
            return Err(ScheduleError::Config(
                "commit.lesson_status must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::default();
        assert_eq!(config.commit.lesson_status, "Agendada");
        assert!(!config.commit.stop_on_failure);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SchedulerConfig::from_toml_str("").unwrap();
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let config = SchedulerConfig::from_toml_str(
            r#"
            [commit]
            lesson_status = "Planejada"
            stop_on_failure = true
            "#,
        )
        .unwrap();
        assert_eq!(config.commit.lesson_status, "Planejada");
        assert!(config.commit.stop_on_failure);
    }

    #[test]
    fn test_partial_section() {
        let config = SchedulerConfig::from_toml_str("[commit]\nstop_on_failure = true\n").unwrap();
        assert_eq!(config.commit.lesson_status, "Agendada");
        assert!(config.commit.stop_on_failure);
    }

    #[test]
    fn test_invalid_toml() {
        let err = SchedulerConfig::from_toml_str("[commit\n").unwrap_err();
        assert!(matches!(err, ScheduleError::Config(_)));
    }

    #[test]
    fn test_blank_status_rejected() {
        let err = SchedulerConfig::from_toml_str("[commit]\nlesson_status = \" \"\n").unwrap_err();
        assert!(matches!(err, ScheduleError::Config(ref m) if m.contains("lesson_status")));
    }

    #[test]
    fn test_missing_file() {
        let err = SchedulerConfig::from_file("/nonexistent/lesson-schedule.toml").unwrap_err();
        assert!(matches!(err, ScheduleError::Config(_)));
    }
}
