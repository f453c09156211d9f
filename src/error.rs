//! Error types.
//!
//! Business-rule violations (bad time window, not enough hours left) are
//! not errors: they come back as [`ValidationResult::Rejected`](crate::validation::ValidationResult).
//! [`ScheduleError`] covers conditions where no verdict can be reached.

use crate::store::StoreError;

/// Result alias for fallible scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Conditions that prevent a batch from being evaluated or committed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// The curricular unit lookup returned nothing. Remaining capacity
    /// is indeterminate and the batch must be aborted.
    #[error("unknown curricular unit: {0}")]
    UnknownUnit(String),

    /// The turma lookup returned nothing.
    #[error("unknown turma: {0}")]
    UnknownTurma(String),

    /// The backing store failed while looking something up.
    #[error("lookup failed: {0}")]
    LookupFailure(String),

    /// A start time was supplied but is not a valid 24-hour `HH:MM` string.
    #[error("invalid time '{0}': expected HH:MM")]
    InvalidTimeFormat(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ScheduleError {
    /// Whether the user can fix this by re-entering input.
    ///
    /// A malformed time string is handled like a missing field.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidTimeFormat(_))
    }
}

impl From<StoreError> for ScheduleError {
    fn from(err: StoreError) -> Self {
        Self::LookupFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_classification() {
        assert!(ScheduleError::InvalidTimeFormat("8h".into()).is_input_error());
        assert!(!ScheduleError::UnknownUnit("uc-1".into()).is_input_error());
        assert!(!ScheduleError::LookupFailure("timeout".into()).is_input_error());
    }

    #[test]
    fn test_store_error_becomes_lookup_failure() {
        let err: ScheduleError = StoreError::Unavailable("connection reset".into()).into();
        assert!(matches!(err, ScheduleError::LookupFailure(ref m) if m.contains("connection reset")));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ScheduleError::InvalidTimeFormat("25:00".into()).to_string(),
            "invalid time '25:00': expected HH:MM"
        );
        assert_eq!(
            ScheduleError::UnknownUnit("uc-7".into()).to_string(),
            "unknown curricular unit: uc-7"
        );
    }
}
