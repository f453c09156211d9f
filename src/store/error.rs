//! Error types for data-access collaborators.

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by the backing store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or timed out.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the write (constraint, permission, conflict).
    #[error("store rejected the write: {0}")]
    Rejected(String),
}
