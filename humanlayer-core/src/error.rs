//! Error types for store collaborators.

use thiserror::Error;

/// Errors raised by an [`AgentStore`](crate::store::AgentStore).
///
/// Clients propagate these unchanged; only pending polls are retried.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists for the given call id.
    #[error("not found: {call_id}")]
    NotFound {
        /// The call id that was looked up.
        call_id: String,
    },

    /// A write operation failed.
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// The operation conflicts with existing state (duplicate id,
    /// second resolution of the same record).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The backend could not be reached.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Shorthand for [`StoreError::NotFound`].
    pub fn not_found(call_id: impl Into<String>) -> Self {
        Self::NotFound {
            call_id: call_id.into(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
