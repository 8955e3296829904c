//! Error types for contact requests and configuration.

use humanlayer_core::{DurationMs, StoreError};
use thiserror::Error;

/// Why a contact request did not produce an answer.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum HumanLayerError {
    /// The human (or backend policy) declined or errored the request.
    /// Not retried.
    #[error("human responded with an error: {0}")]
    HumanResponse(String),

    /// The store returned a record that cannot happen: a malformed
    /// status, or a record for a different call id. Not retried.
    #[error("contract violation: {0}")]
    ContractViolation(String),

    /// A store failure, propagated unchanged.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The record was still pending when the deadline elapsed.
    #[error("timed out after {0} waiting for a human response")]
    Timeout(DurationMs),

    /// The caller cancelled the wait.
    #[error("cancelled while waiting for a human response")]
    Cancelled,

    /// The request was rejected before reaching the store.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl HumanLayerError {
    /// The human's error text, if this is a [`HumanLayerError::HumanResponse`].
    pub fn human_error(&self) -> Option<&str> {
        match self {
            Self::HumanResponse(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Invalid configuration values.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid {
        /// The variable name.
        var: String,
        /// The raw value.
        value: String,
    },
}
