//! Tool errors.

use thiserror::Error;

/// Errors from tool lookup and execution.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("tool not found: {0}")]
    NotFound(String),
    /// Invalid input for the tool.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Tool execution failed. The source is kept intact so callers can
    /// downcast to the tool's own error type.
    #[error("execution failed: {0}")]
    ExecutionFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}
