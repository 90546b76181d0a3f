//! Workflow error model.

use thiserror::Error;

/// Result type used across the workflow core.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Workflow-level error.
///
/// Keep this focused on the operator workflow's failure categories (scan and
/// move validation, lookup misses, backend transport). Rendering and
/// persistence concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// A scanned or typed value failed its format rule, or a move
    /// destination equals the current location. Recoverable at the point of
    /// occurrence: reject, clear the input, let the operator retry.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A lookup found no matching item. A business outcome, not a fault.
    #[error("not found")]
    NotFound,

    /// Talking to an external collaborator failed (timeout, 5xx, malformed
    /// response). Retryable; in-progress buffers are preserved.
    #[error("transport error: {0}")]
    Transport(String),

    /// The bundle enrichment fetch failed. Logged for diagnostics and
    /// swallowed; must never reach the operator.
    #[error("enrichment failed: {0}")]
    Enrichment(String),
}

impl WorkflowError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn enrichment(msg: impl Into<String>) -> Self {
        Self::Enrichment(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Whether the operator can fix this by retrying the same action.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
