//! Centralized error types for the mind-map domain.

use thiserror::Error;

/// Main error type for mind-map operations.
#[derive(Error, Debug)]
pub enum MindmapError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent node not found: {0}")]
    ParentNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for mind-map operations.
pub type MindmapResult<T> = Result<T, MindmapError>;

impl MindmapError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
