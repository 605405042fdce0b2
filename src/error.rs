//! Error types for scene construction.

use thiserror::Error;

/// Errors that can occur while building a scene or its render settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Primitive with degenerate geometry (non-positive radius, empty box extent).
    #[error("invalid primitive: {0}")]
    InvalidPrimitive(String),

    /// Sample pattern without any offsets.
    #[error("sample pattern is empty")]
    EmptySamplePattern,
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;
