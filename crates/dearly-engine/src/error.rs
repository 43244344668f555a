//! Error types for the engine.

use dearly_story::ValidationResult;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while traversing a story.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The story graph failed validation; the session refuses to start.
    #[error("story rejected: {0}")]
    RejectedStory(ValidationResult),

    /// A node id failed to resolve during traversal. Should be unreachable
    /// on a validated graph; the session halts when it happens anyway.
    #[error("node not found: \"{0}\"")]
    NodeNotFound(String),

    /// The session halted after a fatal error and accepts no further
    /// transitions.
    #[error("session is halted")]
    Halted,
}
