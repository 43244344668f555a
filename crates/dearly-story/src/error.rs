/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur when loading a story document.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    /// The story document is not well-formed JSON or has the wrong shape.
    #[error("failed to parse story document: {0}")]
    Parse(#[from] serde_json::Error),
}
