//! Error types for note content.

use thiserror::Error;

/// Errors raised while adapting stored note content.
#[derive(Error, Debug)]
pub enum TextError {
    /// Serialized content does not describe a note document.
    #[error("Malformed note content: {0}")]
    Malformed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for note content operations
pub type TextResult<T> = std::result::Result<T, TextError>;
