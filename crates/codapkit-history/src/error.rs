//! Error types for the history crate.

use thiserror::Error;

/// Errors that can occur while stepping through the undo history.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// The undo stack is empty.
    #[error("Nothing to undo")]
    NothingToUndo,

    /// The redo stack is empty.
    #[error("Nothing to redo")]
    NothingToRedo,
}

/// Result type alias for history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;
