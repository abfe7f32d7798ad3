//! # CodapKit History
//!
//! Undo/redo support shared by every CodapKit view.
//!
//! Views describe each user action as a [`Command`] acting on some target
//! state and hand it to an [`UndoHistory`], which executes it, takes
//! ownership of it and keeps it available for undo and redo.
//!
//! ```rust,ignore
//! use codapkit_history::{Command, UndoHistory};
//!
//! let mut history = UndoHistory::new();
//! history.execute(Box::new(SetValue { old: 1, new: 2 }), &mut doc);
//! history.undo(&mut doc)?;
//! history.redo(&mut doc)?;
//! ```

mod command;
pub mod error;
mod undo_history;

pub use command::Command;
pub use error::{HistoryError, HistoryResult};
pub use undo_history::{UndoHistory, DEFAULT_MAX_DEPTH};
