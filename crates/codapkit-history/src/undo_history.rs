//! Undo/redo stacks of boxed commands.

use std::collections::VecDeque;
use std::fmt;

use crate::command::Command;
use crate::error::{HistoryError, HistoryResult};

/// Default number of commands kept for undo.
pub const DEFAULT_MAX_DEPTH: usize = 100;

type BoxedCommand<T> = Box<dyn Command<T>>;

/// Manages undo/redo stacks of commands acting on a target `T`
pub struct UndoHistory<T> {
    undo_stack: VecDeque<BoxedCommand<T>>,
    redo_stack: Vec<BoxedCommand<T>>,
    max_depth: usize,
}

impl<T> UndoHistory<T> {
    /// Create a new history with default depth (100)
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_MAX_DEPTH)
    }

    /// Create with custom maximum undo depth (at least 1)
    pub fn with_depth(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(max_depth),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Execute a command and record it.
    ///
    /// The history takes ownership of the command. Any redoable commands
    /// are discarded, and the oldest command is dropped once the history
    /// is deeper than its maximum.
    pub fn execute(&mut self, mut command: BoxedCommand<T>, target: &mut T) {
        command.execute(target);
        tracing::info!(target: "user_action", "{}", command.log());

        self.redo_stack.clear();
        self.undo_stack.push_back(command);

        while self.undo_stack.len() > self.max_depth {
            if let Some(dropped) = self.undo_stack.pop_front() {
                tracing::debug!("Undo history full, dropping {}", dropped.name());
            }
        }
    }

    /// Undo the most recent command
    pub fn undo(&mut self, target: &mut T) -> HistoryResult<()> {
        let mut command = self.undo_stack.pop_back().ok_or(HistoryError::NothingToUndo)?;
        tracing::debug!("{}", command.undo_label());
        command.undo(target);
        self.redo_stack.push(command);
        Ok(())
    }

    /// Redo the most recently undone command
    pub fn redo(&mut self, target: &mut T) -> HistoryResult<()> {
        let mut command = self.redo_stack.pop().ok_or(HistoryError::NothingToRedo)?;
        tracing::debug!("{}", command.redo_label());
        command.redo(target);
        self.undo_stack.push_back(command);
        Ok(())
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo operations available
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redo operations available
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Maximum number of commands kept for undo
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Label for the command `undo` would revert
    pub fn next_undo_label(&self) -> Option<String> {
        self.undo_stack.back().map(|c| c.undo_label())
    }

    /// Label for the command `redo` would reapply
    pub fn next_redo_label(&self) -> Option<String> {
        self.redo_stack.last().map(|c| c.redo_label())
    }

    /// Name of the most recently executed (or redone) command
    pub fn last_command_name(&self) -> Option<&str> {
        self.undo_stack.back().map(|c| c.name())
    }

    /// Names of undoable commands, oldest first
    pub fn undo_names(&self) -> Vec<&str> {
        self.undo_stack.iter().map(|c| c.name()).collect()
    }

    /// Log text of the `count` most recent undoable commands, oldest first
    pub fn recent_logs(&self, count: usize) -> Vec<String> {
        let skip = self.undo_stack.len().saturating_sub(count);
        self.undo_stack.iter().skip(skip).map(|c| c.log()).collect()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl<T> Default for UndoHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for UndoHistory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoHistory")
            .field("undo", &self.undo_names())
            .field("redo_depth", &self.redo_depth())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
