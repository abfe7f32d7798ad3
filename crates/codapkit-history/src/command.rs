/// A reversible change that can be executed, undone and redone against a
/// target of type `T`.
///
/// Implementations must make `undo` exactly reverse `execute`, and `redo`
/// must be safe to repeat after any number of undo/redo cycles.
pub trait Command<T>: Send {
    /// Applies the change for the first time.
    fn execute(&mut self, target: &mut T);

    /// Reverts the change.
    fn undo(&mut self, target: &mut T);

    /// Reapplies the change after an undo.
    fn redo(&mut self, target: &mut T) {
        self.execute(target);
    }

    /// Stable machine-readable name, e.g. `map.pan`.
    fn name(&self) -> &str;

    /// Human-readable description written to the user action log.
    fn log(&self) -> String;

    /// Menu label offered for undoing this command.
    fn undo_label(&self) -> String {
        format!("Undo {}", self.name())
    }

    /// Menu label offered for redoing this command.
    fn redo_label(&self) -> String {
        format!("Redo {}", self.name())
    }
}
