//! # CodapKit Text
//!
//! Value handling around a note's rich-text editor. The editor itself is
//! external; this crate adapts stored note content (legacy plain text or a
//! serialized document) into the editor's value, debounces the editor's
//! focus/blur churn and keeps the owning component's selection in step.

pub mod debounce;
pub mod document;
pub mod error;
pub mod owner;
pub mod view;

pub use debounce::{FocusDebouncer, DEFAULT_FOCUS_DEBOUNCE};
pub use document::{
    document_to_text, text_to_document, value_for_editor, Block, BlockKind, Mark, NoteContent,
    NoteDocument, TextRun,
};
pub use error::{TextError, TextResult};
pub use owner::{ComponentOwner, Frame, ToolbarAnchor};
pub use view::NoteView;
