//! Note view state.

use codapkit_core::{AppEvent, EventBus, TextEvent};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::debounce::FocusDebouncer;
use crate::document::{value_for_editor, NoteContent, NoteDocument};
use crate::error::TextResult;
use crate::owner::{ComponentOwner, ToolbarAnchor};

/// State behind a note's editor, bound to its owning component.
///
/// Focus and selection are kept in step: once the editor has settled into
/// focus the owner is selected, once it has settled into blur editing is
/// committed, and deselecting the owner blurs a focused editor.
pub struct NoteView<O: ComponentOwner> {
    owner: O,
    editor_value: Option<NoteDocument>,
    stored: Option<NoteContent>,
    editor_focused: bool,
    debouncer: FocusDebouncer,
    bus: Option<Arc<EventBus>>,
}

impl<O: ComponentOwner> NoteView<O> {
    pub fn new(owner: O, stored: Option<NoteContent>, debounce: Duration) -> Self {
        Self {
            owner,
            editor_value: None,
            stored,
            editor_focused: false,
            debouncer: FocusDebouncer::new(debounce),
            bus: None,
        }
    }

    /// Publish settled focus changes and commits on `bus`.
    pub fn with_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn owner(&self) -> &O {
        &self.owner
    }

    pub fn owner_mut(&mut self) -> &mut O {
        &mut self.owner
    }

    pub fn stored(&self) -> Option<&NoteContent> {
        self.stored.as_ref()
    }

    pub fn editor_value(&self) -> Option<&NoteDocument> {
        self.editor_value.as_ref()
    }

    pub fn is_editor_focused(&self) -> bool {
        self.editor_focused
    }

    /// See [`value_for_editor`].
    pub fn value_for_editor(&self) -> TextResult<NoteDocument> {
        value_for_editor(self.editor_value.as_ref(), self.stored.as_ref())
    }

    /// Value for rendering the editor; adopted as the editor value if
    /// there was none.
    pub fn render_editor(&mut self) -> TextResult<&NoteDocument> {
        if self.editor_value.is_none() {
            let value = self.value_for_editor()?;
            self.editor_value = Some(value);
        }
        Ok(self.editor_value.get_or_insert_with(NoteDocument::empty))
    }

    /// Replace the stored content, as loading a document or undo does.
    ///
    /// The editor value is dropped so that the next render adapts the new
    /// content.
    pub fn set_stored(&mut self, stored: Option<NoteContent>) {
        self.stored = stored;
        self.editor_value = None;
    }

    /// The editor's content changed.
    pub fn on_content_change(&mut self, doc: NoteDocument) -> TextResult<()> {
        self.stored = Some(NoteContent::from_document(&doc)?);
        self.editor_value = Some(doc);
        Ok(())
    }

    pub fn on_focus(&mut self, at: Instant) {
        self.editor_focused = true;
        self.debouncer.record(true, at);
    }

    pub fn on_blur(&mut self, at: Instant) {
        self.editor_focused = false;
        self.debouncer.record(false, at);
    }

    /// Act on a settled focus state, if the debounce window has passed.
    ///
    /// Returns the settled state.
    pub fn tick(&mut self, now: Instant) -> Option<bool> {
        let focused = self.debouncer.poll(now)?;
        if focused {
            if !self.owner.is_selected() {
                tracing::debug!("Note editor focused, selecting its component");
                self.owner.select();
            }
            self.publish(TextEvent::Focused);
        } else {
            self.publish(TextEvent::Blurred);
            self.owner.commit_editing();
            self.publish(TextEvent::Committed);
        }
        Some(focused)
    }

    /// The owner's selection changed.
    ///
    /// Returns true if the editor was asked to blur.
    pub fn owner_selection_changed(&mut self, at: Instant) -> bool {
        if !self.owner.is_selected() && self.editor_focused {
            self.on_blur(at);
            return true;
        }
        false
    }

    pub fn toolbar_visible(&self) -> bool {
        self.owner.is_selected()
    }

    /// The toolbar sits against the owner's right edge.
    pub fn toolbar_anchor(&self) -> Option<ToolbarAnchor> {
        self.owner.frame().map(|frame| ToolbarAnchor {
            left: frame.x + frame.width,
            top: frame.y,
        })
    }

    fn publish(&self, event: TextEvent) {
        if let Some(bus) = &self.bus {
            if let Err(e) = bus.publish(AppEvent::Text(event)) {
                tracing::trace!("Text event not delivered: {}", e);
            }
        }
    }
}
