use codapkit_core::{AppEvent, EventBus, EventBusConfig, EventCategory, EventFilter, TextEvent};
use codapkit_text::{ComponentOwner, Frame, NoteContent, NoteView, DEFAULT_FOCUS_DEBOUNCE};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Default)]
struct Note {
    selected: bool,
    committed: usize,
}

impl ComponentOwner for Note {
    fn is_selected(&self) -> bool {
        self.selected
    }

    fn select(&mut self) {
        self.selected = true;
    }

    fn commit_editing(&mut self) {
        self.committed += 1;
    }

    fn frame(&self) -> Option<Frame> {
        Some(Frame::new(0.0, 0.0, 200.0, 100.0))
    }
}

#[test]
fn test_focus_cycle_publishes_text_events() {
    let bus = Arc::new(EventBus::with_config(EventBusConfig::default()));
    let seen = Arc::new(Mutex::new(Vec::new()));
    {
        let seen = Arc::clone(&seen);
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Text]),
            move |event| {
                if let AppEvent::Text(text) = event {
                    seen.lock().push(text);
                }
            },
        );
    }

    let mut view = NoteView::new(
        Note::default(),
        Some(NoteContent::Text("Notes".to_string())),
        DEFAULT_FOCUS_DEBOUNCE,
    )
    .with_bus(Arc::clone(&bus));

    let start = Instant::now();
    view.on_focus(start);
    view.tick(start + Duration::from_millis(250));
    assert!(view.owner().selected);

    view.owner_mut().selected = false;
    view.owner_selection_changed(start + Duration::from_millis(300));
    view.tick(start + Duration::from_millis(600));

    assert_eq!(view.owner().committed, 1);
    assert_eq!(
        *seen.lock(),
        vec![TextEvent::Focused, TextEvent::Blurred, TextEvent::Committed]
    );
}
