use codapkit_core::{
    thread_safe, AppEvent, EventBus, LatLng, LatLngBounds, MapEvent, TextEvent,
};
use codapkit_map::{MapModel, MapView, MapViewOptions, MapWidget};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use crate::common::loaded_view;

/// A widget that reports on the bus from inside its own calls, the way an
/// event-driven map does.
struct PublishingMap {
    bus: Arc<EventBus>,
    center: LatLng,
    zoom: f64,
}

impl PublishingMap {
    fn moved(&mut self, center: LatLng, zoom: f64) {
        self.center = center;
        self.zoom = zoom;
        self.bus
            .publish(AppEvent::Map(MapEvent::DisplayChanged { center, zoom }))
            .ok();
        self.bus.publish(AppEvent::Map(MapEvent::Idle)).ok();
    }
}

impl MapWidget for PublishingMap {
    fn center(&self) -> LatLng {
        self.center
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.moved(center, zoom);
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds, _padding: [f64; 2]) {
        self.moved(bounds.center(), self.zoom + 1.0);
    }

    fn request_idle(&mut self) {
        self.bus.publish(AppEvent::Map(MapEvent::Idle)).ok();
    }
}

fn user_pans(bus: &EventBus, center: LatLng, zoom: f64) {
    bus.publish(AppEvent::Map(MapEvent::DisplayChanged { center, zoom }))
        .expect("publish");
    bus.publish(AppEvent::Map(MapEvent::Idle)).expect("publish");
}

/// Run `op` on another thread, failing instead of hanging if it blocks.
fn within_timeout<T: Send + 'static>(op: impl FnOnce() -> T + Send + 'static) -> T {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        tx.send(op()).ok();
    });
    rx.recv_timeout(Duration::from_secs(3))
        .expect("operation blocked on the view lock")
}

#[test]
fn test_attached_view_records_bus_notifications() {
    let bus = EventBus::new();
    let view = thread_safe(loaded_view());
    let id = MapView::attach(&view, &bus);

    bus.publish(AppEvent::Map(MapEvent::DisplayChanged {
        center: LatLng::new(10.0, 10.0),
        zoom: 1.0,
    }))
    .expect("publish");
    bus.publish(AppEvent::Text(TextEvent::Focused)).expect("publish");
    bus.publish(AppEvent::Map(MapEvent::Idle)).expect("publish");

    assert_eq!(view.lock().history().last_command_name(), Some("map.pan"));

    assert!(bus.unsubscribe(id));
    bus.publish(AppEvent::Map(MapEvent::DisplayChanged {
        center: LatLng::new(20.0, 10.0),
        zoom: 1.0,
    }))
    .ok();
    bus.publish(AppEvent::Map(MapEvent::Idle)).ok();
    assert_eq!(view.lock().history().undo_depth(), 1);
}

#[test]
fn test_undo_redo_through_publishing_widget() {
    let bus = Arc::new(EventBus::new());
    let model = MapModel::default();
    let start = model.snapshot();
    let widget = PublishingMap {
        bus: bus.clone(),
        center: model.center,
        zoom: model.zoom,
    };
    let view = thread_safe(MapView::new(model, Box::new(widget), MapViewOptions::default()));
    MapView::attach(&view, &bus);

    // The load settle arrives once the view is attached.
    bus.publish(AppEvent::Map(MapEvent::Idle)).expect("publish");
    assert!(!view.lock().is_suppressing());

    let panned = LatLng::new(30.0, 40.0);
    user_pans(&bus, panned, start.zoom);
    assert_eq!(view.lock().history().undo_depth(), 1);

    let shared = view.clone();
    within_timeout(move || {
        let undone = shared.lock().undo();
        undone
    })
    .expect("undo");
    {
        let view = view.lock();
        assert!(view.model().center.equals(&start.center));
        assert_eq!(view.history().undo_depth(), 0);
        assert_eq!(view.history().redo_depth(), 1);
        assert!(!view.is_suppressing());
    }

    let shared = view.clone();
    within_timeout(move || {
        let redone = shared.lock().redo();
        redone
    })
    .expect("redo");
    {
        let view = view.lock();
        assert!(view.model().center.equals(&panned));
        assert_eq!(view.history().undo_depth(), 1);
        assert!(!view.is_suppressing());
    }

    // The next user move is recorded normally.
    user_pans(&bus, LatLng::new(31.0, 40.0), start.zoom);
    assert_eq!(view.lock().history().undo_depth(), 2);
}

#[test]
fn test_fit_and_restore_through_publishing_widget() {
    let bus = Arc::new(EventBus::new());
    let model = MapModel::default();
    let widget = PublishingMap {
        bus: bus.clone(),
        center: model.center,
        zoom: model.zoom,
    };
    let view = thread_safe(MapView::new(model, Box::new(widget), MapViewOptions::default()));
    MapView::attach(&view, &bus);
    bus.publish(AppEvent::Map(MapEvent::Idle)).expect("publish");

    let shared = view.clone();
    let points = vec![LatLng::new(40.0, -75.0), LatLng::new(42.0, -71.0)];
    within_timeout(move || {
        shared.lock().set_points(points);
    });
    assert_eq!(view.lock().history().last_command_name(), Some("map.fitBounds"));

    let shared = view.clone();
    within_timeout(move || {
        let restored = shared.lock().restore_viewport(LatLng::new(10.0, 10.0), 4.0);
        restored
    })
    .expect("restore");
    let view = view.lock();
    assert_eq!(view.history().undo_depth(), 1);
    assert!(!view.is_suppressing());
    assert!(!view.model().center_and_zoom_being_restored);
    assert_eq!(view.model().zoom, 4.0);
}
