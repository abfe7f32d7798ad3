use codapkit_core::{LatLng, MapEvent};
use codapkit_map::{HeadlessMap, MapCommandKind, MapModel, MapView, MapViewOptions};

/// A view over a headless widget, with the initial-load settle already
/// processed.
pub fn loaded_view() -> MapView {
    let mut view = fresh_view();
    assert!(view.pump().is_empty());
    view
}

pub fn fresh_view() -> MapView {
    let model = MapModel::default();
    let widget = HeadlessMap::new(800.0, 600.0, model.center, model.zoom);
    MapView::new(model, Box::new(widget), MapViewOptions::default())
}

/// Simulate the user moving the map and letting it settle.
pub fn user_moves(view: &mut MapView, center: LatLng, zoom: f64) -> Option<MapCommandKind> {
    view.handle_event(&MapEvent::DisplayChanged { center, zoom });
    view.handle_event(&MapEvent::Idle)
}
