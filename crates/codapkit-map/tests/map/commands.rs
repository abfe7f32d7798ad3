use codapkit_core::LatLng;
use codapkit_history::HistoryError;
use codapkit_map::{BaseMapLayer, MapCommandKind, MapWidget};

use crate::common::{loaded_view, user_moves};

#[test]
fn test_fit_bounds_records_one_fit() {
    let mut view = loaded_view();
    view.set_points(vec![LatLng::new(40.0, -75.0), LatLng::new(42.0, -71.0)]);
    assert!(view.recorder().fit_requested());

    assert_eq!(view.pump(), vec![MapCommandKind::FitBounds]);
    assert!(!view.recorder().fit_requested());
    assert_eq!(view.history().last_command_name(), Some("map.fitBounds"));
    assert!(view.model().zoom > 1.0);
}

#[test]
fn test_fit_bounds_without_data_does_nothing() {
    let mut view = loaded_view();
    assert!(!view.fit_bounds());
    assert!(!view.recorder().fit_requested());
    assert!(view.pump().is_empty());
}

#[test]
fn test_base_layer_change_is_undoable() {
    let mut view = loaded_view();
    assert!(!view.change_base_layer(BaseMapLayer::Topographic));

    assert!(view.change_base_layer(BaseMapLayer::Oceans));
    assert_eq!(view.model().base_layer, BaseMapLayer::Oceans);
    assert_eq!(
        view.history().next_undo_label().as_deref(),
        Some("Undo Change Base Map")
    );

    view.undo().expect("undo");
    assert_eq!(view.model().base_layer, BaseMapLayer::Topographic);
    view.redo().expect("redo");
    assert_eq!(view.model().base_layer, BaseMapLayer::Oceans);
}

#[test]
fn test_grid_change_recorded_on_release() {
    let mut view = loaded_view();
    view.drag_grid_control(1.2);
    view.drag_grid_control(1.5);
    assert_eq!(view.model().grid_multiplier, 1.5);
    assert!(!view.history().can_undo());

    assert!(view.release_grid_control());
    assert!(!view.release_grid_control());
    assert_eq!(view.history().undo_depth(), 1);

    view.undo().expect("undo");
    assert_eq!(view.model().grid_multiplier, 1.0);
    assert_eq!(view.grid_control().value(), 1.0);

    view.redo().expect("redo");
    assert_eq!(view.model().grid_multiplier, 1.5);
    assert_eq!(view.grid_control().persisted(), 1.5);
}

#[test]
fn test_empty_history_errors() {
    let mut view = loaded_view();
    assert_eq!(view.undo(), Err(HistoryError::NothingToUndo));
    assert_eq!(view.redo(), Err(HistoryError::NothingToRedo));
}

#[test]
fn test_marquee_follows_layer_visibility() {
    let mut view = loaded_view();
    assert!(view.marquee_tool_visible());
    view.set_points_visible(false);
    assert!(!view.marquee_tool_visible());
    view.set_grid_visible(true);
    assert!(view.marquee_tool_visible());
}

#[test]
fn test_redo_keeps_model_on_the_widget_zoom() {
    let mut view = loaded_view();
    let center = view.model().center;

    // A notification beyond the widget's range, as a foreign widget might send.
    assert_eq!(user_moves(&mut view, center, 25.0), Some(MapCommandKind::Zoom));
    view.undo().expect("undo");
    assert!(view.pump().is_empty());

    view.redo().expect("redo");
    assert!(view.pump().is_empty());
    assert_eq!(view.widget().zoom(), 18.0);
    assert_eq!(view.model().zoom, 18.0);

    let zoom = view.widget().zoom();
    view.widget_mut().set_view(LatLng::new(5.0, 5.0), zoom);
    assert_eq!(view.pump(), vec![MapCommandKind::Pan]);
}
