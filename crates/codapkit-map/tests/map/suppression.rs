use codapkit_core::{Error, LatLng, MapError};
use codapkit_map::{MapCommandKind, MapWidget, SuppressionReason};

use crate::common::{fresh_view, loaded_view, user_moves};

#[test]
fn test_initial_load_is_not_recorded() {
    let mut view = fresh_view();
    assert!(view.is_suppressing());

    assert!(view.pump().is_empty());
    assert!(!view.is_suppressing());
    assert!(!view.history().can_undo());
}

#[test]
fn test_suppressed_settle_then_normal_settle() {
    let mut view = loaded_view();
    view.suppress_next_settle(SuppressionReason::Restore);

    view.handle_display_change(LatLng::new(40.0, -100.0), 1.0);
    assert_eq!(view.handle_idle(), None);
    assert!(view.recorder().pending().is_none());
    assert_eq!(view.history().undo_depth(), 0);

    assert_eq!(
        user_moves(&mut view, LatLng::new(41.0, -100.0), 1.0),
        Some(MapCommandKind::Pan)
    );
    assert_eq!(view.history().undo_depth(), 1);
}

#[test]
fn test_undo_and_redo_moves_are_not_recorded_again() {
    let mut view = loaded_view();
    let start = view.model().center;
    let target = LatLng::new(40.0, -100.0);

    assert_eq!(user_moves(&mut view, target, 1.0), Some(MapCommandKind::Pan));
    assert_eq!(view.model().center, target);

    view.undo().expect("undo");
    assert!(view.model().center.equals(&start));
    assert!(view.widget().center().equals(&start));
    assert!(view.is_suppressing());
    assert!(view.pump().is_empty());
    assert_eq!(view.history().undo_depth(), 0);
    assert_eq!(view.history().redo_depth(), 1);

    view.redo().expect("redo");
    assert!(view.pump().is_empty());
    assert!(view.model().center.equals(&target));
    assert_eq!(view.history().undo_depth(), 1);
    assert_eq!(view.history().redo_depth(), 0);
}

#[test]
fn test_zoom_then_undo_restores_zoom() {
    let mut view = loaded_view();
    let center = view.model().center;

    assert_eq!(user_moves(&mut view, center, 4.0), Some(MapCommandKind::Zoom));
    assert_eq!(view.model().zoom, 4.0);

    view.undo().expect("undo");
    view.pump();
    assert_eq!(view.model().zoom, 1.0);
    assert_eq!(view.widget().zoom(), 1.0);
}

#[test]
fn test_restore_viewport_skips_fit_and_history() {
    let mut view = loaded_view();
    let saved = LatLng::new(51.5, -0.12);

    view.restore_viewport(saved, 9.0).expect("restore");
    assert!(view.model().center_and_zoom_being_restored);
    view.set_points(vec![LatLng::new(40.0, -75.0), LatLng::new(42.0, -71.0)]);
    assert!(!view.recorder().fit_requested());

    assert!(view.pump().is_empty());
    assert!(!view.model().center_and_zoom_being_restored);
    assert!(view.model().center.equals(&saved));
    assert_eq!(view.model().zoom, 9.0);
    assert!(!view.history().can_undo());
}

#[test]
fn test_no_op_settle_records_nothing() {
    let mut view = loaded_view();
    let center = view.model().center;
    assert_eq!(user_moves(&mut view, center, 1.0), None);
    assert!(!view.history().can_undo());
}

#[test]
fn test_restore_rejects_bad_latitude() {
    let mut view = loaded_view();
    let err = view
        .restore_viewport(LatLng::new(120.0, 0.0), 3.0)
        .expect_err("latitude");
    assert!(err.is_map_error());
    assert!(!view.is_suppressing());
    assert!(view.pump().is_empty());
}

#[test]
fn test_restore_rejects_zoom_outside_widget_limits() {
    let mut view = loaded_view();
    let zoom = view.model().zoom;

    let err = view
        .restore_viewport(LatLng::new(10.0, 10.0), 25.0)
        .expect_err("zoom");
    assert!(matches!(
        err,
        Error::Map(MapError::InvalidZoom { zoom, min, max }) if zoom == 25.0 && min == 0.0 && max == 18.0
    ));

    let err = view
        .restore_viewport(LatLng::new(10.0, 10.0), f64::NAN)
        .expect_err("nan");
    assert!(matches!(err, Error::Map(MapError::InvalidZoom { .. })));

    assert!(!view.is_suppressing());
    assert!(!view.model().center_and_zoom_being_restored);
    assert_eq!(view.model().zoom, zoom);
    assert!(view.pump().is_empty());
}

#[test]
fn test_restore_follows_clamped_latitude() {
    let mut view = loaded_view();
    view.restore_viewport(LatLng::new(89.0, 10.0), 5.0)
        .expect("restore");
    assert!(view.pump().is_empty());

    let shown = view.widget().center();
    assert!(shown.lat < 89.0);
    assert!(view.model().center.equals(&shown));
    assert_eq!(view.model().zoom, view.widget().zoom());

    // Same viewport again is a no-op, a move at the same zoom is a pan.
    let zoom = view.widget().zoom();
    view.widget_mut().set_view(shown, zoom);
    assert!(view.pump().is_empty());
    view.widget_mut().set_view(LatLng::new(20.0, 10.0), zoom);
    assert_eq!(view.pump(), vec![MapCommandKind::Pan]);
}
