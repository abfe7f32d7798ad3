use codapkit_core::LatLng;
use codapkit_map::{classify, ViewportChangeKind, ViewportSnapshot};
use proptest::prelude::*;

fn snapshot() -> impl Strategy<Value = ViewportSnapshot> {
    (-85.0f64..85.0, -180.0f64..180.0, 0u8..19)
        .prop_map(|(lat, lng, zoom)| ViewportSnapshot::new(LatLng::new(lat, lng), zoom as f64))
}

proptest! {
    #[test]
    fn identical_snapshots_never_classify(a in snapshot(), fit in any::<bool>()) {
        prop_assert_eq!(classify(&a, &a, fit), None);
    }

    #[test]
    fn requested_fit_always_wins(a in snapshot(), b in snapshot()) {
        prop_assume!(a.center_differs(&b) || a.zoom_differs(&b));
        prop_assert_eq!(classify(&a, &b, true), Some(ViewportChangeKind::FitBounds));
    }

    #[test]
    fn zoom_only_is_zoom(a in snapshot(), zoom in 0u8..19) {
        let b = ViewportSnapshot::new(a.center, zoom as f64);
        prop_assume!(a.zoom_differs(&b));
        prop_assert_eq!(classify(&a, &b, false), Some(ViewportChangeKind::Zoom));
    }

    #[test]
    fn center_only_is_pan(a in snapshot(), lat in -85.0f64..85.0) {
        let b = ViewportSnapshot::new(LatLng::new(lat, a.center.lng), a.zoom);
        prop_assume!(a.center_differs(&b));
        prop_assert_eq!(classify(&a, &b, false), Some(ViewportChangeKind::Pan));
    }
}
