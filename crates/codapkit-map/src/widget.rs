//! Contract of the external map widget.

use codapkit_core::{LatLng, LatLngBounds, MapError, MapEvent};

/// Operations the map view needs from a map widget.
///
/// A widget reports viewport changes as [`MapEvent`] notifications. An
/// event-driven widget publishes them on the event bus; a headless widget
/// queues them for [`MapWidget::drain_notifications`].
pub trait MapWidget: Send {
    fn center(&self) -> LatLng;

    fn zoom(&self) -> f64;

    /// Smallest and largest zoom the widget will show.
    fn zoom_limits(&self) -> (f64, f64) {
        (0.0, 18.0)
    }

    /// Checks a requested zoom against [`MapWidget::zoom_limits`].
    fn validate_zoom(&self, zoom: f64) -> Result<f64, MapError> {
        let (min, max) = self.zoom_limits();
        if zoom.is_finite() && (min..=max).contains(&zoom) {
            Ok(zoom)
        } else {
            Err(MapError::InvalidZoom { zoom, min, max })
        }
    }

    /// Move the viewport.
    fn set_view(&mut self, center: LatLng, zoom: f64);

    /// Move the viewport so that `bounds` fits, keeping `padding` pixels
    /// (horizontal, vertical) free at each edge.
    fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: [f64; 2]);

    /// Ask the widget to report idle once it has settled.
    fn request_idle(&mut self);

    /// Notifications queued since the last call.
    fn drain_notifications(&mut self) -> Vec<MapEvent> {
        Vec::new()
    }
}
