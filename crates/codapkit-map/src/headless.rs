//! In-memory map widget.
//!
//! Projects with spherical Web Mercator on 256-pixel tiles and queues the
//! notifications a browser map would emit, which makes it usable for
//! session replay and for exercising the map view without a renderer.

use codapkit_core::{LatLng, LatLngBounds, MapEvent};
use std::collections::VecDeque;
use std::f64::consts::PI;

use crate::widget::MapWidget;

const TILE_SIZE: f64 = 256.0;
const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// A map widget that only keeps viewport state.
#[derive(Debug, Clone)]
pub struct HeadlessMap {
    center: LatLng,
    zoom: f64,
    width: f64,
    height: f64,
    min_zoom: f64,
    max_zoom: f64,
    notifications: VecDeque<MapEvent>,
}

impl HeadlessMap {
    /// Creates a widget of `width` x `height` pixels at the given view.
    pub fn new(width: f64, height: f64, center: LatLng, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            width,
            height,
            min_zoom: 0.0,
            max_zoom: 18.0,
            notifications: VecDeque::new(),
        }
    }

    /// Restricts the zoom range, clamping the current zoom into it.
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom.min(max_zoom);
        self.max_zoom = max_zoom.max(min_zoom);
        self.zoom = self.zoom.clamp(self.min_zoom, self.max_zoom);
        self
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Simulates the user dragging the map to `center`.
    pub fn user_pan(&mut self, center: LatLng) {
        self.move_to(center, self.zoom);
    }

    /// Simulates the user zooming in place.
    pub fn user_zoom(&mut self, zoom: f64) {
        self.move_to(self.center, zoom);
    }

    /// Number of queued notifications.
    pub fn queued(&self) -> usize {
        self.notifications.len()
    }

    fn move_to(&mut self, center: LatLng, zoom: f64) {
        let lat = center.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        self.center = LatLng::new(lat, center.lng);
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self.notifications.push_back(MapEvent::DisplayChanged {
            center: self.center,
            zoom: self.zoom,
        });
        self.notifications.push_back(MapEvent::Idle);
    }
}

/// Web Mercator projection to pixels at `zoom`.
pub fn project(point: &LatLng, zoom: f64) -> (f64, f64) {
    let scale = TILE_SIZE * 2f64.powf(zoom);
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.lng + 180.0) / 360.0 * scale;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;
    (x, y)
}

/// Inverse of [`project`].
pub fn unproject(x: f64, y: f64, zoom: f64) -> LatLng {
    let scale = TILE_SIZE * 2f64.powf(zoom);
    let lng = x / scale * 360.0 - 180.0;
    let n = PI - 2.0 * PI * y / scale;
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

impl MapWidget for HeadlessMap {
    fn center(&self) -> LatLng {
        self.center
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.move_to(center, zoom);
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: [f64; 2]) {
        if !bounds.is_valid() {
            tracing::warn!("Ignoring fit to invalid bounds");
            return;
        }

        let available_x = (self.width - 2.0 * padding[0]).max(1.0);
        let available_y = (self.height - 2.0 * padding[1]).max(1.0);
        let nw = LatLng::new(bounds.north_east.lat, bounds.south_west.lng);
        let se = LatLng::new(bounds.south_west.lat, bounds.north_east.lng);

        // Largest whole zoom at which the projected bounds still fit.
        let mut best = self.min_zoom;
        let mut zoom = self.min_zoom.ceil();
        while zoom <= self.max_zoom {
            let (x0, y0) = project(&nw, zoom);
            let (x1, y1) = project(&se, zoom);
            if (x1 - x0).abs() <= available_x && (y1 - y0).abs() <= available_y {
                best = zoom;
                zoom += 1.0;
            } else {
                break;
            }
        }

        let (x0, y0) = project(&nw, best);
        let (x1, y1) = project(&se, best);
        let center = unproject((x0 + x1) / 2.0, (y0 + y1) / 2.0, best);
        tracing::debug!("Fitting bounds at zoom {} around {}", best, center);
        self.move_to(center, best);
    }

    fn request_idle(&mut self) {
        self.notifications.push_back(MapEvent::Idle);
    }

    fn drain_notifications(&mut self) -> Vec<MapEvent> {
        self.notifications.drain(..).collect()
    }
}
