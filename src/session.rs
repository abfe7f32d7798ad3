//! Map session replay.
//!
//! A session is a JSON list of map interactions, for example:
//!
//! ```json
//! [
//!   {"action": "fit", "points": [[40.0, -75.0], [42.0, -71.0]]},
//!   {"action": "pan", "lat": 41.5, "lng": -72.0},
//!   {"action": "zoom", "zoom": 9},
//!   {"action": "base_layer", "layer": "Oceans"},
//!   {"action": "grid", "value": 1.5},
//!   {"action": "undo"},
//!   {"action": "redo"}
//! ]
//! ```
//!
//! Pans and zooms move the headless widget the way a user would, so they
//! go through the same notification path as live interaction.

use codapkit_core::LatLng;
use codapkit_map::{BaseMapLayer, HeadlessMap, MapModel, MapView, MapWidget};
use codapkit_settings::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One recorded interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Pan { lat: f64, lng: f64 },
    Zoom { zoom: f64 },
    /// Plot points and fit the map to them.
    Fit { points: Vec<[f64; 2]> },
    BaseLayer { layer: BaseMapLayer },
    Grid { value: f64 },
    Undo,
    Redo,
}

/// What a replay produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayReport {
    /// Log text of each recorded command, undo/redo labels and skipped steps.
    pub lines: Vec<String>,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

/// Parse a session file.
pub fn load_session(path: &Path) -> anyhow::Result<Vec<Step>> {
    let content = std::fs::read_to_string(path)?;
    let steps = serde_json::from_str(&content)?;
    Ok(steps)
}

/// Build the map view a session runs against.
pub fn session_view(config: &Config, width: f64, height: f64) -> MapView {
    let model = MapModel {
        base_layer: config.map.default_base_layer,
        ..MapModel::default()
    };
    let widget = HeadlessMap::new(width, height, model.center, model.zoom)
        .with_zoom_limits(config.map.min_zoom, config.map.max_zoom);
    MapView::new(model, Box::new(widget), config.map_view_options())
}

/// Run `steps` against `view`.
pub fn replay(view: &mut MapView, steps: &[Step]) -> ReplayReport {
    let mut report = ReplayReport::default();
    // The initial-load settle.
    view.pump();

    for step in steps {
        tracing::debug!("Replaying {:?}", step);
        let recorded = match step {
            Step::Pan { lat, lng } => {
                let zoom = view.widget().zoom();
                view.widget_mut().set_view(LatLng::new(*lat, *lng), zoom);
                view.pump().len()
            }
            Step::Zoom { zoom } => {
                let center = view.widget().center();
                view.widget_mut().set_view(center, *zoom);
                view.pump().len()
            }
            Step::Fit { points } => {
                let points = points
                    .iter()
                    .map(|[lat, lng]| LatLng::new(*lat, *lng))
                    .collect();
                view.set_points(points);
                view.pump().len()
            }
            Step::BaseLayer { layer } => usize::from(view.change_base_layer(*layer)),
            Step::Grid { value } => {
                view.drag_grid_control(*value);
                usize::from(view.release_grid_control())
            }
            Step::Undo => {
                let label = view.history().next_undo_label();
                match view.undo() {
                    Ok(()) => report.lines.extend(label),
                    Err(e) => report.lines.push(format!("skipped: {}", e)),
                }
                view.pump();
                0
            }
            Step::Redo => {
                let label = view.history().next_redo_label();
                match view.redo() {
                    Ok(()) => report.lines.extend(label),
                    Err(e) => report.lines.push(format!("skipped: {}", e)),
                }
                view.pump();
                0
            }
        };
        report.lines.extend(view.history().recent_logs(recorded));
    }

    report.undo_depth = view.history().undo_depth();
    report.redo_depth = view.history().redo_depth();
    report
}
