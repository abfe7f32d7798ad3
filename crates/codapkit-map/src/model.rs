//! Persisted map state.

use codapkit_core::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::recorder::ViewportSnapshot;

/// Tile set drawn underneath the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BaseMapLayer {
    Oceans,
    #[default]
    Topographic,
    Streets,
}

impl BaseMapLayer {
    /// All layers in the order the layer picker offers them.
    pub const ALL: [BaseMapLayer; 3] = [
        BaseMapLayer::Oceans,
        BaseMapLayer::Topographic,
        BaseMapLayer::Streets,
    ];

    /// Short label shown on the layer picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Oceans => "Oceans",
            Self::Topographic => "Topo",
            Self::Streets => "Streets",
        }
    }
}

impl fmt::Display for BaseMapLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Oceans => write!(f, "Oceans"),
            Self::Topographic => write!(f, "Topographic"),
            Self::Streets => write!(f, "Streets"),
        }
    }
}

impl FromStr for BaseMapLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "oceans" => Ok(Self::Oceans),
            "topographic" | "topo" => Ok(Self::Topographic),
            "streets" => Ok(Self::Streets),
            _ => Err(format!("Unknown base map layer: {}", s)),
        }
    }
}

/// Map component state as stored in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapModel {
    pub center: LatLng,
    pub zoom: f64,
    pub base_layer: BaseMapLayer,
    pub grid_multiplier: f64,
    pub points_visible: bool,
    pub lines_visible: bool,
    pub grid_visible: bool,
    /// Plotted case locations.
    #[serde(default)]
    pub points: Vec<LatLng>,
    /// Extent of boundary (area) features, when the map shows any.
    #[serde(default)]
    pub area_bounds: Option<LatLngBounds>,
    /// Set while a saved viewport is being restored; suppresses auto-fit.
    #[serde(default, skip_serializing)]
    pub center_and_zoom_being_restored: bool,
}

impl Default for MapModel {
    fn default() -> Self {
        Self {
            center: LatLng::new(37.84, -122.1),
            zoom: 1.0,
            base_layer: BaseMapLayer::default(),
            grid_multiplier: 1.0,
            points_visible: true,
            lines_visible: false,
            grid_visible: false,
            points: Vec::new(),
            area_bounds: None,
            center_and_zoom_being_restored: false,
        }
    }
}

impl MapModel {
    /// Current viewport as a snapshot.
    pub fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot::new(self.center, self.zoom)
    }

    /// Store a viewport.
    pub fn set_viewport(&mut self, snapshot: ViewportSnapshot) {
        self.center = snapshot.center;
        self.zoom = snapshot.zoom;
    }

    /// Whether the map plots latitude/longitude points.
    pub fn has_lat_long(&self) -> bool {
        !self.points.is_empty()
    }

    /// Extent of the data the map should fit to.
    ///
    /// Point data wins over area features when both are present.
    pub fn data_bounds(&self) -> Option<LatLngBounds> {
        if self.has_lat_long() {
            return LatLngBounds::from_points(&self.points);
        }
        self.area_bounds
    }

    /// The marquee tool is offered whenever something selectable is shown.
    pub fn marquee_tool_visible(&self) -> bool {
        self.points_visible || self.lines_visible || self.grid_visible
    }
}
