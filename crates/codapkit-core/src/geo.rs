//! Geographic coordinates and bounds.
//!
//! `LatLng` equality follows the mapping library convention of comparing
//! within a small margin, so round-tripped coordinates from a map widget
//! compare equal to the values that were set.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MapError;

/// Margin (degrees) under which two coordinates are considered equal.
pub const LAT_LNG_EQUALITY_MARGIN: f64 = 1.0e-9;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a coordinate without validation.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a coordinate, rejecting non-finite values and latitudes
    /// outside [-90, 90].
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, MapError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(MapError::InvalidLatitude { lat });
        }
        if !lng.is_finite() {
            return Err(MapError::InvalidLongitude { lng });
        }
        Ok(Self { lat, lng })
    }

    /// Compares two coordinates within `LAT_LNG_EQUALITY_MARGIN`.
    pub fn equals(&self, other: &LatLng) -> bool {
        self.equals_within(other, LAT_LNG_EQUALITY_MARGIN)
    }

    /// Compares two coordinates within an explicit margin.
    pub fn equals_within(&self, other: &LatLng, margin: f64) -> bool {
        let margin_seen = (self.lat - other.lat)
            .abs()
            .max((self.lng - other.lng).abs());
        margin_seen <= margin
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LatLng({}, {})",
            crate::format::format_number(self.lat, 6),
            crate::format::format_number(self.lng, 6)
        )
    }
}

/// A rectangular geographic area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Creates bounds from two corners, normalizing their order.
    pub fn new(a: LatLng, b: LatLng) -> Self {
        Self {
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    /// Smallest bounds containing every point, or `None` for no points.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a LatLng>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut bounds = Self::new(first, first);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Grows the bounds to include `point`.
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Geographic center of the bounds.
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Checks that both corners are finite and correctly ordered.
    pub fn validate(&self) -> Result<(), MapError> {
        let finite = [self.south_west, self.north_east]
            .iter()
            .all(|c| c.lat.is_finite() && c.lng.is_finite());
        if !finite {
            return Err(MapError::InvalidBounds {
                reason: "non-finite corner".to_string(),
            });
        }
        if self.south_west.lat > self.north_east.lat || self.south_west.lng > self.north_east.lng {
            return Err(MapError::InvalidBounds {
                reason: "corners out of order".to_string(),
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Whether `point` lies inside the bounds (edges included).
    pub fn contains(&self, point: &LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }
}
