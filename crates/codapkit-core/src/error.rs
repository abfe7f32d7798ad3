//! Error handling for CodapKit
//!
//! Provides the error types shared by the view crates:
//! - Map errors (coordinates, zoom levels, bounds)
//! - A unified error type for public APIs
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Map error type
///
/// Represents invalid geographic input handed to the map layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// Latitude outside [-90, 90] or not finite
    #[error("Invalid latitude: {lat}")]
    InvalidLatitude {
        /// The rejected latitude.
        lat: f64,
    },

    /// Longitude not finite
    #[error("Invalid longitude: {lng}")]
    InvalidLongitude {
        /// The rejected longitude.
        lng: f64,
    },

    /// Zoom level outside the widget's range
    #[error("Zoom {zoom} outside [{min}, {max}]")]
    InvalidZoom {
        /// The requested zoom.
        zoom: f64,
        /// Minimum allowed zoom.
        min: f64,
        /// Maximum allowed zoom.
        max: f64,
    },

    /// Bounds without any contained point
    #[error("Invalid bounds: {reason}")]
    InvalidBounds {
        /// Why the bounds were rejected.
        reason: String,
    },
}

/// Main error type for CodapKit
///
/// Returned by view operations that take geographic input from callers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Map error
    #[error(transparent)]
    Map(#[from] MapError),
}

impl Error {
    /// Check if this is a map error
    pub fn is_map_error(&self) -> bool {
        matches!(self, Error::Map(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
