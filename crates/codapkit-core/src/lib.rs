//! # CodapKit Core
//!
//! Core types, traits, and utilities for CodapKit.
//! Provides geographic coordinates, number formatting, error types and the
//! application event bus shared by the view crates.

pub mod error;
pub mod event_bus;
pub mod format;
pub mod geo;
pub mod types;

pub use error::{Error, MapError, Result};

pub use format::format_number;
pub use geo::{LatLng, LatLngBounds};

// Re-export event bus for convenience
pub use event_bus::{
    AppEvent, CaseChanges, EventBus, EventBusConfig, EventBusError, EventCategory,
    EventFilter, MapEvent, SelectionEvent, SubscriptionId, TextEvent,
};

pub use types::{thread_safe, ThreadSafe};
