//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so that a session can be logged
//! and replayed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::geo::LatLng;

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Notifications from a map widget
    Map(MapEvent),
    /// Case selection and value changes
    Selection(SelectionEvent),
    /// Note editor notifications
    Text(TextEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Map(_) => EventCategory::Map,
            AppEvent::Selection(_) => EventCategory::Selection,
            AppEvent::Text(_) => EventCategory::Text,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Map(e) => e.description(),
            AppEvent::Selection(e) => e.description(),
            AppEvent::Text(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Map widget notifications.
    Map,
    /// Case selection events.
    Selection,
    /// Note editor events.
    Text,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Map => write!(f, "Map"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Text => write!(f, "Text"),
        }
    }
}

/// Notifications emitted by a map widget.
///
/// A `DisplayChanged` always precedes the `Idle` that ends the same
/// interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// The displayed viewport moved.
    DisplayChanged {
        /// Center after the change.
        center: LatLng,
        /// Zoom level after the change.
        zoom: f64,
    },
    /// The widget finished its current interaction.
    Idle,
    /// The map background was clicked.
    Click,
}

impl MapEvent {
    fn description(&self) -> String {
        match self {
            MapEvent::DisplayChanged { center, zoom } => {
                format!("Map display changed to {} at zoom {}", center, zoom)
            }
            MapEvent::Idle => "Map idle".to_string(),
            MapEvent::Click => "Map clicked".to_string(),
        }
    }
}

/// Which cases an update touched: a single index or a set of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseChanges {
    /// One changed case.
    Single(usize),
    /// Several changed cases.
    Set(BTreeSet<usize>),
}

impl CaseChanges {
    /// Whether `index` is among the changed cases.
    pub fn contains(&self, index: usize) -> bool {
        match self {
            CaseChanges::Single(i) => *i == index,
            CaseChanges::Set(set) => set.contains(&index),
        }
    }

    /// Number of changed cases.
    pub fn len(&self) -> usize {
        match self {
            CaseChanges::Single(_) => 1,
            CaseChanges::Set(set) => set.len(),
        }
    }

    /// Whether no case changed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<usize> for CaseChanges {
    fn from(index: usize) -> Self {
        CaseChanges::Single(index)
    }
}

impl FromIterator<usize> for CaseChanges {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        CaseChanges::Set(iter.into_iter().collect())
    }
}

/// Case selection and value events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// Values of some cases changed.
    CasesChanged(CaseChanges),
    /// The selection was cleared.
    SelectionCleared,
}

impl SelectionEvent {
    fn description(&self) -> String {
        match self {
            SelectionEvent::CasesChanged(changes) => format!("{} case(s) changed", changes.len()),
            SelectionEvent::SelectionCleared => "Selection cleared".to_string(),
        }
    }
}

/// Note editor events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEvent {
    /// The editor gained focus.
    Focused,
    /// The editor lost focus.
    Blurred,
    /// Editing was committed to the document.
    Committed,
}

impl TextEvent {
    fn description(&self) -> String {
        match self {
            TextEvent::Focused => "Editor focused".to_string(),
            TextEvent::Blurred => "Editor blurred".to_string(),
            TextEvent::Committed => "Editing committed".to_string(),
        }
    }
}
