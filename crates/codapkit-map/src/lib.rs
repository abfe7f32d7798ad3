//! # CodapKit Map
//!
//! State and undo recording for the map view.
//!
//! ## Core Components
//!
//! - **MapModel**: persisted map state (viewport, base layer, grid, layer visibility, data)
//! - **MapWidget**: contract of the external map widget (`HeadlessMap` is an in-memory one)
//! - **ViewportRecorder**: turns display-change/idle notification pairs into
//!   pan, zoom and fit-bounds changes, honoring a one-shot suppression gate
//! - **MapCommand**: undoable map commands executed through an `UndoHistory`
//! - **MapView**: ties the above together and reacts to widget notifications
//!
//! ## Notification flow
//!
//! ```text
//! widget ── DisplayChanged ──► ViewportRecorder (pending change)
//! widget ── Idle ────────────► SuppressionGate? ──► classify ──► UndoHistory::execute
//! ```

pub mod commands;
pub mod grid;
pub mod headless;
pub mod model;
pub mod recorder;
pub mod view;
pub mod widget;

pub use commands::{MapCommand, MapCommandKind};
pub use grid::GridControl;
pub use headless::HeadlessMap;
pub use model::{BaseMapLayer, MapModel};
pub use recorder::{
    classify, PendingChange, SuppressionGate, SuppressionReason, SuppressionToken,
    ViewportChange, ViewportChangeKind, ViewportRecorder, ViewportSnapshot,
};
pub use view::{MapContext, MapView, MapViewOptions};
pub use widget::MapWidget;
