//! # CodapKit
//!
//! Building blocks for linked-view data exploration:
//! - Map viewport undo recording: pan, zoom and fit-bounds changes reported
//!   by a map widget become undoable commands, except for the changes the
//!   program makes itself (initial load, undo/redo playback)
//! - Case card attribute summaries and graph data tips
//! - Note text value adaptation and editor focus debouncing
//!
//! ## Architecture
//!
//! CodapKit is organized as a workspace with multiple crates:
//!
//! 1. **codapkit-core** - Geographic types, number formatting, errors, event bus
//! 2. **codapkit-history** - Generic undo/redo history and the `Command` trait
//! 3. **codapkit-map** - Map model, widget contract, viewport recorder, map commands
//! 4. **codapkit-cases** - Case values, attribute summaries, data tips
//! 5. **codapkit-text** - Note documents, focus debouncing, note view state
//! 6. **codapkit-settings** - Configuration and persistence
//! 7. **codapkit** - This crate: re-exports, logging setup and the session replay binary

pub mod session;

pub use codapkit_core::{
    format_number, AppEvent, CaseChanges, Error, EventBus, EventBusConfig,
    EventCategory, EventFilter, LatLng, LatLngBounds, MapError, MapEvent, Result,
    SelectionEvent, TextEvent,
};

pub use codapkit_history::{Command, HistoryError, HistoryResult, UndoHistory};

pub use codapkit_map::{
    classify, BaseMapLayer, GridControl, HeadlessMap, MapCommand, MapCommandKind, MapModel,
    MapView, MapViewOptions, MapWidget, SuppressionGate, SuppressionReason, SuppressionToken,
    ViewportChangeKind, ViewportRecorder, ViewportSnapshot,
};

pub use codapkit_cases::{
    summarize, summarize_with, AttrId, Attribute, AttributeTipSource, AttributeValue, Case,
    DataTip, DataTipSource, SummaryFormat,
};

pub use codapkit_text::{
    document_to_text, text_to_document, value_for_editor, ComponentOwner, FocusDebouncer,
    NoteContent, NoteDocument, NoteView, TextError,
};

pub use codapkit_settings::{default_config_path, Config, ConfigError, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout for program output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
