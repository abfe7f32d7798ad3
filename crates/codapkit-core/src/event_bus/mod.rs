//! # Event Bus Module
//!
//! Provides a unified event bus for decoupled communication between an
//! external widget layer and the views that react to it.
//!
//! ## Overview
//!
//! The event bus enables publish/subscribe patterns across the application:
//! - Widgets publish typed notifications without knowing their views
//! - Views subscribe with a filter and receive events synchronously, in
//!   publication order, on the publishing thread
//! - Async consumers can poll a broadcast receiver instead
//!
//! ## Usage
//!
//! ```rust,ignore
//! use codapkit_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, MapEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Map]),
//!     |event| {
//!         if let AppEvent::Map(MapEvent::Idle) = event {
//!             println!("map settled");
//!         }
//!     },
//! );
//!
//! bus.publish(AppEvent::Map(MapEvent::Idle)).ok();
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
