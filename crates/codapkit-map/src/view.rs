//! The map view controller.
//!
//! `MapView` owns the map context (model, widget, suppression gate, grid
//! slider), the undo history for map commands and the viewport recorder.
//! Widget notifications reach it either through [`MapView::pump`] (queued
//! by a headless widget) or through an event bus subscription made with
//! [`MapView::attach`].
//!
//! A bus widget publishes synchronously from inside `set_view`, which runs
//! while the caller holds the view's lock. Bus handlers therefore never
//! block on that lock: events land in an inbox, and whoever holds the view
//! drains it before releasing.

use codapkit_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, SubscriptionId};
use codapkit_core::{LatLng, MapEvent, ThreadSafe};
use codapkit_history::{HistoryResult, UndoHistory, DEFAULT_MAX_DEPTH};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crate::commands::{MapCommand, MapCommandKind};
use crate::grid::GridControl;
use crate::model::{BaseMapLayer, MapModel};
use crate::recorder::{SuppressionReason, ViewportRecorder, ViewportSnapshot};
use crate::widget::MapWidget;

/// Everything map commands act on.
pub struct MapContext {
    pub model: MapModel,
    pub widget: Box<dyn MapWidget>,
    pub gate: crate::recorder::SuppressionGate,
    pub grid_control: GridControl,
}

impl fmt::Debug for MapContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapContext")
            .field("model", &self.model)
            .field("gate", &self.gate)
            .field("grid_control", &self.grid_control)
            .finish_non_exhaustive()
    }
}

/// Tunables for a map view.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewOptions {
    /// Pixels kept free around fitted data (horizontal, vertical).
    pub fit_padding: [f64; 2],
    /// Commands kept for undo.
    pub history_depth: usize,
    /// Grid multiplier slider range.
    pub grid_range: (f64, f64),
}

impl Default for MapViewOptions {
    fn default() -> Self {
        Self {
            fit_padding: [10.0, 10.0],
            history_depth: DEFAULT_MAX_DEPTH,
            grid_range: (0.1, 2.0),
        }
    }
}

/// Map view: reacts to widget notifications and records undoable changes.
pub struct MapView {
    ctx: MapContext,
    history: UndoHistory<MapContext>,
    recorder: ViewportRecorder,
    options: MapViewOptions,
    inbox: Arc<Mutex<VecDeque<MapEvent>>>,
}

impl MapView {
    /// Creates a view over `widget`.
    ///
    /// The map's first settle comes from loading, not from the user, so the
    /// gate is armed and an idle is requested straight away.
    pub fn new(model: MapModel, widget: Box<dyn MapWidget>, options: MapViewOptions) -> Self {
        let grid_control = GridControl::new(
            model.grid_multiplier,
            options.grid_range.0,
            options.grid_range.1,
        );
        let mut ctx = MapContext {
            model,
            widget,
            gate: Default::default(),
            grid_control,
        };
        ctx.gate.arm(SuppressionReason::InitialLoad);
        ctx.widget.request_idle();

        Self {
            ctx,
            history: UndoHistory::with_depth(options.history_depth),
            recorder: ViewportRecorder::new(),
            options,
            inbox: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn model(&self) -> &MapModel {
        &self.ctx.model
    }

    pub fn widget(&self) -> &dyn MapWidget {
        self.ctx.widget.as_ref()
    }

    pub fn widget_mut(&mut self) -> &mut dyn MapWidget {
        self.ctx.widget.as_mut()
    }

    pub fn history(&self) -> &UndoHistory<MapContext> {
        &self.history
    }

    pub fn recorder(&self) -> &ViewportRecorder {
        &self.recorder
    }

    pub fn grid_control(&self) -> &GridControl {
        &self.ctx.grid_control
    }

    pub fn options(&self) -> &MapViewOptions {
        &self.options
    }

    /// Whether the next settle will be ignored.
    pub fn is_suppressing(&self) -> bool {
        self.ctx.gate.is_armed()
    }

    /// Arm the suppression gate before moving the widget programmatically.
    pub fn suppress_next_settle(&mut self, reason: SuppressionReason) {
        self.ctx.gate.arm(reason);
    }

    /// Apply a saved viewport without recording it.
    ///
    /// The model takes the viewport the widget ends up showing, which may
    /// differ from the request where the widget clamps latitude.
    pub fn restore_viewport(&mut self, center: LatLng, zoom: f64) -> codapkit_core::Result<()> {
        let center = LatLng::try_new(center.lat, center.lng)?;
        let zoom = self.ctx.widget.validate_zoom(zoom)?;

        self.ctx.gate.arm(SuppressionReason::Restore);
        self.ctx.model.center_and_zoom_being_restored = true;
        self.ctx.widget.set_view(center, zoom);
        let shown = ViewportSnapshot::new(self.ctx.widget.center(), self.ctx.widget.zoom());
        self.ctx.model.set_viewport(shown);
        self.drain_inbox();
        Ok(())
    }

    /// Dispatch one widget notification.
    ///
    /// Returns the kind of command recorded, if any.
    pub fn handle_event(&mut self, event: &MapEvent) -> Option<MapCommandKind> {
        match event {
            MapEvent::DisplayChanged { center, zoom } => {
                self.handle_display_change(*center, *zoom);
                None
            }
            MapEvent::Idle => self.handle_idle(),
            MapEvent::Click => {
                tracing::debug!("Map background clicked");
                None
            }
        }
    }

    /// The widget reported a new viewport.
    pub fn handle_display_change(&mut self, center: LatLng, zoom: f64) {
        let previous = self.ctx.model.snapshot();
        self.recorder
            .display_changed(previous, ViewportSnapshot::new(center, zoom));
    }

    /// The widget settled; record the pending change unless suppressed.
    pub fn handle_idle(&mut self) -> Option<MapCommandKind> {
        let token = self.ctx.gate.take();
        if token.is_some() {
            self.ctx.model.center_and_zoom_being_restored = false;
        }

        let change = self.recorder.settle(token)?;
        let command = MapCommand::from(change);
        let kind = command.kind();
        self.history.execute(Box::new(command), &mut self.ctx);
        Some(kind)
    }

    /// Process every notification queued by the widget or left in the
    /// bus inbox.
    ///
    /// Returns the kinds of the commands recorded, in order.
    pub fn pump(&mut self) -> Vec<MapCommandKind> {
        let mut recorded = self.drain_inbox();
        // Handling may queue further notifications (undo moves the widget).
        loop {
            let events = self.ctx.widget.drain_notifications();
            if events.is_empty() {
                break;
            }
            recorded.extend(events.iter().filter_map(|event| self.handle_event(event)));
            recorded.extend(self.drain_inbox());
        }
        recorded
    }

    /// Handle bus notifications that arrived while the view was locked.
    fn drain_inbox(&mut self) -> Vec<MapCommandKind> {
        let mut recorded = Vec::new();
        loop {
            // Pop under the inbox lock, handle without it.
            let Some(event) = self.inbox.lock().pop_front() else {
                break;
            };
            recorded.extend(self.handle_event(&event));
        }
        recorded
    }

    /// Shrink or expand the map to encompass the data.
    ///
    /// Returns false, doing nothing, when there are no valid bounds.
    pub fn fit_bounds(&mut self) -> bool {
        let Some(bounds) = self.ctx.model.data_bounds() else {
            tracing::debug!("No data bounds to fit");
            return false;
        };
        if let Err(e) = bounds.validate() {
            tracing::warn!("Skipping fit: {}", e);
            return false;
        }
        self.recorder.request_fit();
        self.ctx.widget.fit_bounds(&bounds, self.options.fit_padding);
        self.ctx.widget.request_idle();
        self.drain_inbox();
        true
    }

    /// Replace the plotted points, fitting to them unless a saved
    /// viewport is being restored.
    pub fn set_points(&mut self, points: Vec<LatLng>) {
        self.ctx.model.points = points;
        if self.ctx.model.has_lat_long() && !self.ctx.model.center_and_zoom_being_restored {
            self.fit_bounds();
        }
    }

    /// Switch the base layer as an undoable command.
    pub fn change_base_layer(&mut self, layer: BaseMapLayer) -> bool {
        let old = self.ctx.model.base_layer;
        if old == layer {
            return false;
        }
        self.history.execute(
            Box::new(MapCommand::ChangeBaseLayer { old, new: layer }),
            &mut self.ctx,
        );
        true
    }

    /// Drag the grid slider; the model follows live.
    pub fn drag_grid_control(&mut self, value: f64) {
        self.ctx.model.grid_multiplier = self.ctx.grid_control.drag_to(value);
    }

    /// Release the grid slider, recording the change if there was one.
    pub fn release_grid_control(&mut self) -> bool {
        let Some((previous, new)) = self.ctx.grid_control.release() else {
            return false;
        };
        self.history.execute(
            Box::new(MapCommand::ChangeGridSize { previous, new }),
            &mut self.ctx,
        );
        true
    }

    pub fn set_points_visible(&mut self, visible: bool) {
        self.ctx.model.points_visible = visible;
    }

    pub fn set_lines_visible(&mut self, visible: bool) {
        self.ctx.model.lines_visible = visible;
    }

    pub fn set_grid_visible(&mut self, visible: bool) {
        self.ctx.model.grid_visible = visible;
    }

    pub fn marquee_tool_visible(&self) -> bool {
        self.ctx.model.marquee_tool_visible()
    }

    pub fn undo(&mut self) -> HistoryResult<()> {
        self.history.undo(&mut self.ctx)?;
        self.drain_inbox();
        Ok(())
    }

    pub fn redo(&mut self) -> HistoryResult<()> {
        self.history.redo(&mut self.ctx)?;
        self.drain_inbox();
        Ok(())
    }

    /// Subscribe a shared view to map notifications on `bus`.
    ///
    /// Notifications are handled at once when the view is free. When the
    /// view is locked, typically because it is moving a widget that
    /// publishes from `set_view`, they wait in the inbox for the lock holder.
    pub fn attach(view: &ThreadSafe<MapView>, bus: &EventBus) -> SubscriptionId {
        let inbox = Arc::clone(&view.lock().inbox);
        let view = Arc::clone(view);
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Map]),
            move |event| {
                let AppEvent::Map(map_event) = event else {
                    return;
                };
                inbox.lock().push_back(map_event);
                match view.try_lock() {
                    Some(mut view) => {
                        view.drain_inbox();
                    }
                    None => tracing::trace!("Map view busy, notification deferred"),
                }
            },
        )
    }
}

impl fmt::Debug for MapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapView")
            .field("ctx", &self.ctx)
            .field("history", &self.history)
            .field("recorder", &self.recorder)
            .finish()
    }
}
