//! Undoable map commands.

use codapkit_history::Command;
use std::fmt;

use crate::model::BaseMapLayer;
use crate::recorder::{SuppressionReason, ViewportChange, ViewportChangeKind, ViewportSnapshot};
use crate::view::MapContext;

/// Kind of map command, used for naming and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapCommandKind {
    Pan,
    Zoom,
    FitBounds,
    ChangeBaseLayer,
    ChangeGridSize,
}

impl MapCommandKind {
    /// Stable command name, e.g. `map.pan`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pan => "map.pan",
            Self::Zoom => "map.zoom",
            Self::FitBounds => "map.fitBounds",
            Self::ChangeBaseLayer => "map.changeBaseMap",
            Self::ChangeGridSize => "map.changeGridSize",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Pan => "Map Pan",
            Self::Zoom => "Map Zoom",
            Self::FitBounds => "Map Fit",
            Self::ChangeBaseLayer => "Change Base Map",
            Self::ChangeGridSize => "Change Grid Size",
        }
    }
}

impl From<ViewportChangeKind> for MapCommandKind {
    fn from(kind: ViewportChangeKind) -> Self {
        match kind {
            ViewportChangeKind::Pan => Self::Pan,
            ViewportChangeKind::Zoom => Self::Zoom,
            ViewportChangeKind::FitBounds => Self::FitBounds,
        }
    }
}

impl fmt::Display for MapCommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A recorded map change.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    /// The user panned, zoomed or fitted the viewport.
    ///
    /// The widget is already showing `new` when this is executed, so
    /// execute only updates the model. Undo and redo move the widget and
    /// arm the suppression gate first so the resulting settle is not
    /// recorded again.
    Viewport {
        kind: ViewportChangeKind,
        old: ViewportSnapshot,
        new: ViewportSnapshot,
    },
    ChangeBaseLayer {
        old: BaseMapLayer,
        new: BaseMapLayer,
    },
    /// The slider already applied `new` live, so execute changes nothing.
    ChangeGridSize { previous: f64, new: f64 },
}

impl MapCommand {
    pub fn kind(&self) -> MapCommandKind {
        match self {
            Self::Viewport { kind, .. } => (*kind).into(),
            Self::ChangeBaseLayer { .. } => MapCommandKind::ChangeBaseLayer,
            Self::ChangeGridSize { .. } => MapCommandKind::ChangeGridSize,
        }
    }

    fn apply_viewport(ctx: &mut MapContext, snapshot: ViewportSnapshot, reason: SuppressionReason) {
        ctx.gate.arm(reason);
        ctx.widget.set_view(snapshot.center, snapshot.zoom);
        // The widget may clamp; the model follows what is shown.
        ctx.model
            .set_viewport(ViewportSnapshot::new(ctx.widget.center(), ctx.widget.zoom()));
    }

    fn apply_grid(ctx: &mut MapContext, value: f64) {
        ctx.grid_control.restore(value);
        ctx.model.grid_multiplier = ctx.grid_control.value();
    }
}

impl From<ViewportChange> for MapCommand {
    fn from(change: ViewportChange) -> Self {
        Self::Viewport {
            kind: change.kind,
            old: change.old,
            new: change.new,
        }
    }
}

impl Command<MapContext> for MapCommand {
    fn execute(&mut self, ctx: &mut MapContext) {
        match self {
            Self::Viewport { new, .. } => ctx.model.set_viewport(*new),
            Self::ChangeBaseLayer { new, .. } => ctx.model.base_layer = *new,
            Self::ChangeGridSize { .. } => {}
        }
    }

    fn undo(&mut self, ctx: &mut MapContext) {
        match self {
            Self::Viewport { old, .. } => Self::apply_viewport(ctx, *old, SuppressionReason::Undo),
            Self::ChangeBaseLayer { old, .. } => ctx.model.base_layer = *old,
            Self::ChangeGridSize { previous, .. } => Self::apply_grid(ctx, *previous),
        }
    }

    fn redo(&mut self, ctx: &mut MapContext) {
        match self {
            Self::Viewport { new, .. } => Self::apply_viewport(ctx, *new, SuppressionReason::Redo),
            Self::ChangeBaseLayer { new, .. } => ctx.model.base_layer = *new,
            Self::ChangeGridSize { new, .. } => Self::apply_grid(ctx, *new),
        }
    }

    fn name(&self) -> &str {
        self.kind().name()
    }

    fn log(&self) -> String {
        match self {
            Self::Viewport { kind, new, .. } => format!("mapEvent: {} at {}", kind, new),
            Self::ChangeBaseLayer { new, .. } => format!("Map base layer changed: {}", new),
            Self::ChangeGridSize { previous, new } => {
                format!("Map grid size changed: {{from: {}, to: {}}}", previous, new)
            }
        }
    }

    fn undo_label(&self) -> String {
        format!("Undo {}", self.kind().label())
    }

    fn redo_label(&self) -> String {
        format!("Redo {}", self.kind().label())
    }
}
