//! Viewport change recording.
//!
//! A map widget reports a viewport change in two steps: one or more
//! display-change notifications while it moves, then an idle notification
//! once it has settled. The recorder keeps at most one pending change
//! between the two, and on settle classifies it as a pan, a zoom or a
//! bounds fit.
//!
//! Viewport changes the program makes itself (initial load, undo/redo
//! playback) must not be recorded. Before making such a change the caller
//! arms the [`SuppressionGate`]; the next settle consumes its token and
//! discards the pending change.

use codapkit_core::LatLng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Center and zoom of the map at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub center: LatLng,
    pub zoom: f64,
}

impl ViewportSnapshot {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Center differs beyond the coordinate equality margin.
    pub fn center_differs(&self, other: &ViewportSnapshot) -> bool {
        !self.center.equals(&other.center)
    }

    pub fn zoom_differs(&self, other: &ViewportSnapshot) -> bool {
        self.zoom != other.zoom
    }
}

impl fmt::Display for ViewportSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{center: {}, zoom: {}}}", self.center, self.zoom)
    }
}

/// How the user changed the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewportChangeKind {
    Pan,
    Zoom,
    FitBounds,
}

impl ViewportChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pan => "pan",
            Self::Zoom => "zoom",
            Self::FitBounds => "fitBounds",
        }
    }
}

impl fmt::Display for ViewportChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the change between two snapshots.
///
/// An explicitly requested fit, or a simultaneous center and zoom change,
/// is a bounds fit. Otherwise a center-only change is a pan and a
/// zoom-only change is a zoom. Identical snapshots yield `None`.
pub fn classify(
    previous: &ViewportSnapshot,
    proposed: &ViewportSnapshot,
    fit_requested: bool,
) -> Option<ViewportChangeKind> {
    let center_changed = proposed.center_differs(previous);
    let zoom_changed = proposed.zoom_differs(previous);

    if !center_changed && !zoom_changed {
        return None;
    }
    if fit_requested || (center_changed && zoom_changed) {
        Some(ViewportChangeKind::FitBounds)
    } else if center_changed {
        Some(ViewportChangeKind::Pan)
    } else {
        Some(ViewportChangeKind::Zoom)
    }
}

/// Why a settle is being suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuppressionReason {
    /// The map has not settled since it was created.
    InitialLoad,
    /// An undo is moving the map back.
    Undo,
    /// A redo is moving the map forward.
    Redo,
    /// A saved viewport is being applied.
    Restore,
}

/// One-shot permission to skip recording a single settle cycle.
///
/// Tokens are only issued by [`SuppressionGate::arm`] and cannot be
/// cloned, so each one covers exactly one settle.
#[derive(Debug, PartialEq, Eq)]
pub struct SuppressionToken {
    reason: SuppressionReason,
}

impl SuppressionToken {
    pub fn reason(&self) -> SuppressionReason {
        self.reason
    }
}

/// Holds at most one outstanding [`SuppressionToken`].
#[derive(Debug, Default)]
pub struct SuppressionGate {
    token: Option<SuppressionToken>,
}

impl SuppressionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the gate ahead of a programmatic viewport change.
    ///
    /// Arming an already armed gate replaces the reason; it still covers
    /// only the next settle.
    pub fn arm(&mut self, reason: SuppressionReason) {
        tracing::debug!("Suppressing next map settle ({:?})", reason);
        self.token = Some(SuppressionToken { reason });
    }

    pub fn is_armed(&self) -> bool {
        self.token.is_some()
    }

    /// Remove the token, disarming the gate.
    pub fn take(&mut self) -> Option<SuppressionToken> {
        self.token.take()
    }
}

/// A change reported by the widget and not yet settled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingChange {
    /// Viewport before the interaction started.
    pub previous: ViewportSnapshot,
    /// Most recent viewport reported by the widget.
    pub proposed: ViewportSnapshot,
    /// Cleared once the change has been settled.
    pub in_progress: bool,
    /// A bounds fit was requested before this change was reported.
    pub fit_in_progress: bool,
}

/// A settled, classified viewport change ready to become a command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportChange {
    pub kind: ViewportChangeKind,
    pub old: ViewportSnapshot,
    pub new: ViewportSnapshot,
}

/// Tracks the pending change between display-change and idle notifications.
#[derive(Debug, Default)]
pub struct ViewportRecorder {
    pending: Option<PendingChange>,
    fit_requested: bool,
}

impl ViewportRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note that the next change comes from an explicit bounds fit.
    pub fn request_fit(&mut self) {
        self.fit_requested = true;
    }

    pub fn fit_requested(&self) -> bool {
        self.fit_requested
    }

    pub fn pending(&self) -> Option<&PendingChange> {
        self.pending.as_ref()
    }

    /// Record a display-change notification.
    ///
    /// The first notification of an interaction captures `previous`;
    /// later ones only move the proposed viewport.
    pub fn display_changed(&mut self, previous: ViewportSnapshot, proposed: ViewportSnapshot) {
        let fit_requested = self.fit_requested;
        match self.pending.as_mut() {
            Some(pending) => {
                pending.proposed = proposed;
                pending.fit_in_progress |= fit_requested;
            }
            None => {
                self.pending = Some(PendingChange {
                    previous,
                    proposed,
                    in_progress: true,
                    fit_in_progress: fit_requested,
                });
            }
        }
        tracing::trace!("Pending map change to {}", proposed);
    }

    /// Handle an idle notification.
    ///
    /// With a suppression token the pending change is discarded and
    /// nothing is returned. Otherwise the pending change, if any, is
    /// classified; the fit request is cleared when it produced a fit.
    pub fn settle(&mut self, suppression: Option<SuppressionToken>) -> Option<ViewportChange> {
        let pending = self.pending.take();

        if let Some(token) = suppression {
            tracing::debug!("Map settled under suppression ({:?})", token.reason());
            return None;
        }

        let mut pending = pending?;
        pending.in_progress = false;

        let kind = classify(&pending.previous, &pending.proposed, pending.fit_in_progress)?;
        if kind == ViewportChangeKind::FitBounds {
            self.fit_requested = false;
        }

        Some(ViewportChange {
            kind,
            old: pending.previous,
            new: pending.proposed,
        })
    }
}
