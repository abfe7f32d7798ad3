//! Focus/blur debouncing.
//!
//! Rich-text editors emit bursts of focus and blur events while they
//! rearrange their selection. Only the state that holds for a full quiet
//! window is reported.

use std::time::{Duration, Instant};

pub const DEFAULT_FOCUS_DEBOUNCE: Duration = Duration::from_millis(200);

/// Coalesces focus toggles into the last state after a quiet window.
#[derive(Debug, Clone)]
pub struct FocusDebouncer {
    window: Duration,
    pending: Option<(bool, Instant)>,
}

impl FocusDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a focus (`true`) or blur (`false`), restarting the window.
    pub fn record(&mut self, focused: bool, at: Instant) {
        self.pending = Some((focused, at));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The settled state, once `window` has passed since the last record.
    pub fn poll(&mut self, now: Instant) -> Option<bool> {
        let (focused, at) = self.pending?;
        if now.saturating_duration_since(at) < self.window {
            return None;
        }
        self.pending = None;
        Some(focused)
    }

    /// Drop any unreported state.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl Default for FocusDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_DEBOUNCE)
    }
}
