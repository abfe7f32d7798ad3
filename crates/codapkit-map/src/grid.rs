//! Grid density slider state.
//!
//! Dragging the slider changes the live value continuously; only releasing
//! it with a different value than last persisted produces an undoable
//! change.

/// Slider controlling the grid multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct GridControl {
    value: f64,
    persisted: f64,
    previous_persisted: f64,
    min: f64,
    max: f64,
}

impl GridControl {
    /// Creates a slider over `[min, max]` starting at `value`.
    pub fn new(value: f64, min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let value = value.clamp(min, max);
        Self {
            value,
            persisted: value,
            previous_persisted: value,
            min,
            max,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn persisted(&self) -> f64 {
        self.persisted
    }

    pub fn previous_persisted(&self) -> f64 {
        self.previous_persisted
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Moves the slider, returning the clamped live value.
    pub fn drag_to(&mut self, value: f64) -> f64 {
        if value.is_finite() {
            self.value = value.clamp(self.min, self.max);
        }
        self.value
    }

    /// Releases the slider.
    ///
    /// Returns `(previous, new)` when the value differs from the last
    /// persisted one, which then becomes the new persisted value.
    pub fn release(&mut self) -> Option<(f64, f64)> {
        if self.value == self.persisted {
            return None;
        }
        self.previous_persisted = self.persisted;
        self.persisted = self.value;
        tracing::info!(target: "user_action", "changeGridMultiplier: {}", self.value);
        Some((self.previous_persisted, self.persisted))
    }

    /// Sets both the live and persisted value, as undo/redo playback does.
    pub fn restore(&mut self, value: f64) {
        self.value = value.clamp(self.min, self.max);
        self.persisted = self.value;
    }
}

impl Default for GridControl {
    fn default() -> Self {
        Self::new(1.0, 0.1, 2.0)
    }
}
