//! The component that hosts a note view.

use serde::{Deserialize, Serialize};

/// A component frame in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Where the formatting toolbar is placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolbarAnchor {
    pub left: f64,
    pub top: f64,
}

/// Operations a note view needs from its owning component.
pub trait ComponentOwner {
    fn is_selected(&self) -> bool;

    fn select(&mut self);

    /// Store the editor's content in the document.
    fn commit_editing(&mut self);

    /// `None` while the component is not laid out.
    fn frame(&self) -> Option<Frame>;
}
