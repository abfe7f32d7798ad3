//! Hover data tip for plotted cases.

use codapkit_core::CaseChanges;
use serde::{Deserialize, Serialize};

use crate::case::{Attribute, Case};

/// Supplies the text a data tip shows for a case.
pub trait DataTipSource {
    fn tip_text(&self, case_index: usize) -> String;
}

/// Tip text listing `name: value` for a fixed set of attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeTipSource {
    pub attributes: Vec<Attribute>,
    pub cases: Vec<Case>,
    pub precision: usize,
}

impl AttributeTipSource {
    pub fn new(attributes: Vec<Attribute>, cases: Vec<Case>) -> Self {
        Self {
            attributes,
            cases,
            precision: 2,
        }
    }

    pub fn case_mut(&mut self, index: usize) -> Option<&mut Case> {
        self.cases.get_mut(index)
    }
}

impl DataTipSource for AttributeTipSource {
    fn tip_text(&self, case_index: usize) -> String {
        let Some(case) = self.cases.get(case_index) else {
            return String::new();
        };
        self.attributes
            .iter()
            .map(|attr| {
                let value = case.value(attr.id);
                let unit = if value.is_missing() { "" } else { attr.unit.as_str() };
                format!("{}: {}{}", attr.name, value.display(self.precision), unit)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Tooltip shown while hovering a plotted case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTip {
    case_index: Option<usize>,
    position: (f64, f64),
    text: String,
    visible: bool,
}

impl DataTip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the tip for case `index` at `(x, y)`.
    pub fn show(&mut self, x: f64, y: f64, index: usize, source: &dyn DataTipSource) {
        self.case_index = Some(index);
        self.position = (x, y);
        self.text = source.tip_text(index);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn case_index(&self) -> Option<usize> {
        self.case_index
    }

    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Refresh the text if the shown case is among `changes`.
    ///
    /// Returns whether the tip was updated.
    pub fn handle_changes(&mut self, changes: &CaseChanges, source: &dyn DataTipSource) -> bool {
        let Some(index) = self.case_index else {
            return false;
        };
        if !self.visible || !changes.contains(index) {
            return false;
        }
        self.text = source.tip_text(index);
        tracing::trace!("Data tip for case {} refreshed", index);
        true
    }
}
