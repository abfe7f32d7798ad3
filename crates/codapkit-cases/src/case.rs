//! Cases and attributes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::value::AttributeValue;

/// Attribute identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrId(pub u32);

impl fmt::Display for AttrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attr{}", self.0)
    }
}

/// A named column of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: AttrId,
    pub name: String,
    /// Appended verbatim after formatted values, e.g. `" kg"`.
    #[serde(default)]
    pub unit: String,
}

impl Attribute {
    pub fn new(id: AttrId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            unit: String::new(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}

static MISSING: AttributeValue = AttributeValue::Missing;

/// One row of data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: u64,
    #[serde(default)]
    values: BTreeMap<AttrId, AttributeValue>,
}

impl Case {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            values: BTreeMap::new(),
        }
    }

    /// Builder form of [`Case::set_value`].
    pub fn with_value(mut self, attr: AttrId, value: impl Into<AttributeValue>) -> Self {
        self.set_value(attr, value);
        self
    }

    pub fn set_value(&mut self, attr: AttrId, value: impl Into<AttributeValue>) {
        self.values.insert(attr, value.into());
    }

    /// Value of `attr`, `Missing` when the case has none.
    pub fn value(&self, attr: AttrId) -> &AttributeValue {
        self.values.get(&attr).unwrap_or(&MISSING)
    }

    pub fn attributes(&self) -> impl Iterator<Item = AttrId> + '_ {
        self.values.keys().copied()
    }
}
