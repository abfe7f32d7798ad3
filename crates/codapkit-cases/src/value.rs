//! Attribute values.

use codapkit_core::format_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The value of one attribute for one case.
///
/// Serialized untagged, so `null`, `3.5` and `"red"` are all valid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// No value was ever entered.
    #[default]
    Missing,
    Number(f64),
    Text(String),
}

impl AttributeValue {
    /// Numeric reading of the value.
    ///
    /// Text counts when it parses as a finite number. Blank text and
    /// non-finite numbers do not.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Empty text: present, but neither numeric nor anything else.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }

    /// Formatted for display, numbers rounded to `precision` decimals.
    pub fn display(&self, precision: usize) -> String {
        match self {
            Self::Missing => String::new(),
            Self::Number(n) => format_number(*n, precision),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Unrounded form, used to tell values apart.
impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}
