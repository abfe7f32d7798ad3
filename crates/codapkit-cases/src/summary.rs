//! Attribute summaries for the case card.
//!
//! A case card showing several cases at once summarizes each attribute in
//! one short line:
//!
//! - every present value numeric: the range `min – max` (or the single value
//!   when they coincide), with the unit appended;
//! - more than two distinct values, not all numeric: `"N values"`;
//! - otherwise the distinct values themselves, comma separated.
//!
//! Blank text neither counts as numeric nor prevents a numeric summary.
//! Missing values count as distinct values but are never listed.

use serde::{Deserialize, Serialize};

use crate::case::{AttrId, Case};
use crate::value::AttributeValue;

/// How summaries render numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryFormat {
    /// Decimal places for range endpoints.
    pub precision: usize,
    /// Placed between the range endpoints.
    pub range_separator: String,
}

impl Default for SummaryFormat {
    fn default() -> Self {
        Self {
            precision: 2,
            range_separator: " – ".to_string(),
        }
    }
}

/// Summarize `attr` over `cases` with the default format.
pub fn summarize<'a, I>(cases: I, attr: AttrId, unit: &str) -> String
where
    I: IntoIterator<Item = &'a Case>,
{
    summarize_with(cases, attr, unit, &SummaryFormat::default())
}

/// Summarize `attr` over `cases`.
pub fn summarize_with<'a, I>(cases: I, attr: AttrId, unit: &str, format: &SummaryFormat) -> String
where
    I: IntoIterator<Item = &'a Case>,
{
    // Distinct values by their unrounded text, in first-seen order.
    let mut distinct: Vec<&AttributeValue> = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    let mut all_numeric = true;
    let mut range: Option<(f64, f64)> = None;

    for case in cases {
        let value = case.value(attr);
        let key = key_of(value);
        if !seen.contains(&key) {
            seen.push(key);
            distinct.push(value);
        }

        if let Some(n) = value.as_number() {
            range = Some(match range {
                Some((min, max)) => (min.min(n), max.max(n)),
                None => (n, n),
            });
        } else if !value.is_blank() {
            all_numeric = false;
        }
    }

    if all_numeric {
        return match range {
            None => String::new(),
            Some((min, max)) => {
                let min = codapkit_core::format_number(min, format.precision);
                let max = codapkit_core::format_number(max, format.precision);
                if min == max {
                    format!("{}{}", min, unit)
                } else {
                    format!("{}{}{}{}", min, format.range_separator, max, unit)
                }
            }
        };
    }

    if distinct.len() > 2 {
        return format!("{} values", distinct.len());
    }

    distinct
        .iter()
        .filter(|value| !value.is_missing() && !value.is_blank())
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn key_of(value: &AttributeValue) -> String {
    match value {
        // Keeps missing apart from blank text.
        AttributeValue::Missing => "\u{0}missing".to_string(),
        other => other.to_string(),
    }
}
