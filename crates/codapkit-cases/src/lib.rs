//! # CodapKit Cases
//!
//! Case and attribute value model plus the two presentation helpers that
//! read it: the case card's attribute summary and the graph's hover data tip.

pub mod case;
pub mod data_tip;
pub mod summary;
pub mod value;

pub use case::{AttrId, Attribute, Case};
pub use data_tip::{AttributeTipSource, DataTip, DataTipSource};
pub use summary::{summarize, summarize_with, SummaryFormat};
pub use value::AttributeValue;
