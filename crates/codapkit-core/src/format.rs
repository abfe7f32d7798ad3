//! Number formatting for display.

/// Format a number for display with at most `precision` decimal places.
///
/// Trailing zeros and a dangling decimal point are removed, so `3.0`
/// renders as `"3"` and `2.50` as `"2.5"`. Negative zero renders as `"0"`.
/// Non-finite values have no display form and render as an empty string.
pub fn format_number(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let mut text = format!("{:.*}", precision, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }

    if text == "-0" {
        text = "0".to_string();
    }
    text
}
