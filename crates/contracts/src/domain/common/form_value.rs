//! Helpers for turning raw form input into payload values.
//!
//! Forms hand over whatever the user typed. Numeric fields follow the
//! browser's `parseFloat` leniency: blank means "not provided".

/// Parse a numeric field, `None` when blank or not a number.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a numeric field, falling back to zero.
pub fn parse_number_or_zero(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}

/// Blank strings become `None`.
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Format a number the way a JSON number prints in the browser: integers
/// without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
