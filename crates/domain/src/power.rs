//! Formatting of power and state-of-charge readings.

/// Format a power reading in watts as an integer string (without the unit).
///
/// Rounds half away from zero. Absent readings render as `"0"`, and values
/// that round to zero never render as `"-0"`.
#[must_use]
pub fn format_watts(value: Option<f64>) -> String {
    let rounded = value.unwrap_or_default().round();
    if !rounded.is_finite() || rounded.abs() < 0.5 {
        return "0".to_string();
    }
    format!("{rounded:.0}")
}

/// Format a state of charge in percent (without the `%` sign).
///
/// Uses the shortest decimal form, so `87.0` renders as `"87"` and `54.5`
/// as `"54.5"`. Absent readings render as `"0"`.
#[must_use]
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v.abs() > 0.0 => v.to_string(),
        _ => "0".to_string(),
    }
}
