//! Time helpers for server-provided timestamps.

use chrono::{DateTime, NaiveDateTime};

/// Parse an ISO 8601 timestamp and return its wall-clock time as `HH:MM:SS`.
///
/// The controller sends local time without an offset
/// (`2024-05-01T12:30:05.123456`); values with an offset are accepted too and
/// shown in their own offset. Returns `None` when the value cannot be parsed.
#[must_use]
pub fn clock_time(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .as_ref()
                .map(DateTime::naive_local)
        })?;
    Some(naive.format("%H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_naive_timestamp_with_fraction() {
        assert_eq!(
            clock_time("2024-05-01T12:30:05.123456").as_deref(),
            Some("12:30:05")
        );
    }

    #[test]
    fn should_parse_naive_timestamp_without_fraction() {
        assert_eq!(clock_time("2024-05-01T07:08:09").as_deref(), Some("07:08:09"));
    }

    #[test]
    fn should_parse_timestamp_with_offset() {
        assert_eq!(
            clock_time("2024-05-01T12:30:05+02:00").as_deref(),
            Some("12:30:05")
        );
    }

    #[test]
    fn should_return_none_for_garbage() {
        assert_eq!(clock_time("yesterday"), None);
    }
}
