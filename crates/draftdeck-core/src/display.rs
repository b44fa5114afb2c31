//! Human-readable formatting for backend values.

use chrono::{DateTime, NaiveDateTime};

/// Placeholder for missing or unparsable values.
pub const MISSING: &str = "\u{2014}";

/// Formats a backend timestamp as `"Feb 1 2026 - 02:00pm"`.
///
/// Accepts RFC 3339, a bare `YYYY-MM-DDTHH:MM:SS` clock time, or epoch
/// milliseconds; the wall-clock time carried by the value is shown as-is.
/// Missing or unparsable values render as an em dash.
#[must_use]
pub fn format_timestamp(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return MISSING.to_string();
    };
    parse_timestamp(raw).map_or_else(
        || MISSING.to_string(),
        |dt| dt.format("%b %-d %Y - %I:%M%P").to_string(),
    )
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        // Keep the wall-clock time as written, not a shifted zone.
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(millis) = raw.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_naive_timestamp() {
        assert_eq!(
            format_timestamp(Some("2026-02-01T14:00:00")),
            "Feb 1 2026 - 02:00pm"
        );
    }

    #[test]
    fn test_formats_rfc3339_wall_clock() {
        assert_eq!(
            format_timestamp(Some("2026-02-01T09:05:00Z")),
            "Feb 1 2026 - 09:05am"
        );
        assert_eq!(
            format_timestamp(Some("2026-12-24T23:59:00+02:00")),
            "Dec 24 2026 - 11:59pm"
        );
    }

    #[test]
    fn test_formats_epoch_millis() {
        // 2026-02-01T14:00:00Z
        assert_eq!(
            format_timestamp(Some("1769954400000")),
            "Feb 1 2026 - 02:00pm"
        );
    }

    #[test]
    fn test_midnight_and_noon_use_twelve() {
        assert_eq!(
            format_timestamp(Some("2026-02-01T00:30:00")),
            "Feb 1 2026 - 12:30am"
        );
        assert_eq!(
            format_timestamp(Some("2026-02-01T12:00:00")),
            "Feb 1 2026 - 12:00pm"
        );
    }

    #[test]
    fn test_missing_or_invalid_renders_em_dash() {
        assert_eq!(format_timestamp(None), MISSING);
        assert_eq!(format_timestamp(Some("")), MISSING);
        assert_eq!(format_timestamp(Some("not a date")), MISSING);
    }
}
