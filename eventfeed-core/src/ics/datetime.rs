//! Timestamp parsing and ICS DATE-TIME formatting.

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::{FeedError, FeedResult};

/// Formats accepted in addition to RFC 3339 (all require an explicit offset).
const FALLBACK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M%z",
];

/// Parse an ISO-8601 timestamp that carries a UTC offset (`Z` counts as `+00:00`).
///
/// Naive timestamps are rejected: without an offset the wall-clock value can't be paired with
/// a zone reliably.
pub fn parse_timestamp(value: &str) -> FeedResult<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt);
    }

    FALLBACK_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| FeedError::Parse {
            field: "timestamp",
            value: value.to_string(),
        })
}

/// Local wall-clock value as `YYYYMMDDTHHMMSS`.
///
/// The stored fields are used as-is; the offset is dropped, not applied. The value is meant to
/// be paired with a `TZID` parameter so clients resolve the zone themselves.
pub fn format_local(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// UTC value with the `Z` suffix, as required for DTSTAMP.
pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_local_keeps_wall_clock() {
        let dt = parse_timestamp("2025-10-02T19:30:00+10:00").unwrap();
        assert_eq!(format_local(&dt), "20251002T193000");
    }

    #[test]
    fn format_local_does_not_convert_other_offsets() {
        let dt = parse_timestamp("2025-12-24T23:15:45-05:00").unwrap();
        assert_eq!(format_local(&dt), "20251224T231545");
    }

    #[test]
    fn parse_accepts_zulu() {
        let dt = parse_timestamp("2025-10-02T09:30:00Z").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 0);
        assert_eq!(format_local(&dt), "20251002T093000");
    }

    #[test]
    fn parse_accepts_missing_seconds_and_fractions() {
        assert_eq!(
            format_local(&parse_timestamp("2025-10-02T19:30+11:00").unwrap()),
            "20251002T193000"
        );
        assert_eq!(
            format_local(&parse_timestamp("2025-10-02T19:30:05.250+11:00").unwrap()),
            "20251002T193005"
        );
    }

    #[test]
    fn parse_rejects_naive_and_garbage() {
        assert!(matches!(
            parse_timestamp("2025-10-02T19:30:00"),
            Err(FeedError::Parse { .. })
        ));
        assert!(parse_timestamp("2025-10-02").is_err());
        assert!(parse_timestamp("soon").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn format_utc_has_z_suffix() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 20, 15, 4, 5).unwrap();
        assert_eq!(format_utc(&dt), "20250320T150405Z");
    }
}
