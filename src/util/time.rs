//! Timestamp conversions for values reported by external services.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses an RFC 3339 timestamp as reported by Sonarr and Radarr.
///
/// Malformed or empty values yield `None` rather than an error so that a bad
/// timestamp on one record never fails a sync.
///
/// # Example
/// ```ignore
/// let added = parse_rfc3339("2024-03-01T12:30:00Z");
/// assert!(added.is_some());
/// assert!(parse_rfc3339("not a date").is_none());
/// ```
pub fn parse_rfc3339(value: Option<&str>) -> Option<NaiveDateTime> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).naive_utc())
}

/// Converts a Unix timestamp in seconds; non-positive values mean "unknown".
pub fn from_unix_seconds(seconds: i64) -> Option<NaiveDateTime> {
    if seconds <= 0 {
        return None;
    }

    DateTime::<Utc>::from_timestamp(seconds, 0).map(|dt| dt.naive_utc())
}

/// Current time as stored in the database.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
