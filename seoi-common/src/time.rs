//! Timestamp utilities

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Format a timestamp as ISO-8601 with millisecond precision and `Z` suffix
///
/// Example: `2026-01-01T00:00:00.000Z`
pub fn to_iso8601(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time as an ISO-8601 string
pub fn now_iso8601() -> String {
    to_iso8601(now())
}

/// Calendar date of an ISO-8601 timestamp string, if it parses
pub fn date_of(timestamp: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.with_timezone(&Utc).date_naive())
}
