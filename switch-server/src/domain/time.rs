//! Timestamp helpers.
//!
//! The feed reports every time as an ISO 8601 UTC string. Internally we use
//! `DateTime<Utc>` throughout and only format back to strings at the edges.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Error returned when a feed timestamp cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {value}")]
pub struct TimeError {
    value: String,
}

/// Parse an RFC 3339 timestamp into UTC.
///
/// # Examples
///
/// ```
/// use switch_server::domain::parse_utc;
///
/// let t = parse_utc("2024-03-15T10:00:00Z").unwrap();
/// assert_eq!(t.to_rfc3339(), "2024-03-15T10:00:00+00:00");
///
/// assert!(parse_utc("10:00").is_err());
/// ```
pub fn parse_utc(s: &str) -> Result<DateTime<Utc>, TimeError> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| TimeError {
            value: s.to_string(),
        })
}

/// Format a timestamp as ISO 8601 with millisecond precision and a `Z`
/// suffix, e.g. `2024-03-15T10:00:00.000Z`.
pub fn to_iso(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Add a whole number of minutes to a timestamp.
pub fn add_minutes(t: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    t + Duration::minutes(minutes)
}

/// Whole minutes from `from` to `to`, rounded to the nearest minute with
/// halves rounded up (towards positive infinity).
///
/// Negative results mean `to` is in the past.
pub fn rounded_minutes_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let millis = (to - from).num_milliseconds();
    (millis + 30_000).div_euclid(60_000)
}
