//! Lenient timestamp parsing for client-supplied dates.
//!
//! Clients send `date_added` in whatever shape their tooling produces, so
//! three forms are accepted:
//!
//! | Input                       | Interpretation            |
//! |-----------------------------|---------------------------|
//! | `2024-01-01T10:30:00+02:00` | RFC 3339, converted to UTC |
//! | `2024-01-01T10:30:00`       | naive, assumed UTC        |
//! | `2024-01-01`                | midnight UTC              |
//!
//! Output is always RFC 3339 via chrono's own `Serialize` impl.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::types::Timestamp;

/// Parse a timestamp in any of the accepted forms. Returns `None` if none match.
pub fn parse_timestamp(input: &str) -> Option<Timestamp> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Serde adapter for `#[serde(deserialize_with = "...")]` on timestamp fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
}
