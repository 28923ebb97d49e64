//! Timestamp decoding and display formatting.
//!
//! Readings arrive with timestamps in one of three shapes: a document-store
//! time object (`{seconds, nanoseconds}`), a serialized string embedding
//! `seconds=<int>` and `nanoseconds=<int>` components, or an opaque string.
//! Decoding never fails hard; unparseable input degrades to a display marker.

use chrono::{DateTime, Local, TimeZone};
use serde_json::Value;

/// Display text for a missing or unrecognized timestamp.
pub const MISSING_DISPLAY: &str = "N/A";

/// Display text for a time object whose conversion failed.
const INVALID_DISPLAY: &str = "Invalid";

/// A reading timestamp after decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamp {
    /// Successfully converted to local time.
    Instant(DateTime<Local>),
    /// An opaque string, kept verbatim (also the soft-failure form).
    Raw(String),
    /// No timestamp was present.
    Missing,
}

impl Timestamp {
    /// Decode a raw timestamp value.
    ///
    /// Total over its input: every JSON shape maps to one of the three
    /// variants, conversion failures included.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => {
                let seconds = map.get("seconds").and_then(Value::as_i64);
                let nanos = map.get("nanoseconds").and_then(Value::as_u64).unwrap_or(0);
                match seconds.and_then(|s| from_epoch(s, nanos as u32)) {
                    Some(instant) => Timestamp::Instant(instant),
                    None => Timestamp::Raw(INVALID_DISPLAY.to_string()),
                }
            }
            Value::String(s) if s.contains("seconds=") => match parse_components(s) {
                Some(instant) => Timestamp::Instant(instant),
                // Keep the raw string when the embedded components don't parse
                None => Timestamp::Raw(s.clone()),
            },
            Value::String(s) => Timestamp::Raw(s.clone()),
            _ => Timestamp::Missing,
        }
    }

    /// Format for display: hour:minute for converted instants, the stored
    /// string for raw timestamps, "N/A" when missing.
    pub fn display(&self) -> String {
        match self {
            Timestamp::Instant(instant) => instant.format("%H:%M").to_string(),
            Timestamp::Raw(s) => s.clone(),
            Timestamp::Missing => MISSING_DISPLAY.to_string(),
        }
    }
}

fn from_epoch(seconds: i64, nanos: u32) -> Option<DateTime<Local>> {
    Local.timestamp_opt(seconds, nanos).earliest()
}

/// Parse a string embedding `seconds=<int>` and `nanoseconds=<int>`.
///
/// Both components must be present; otherwise the caller keeps the raw form.
fn parse_components(s: &str) -> Option<DateTime<Local>> {
    let seconds = extract_int(s, "seconds=")?;
    let nanos = extract_int(s, "nanoseconds=")?;
    from_epoch(seconds, u32::try_from(nanos).ok()?)
}

fn extract_int(s: &str, key: &str) -> Option<i64> {
    let rest = &s[s.find(key)? + key.len()..];
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        rest[..end].parse().ok()
    }
}
