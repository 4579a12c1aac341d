//! Common types used throughout the OTX client
//!
//! Pulses and events are passed through untouched, so they are plain JSON
//! values. Typed deserialization is left to the caller.

use chrono::{DateTime, SecondsFormat, Utc};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// A threat report returned by the subscribed-pulses endpoint
pub type Pulse = JsonValue;

/// A change/activity record returned by the events endpoint
pub type Event = JsonValue;

// ============================================================================
// Timestamps
// ============================================================================

/// Render a timestamp for the `modified_since` and `since` query parameters
///
/// Produces RFC 3339 with a `Z` suffix, e.g. `2024-05-01T12:30:00Z`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_whole_seconds() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2024-05-01T12:30:00Z");
    }

    #[test]
    fn test_format_timestamp_keeps_subseconds() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(format_timestamp(ts), "2024-05-01T12:30:00.250Z");
    }
}
