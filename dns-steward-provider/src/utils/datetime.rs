//! Date/time serialization helpers.
//!
//! Custom serde support for optional timestamps:
//! - serialize: `DateTime<Utc>` -> RFC3339 string
//! - deserialize: RFC3339 string, Unix timestamp, or empty string (-> `None`)
//!
//! The Technitium API reports zone timestamps as ISO strings with seven
//! fractional digits and sometimes as an empty string for "never".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize `Option<DateTime<Utc>>` as an optional RFC3339 string.
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

/// Deserialize from an RFC3339 string, a Unix timestamp, or an empty string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OptionalTimestamp {
        String(String),
        I64(i64),
    }

    match Option::<OptionalTimestamp>::deserialize(deserializer)? {
        Some(OptionalTimestamp::String(s)) if s.is_empty() => Ok(None),
        Some(OptionalTimestamp::String(s)) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        Some(OptionalTimestamp::I64(ts)) => DateTime::from_timestamp(ts, 0)
            .map(Some)
            .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super", default)]
        ts: Option<DateTime<Utc>>,
    }

    #[test]
    fn rfc3339_with_fractional_digits() {
        let json = r#"{"ts":"2024-05-01T08:39:53.0000000Z"}"#;
        let h: Holder = serde_json::from_str(json).unwrap_or(Holder { ts: None });
        assert!(h.ts.is_some());
    }

    #[test]
    fn empty_string_is_none() {
        let json = r#"{"ts":""}"#;
        let h: Holder = serde_json::from_str(json).unwrap_or(Holder {
            ts: Some(Utc::now()),
        });
        assert!(h.ts.is_none());
    }

    #[test]
    fn missing_field_is_none() {
        let json = "{}";
        let h: Holder = serde_json::from_str(json).unwrap_or(Holder {
            ts: Some(Utc::now()),
        });
        assert!(h.ts.is_none());
    }

    #[test]
    fn unix_timestamp_accepted() {
        let json = r#"{"ts":1714550393}"#;
        let h: Holder = serde_json::from_str(json).unwrap_or(Holder { ts: None });
        assert!(h.ts.is_some());
    }
}
