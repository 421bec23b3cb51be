// License: MIT

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Fixed textual format for persisted timestamps.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The on-disk record. A single process-wide instance, loaded at startup and
/// written at shutdown or export. Missing keys deserialize to defaults so the
/// schema can grow without breaking old files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Cumulative seconds, all-time.
    pub total_seconds: f64,

    /// Cumulative seconds for the current day; zeroed on day rollover.
    pub today_seconds: f64,

    /// Completed sessions, append-only, insertion order = chronological.
    pub sessions: Vec<SessionEntry>,

    /// Snapshot of the live timer at last save, for resuming across restarts.
    pub last_session: LastSession,
}

/// One finished session, created only when a non-zero accumulated session is
/// explicitly reset. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEntry {
    #[serde(with = "day_string")]
    pub date: NaiveDate,

    /// Duration in seconds.
    pub duration: f64,

    #[serde(with = "timestamp_opt")]
    pub start_time: Option<NaiveDateTime>,

    #[serde(with = "timestamp")]
    pub end_time: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastSession {
    #[serde(with = "timestamp_opt")]
    pub start_time: Option<NaiveDateTime>,

    #[serde(with = "timestamp_opt")]
    pub paused_time: Option<NaiveDateTime>,

    pub accumulated_seconds: f64,
}

/// `YYYY-MM-DD HH:MM:SS` timestamps.
mod timestamp {
    use super::DATE_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Optional `YYYY-MM-DD HH:MM:SS` timestamps, `null` when absent.
mod timestamp_opt {
    use super::DATE_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(t) => serializer.serialize_str(&t.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => NaiveDateTime::parse_from_str(&s, DATE_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// `YYYY-MM-DD` calendar dates.
mod day_string {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_round_trip_in_fixed_format() {
        let entry = SessionEntry {
            date: NaiveDate::from_ymd_opt(2026, 8, 27).unwrap(),
            duration: 140.0,
            start_time: Some(
                NaiveDate::from_ymd_opt(2026, 8, 27)
                    .unwrap()
                    .and_hms_opt(9, 0, 0)
                    .unwrap(),
            ),
            end_time: NaiveDate::from_ymd_opt(2026, 8, 27)
                .unwrap()
                .and_hms_opt(9, 3, 20)
                .unwrap(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["date"], "2026-08-27");
        assert_eq!(json["start_time"], "2026-08-27 09:00:00");
        assert_eq!(json["end_time"], "2026-08-27 09:03:20");

        let back: SessionEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn absent_optional_timestamps_serialize_as_null() {
        let last = LastSession::default();
        let json = serde_json::to_value(&last).unwrap();
        assert!(json["start_time"].is_null());
        assert!(json["paused_time"].is_null());
    }
}
