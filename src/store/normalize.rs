// License: MIT

//! Defensive normalization of the raw store document before typed decoding.
//!
//! Old or hand-edited files may be missing keys, or carry a `sessions` value
//! that is not a list. This pass patches the document shape so the typed
//! decode only has to reject genuinely malformed values (bad timestamps,
//! wrong scalar types), which the loader then turns into a default-record
//! fallback.

use serde_json::{json, Map, Value};

pub fn normalize(raw: Value) -> Value {
    let mut map = match raw {
        Value::Object(map) => map,
        // Not an object at all: start over from defaults.
        _ => return default_document(),
    };

    backfill(&mut map, "total_seconds", json!(0.0));
    backfill(&mut map, "today_seconds", json!(0.0));
    backfill(&mut map, "sessions", json!([]));
    backfill(&mut map, "last_session", default_last_session());

    // A corrupt sessions value becomes an empty history rather than an error.
    if !map["sessions"].is_array() {
        map.insert("sessions".to_string(), json!([]));
    }

    match map.get_mut("last_session") {
        Some(Value::Object(last)) => {
            backfill(last, "start_time", Value::Null);
            backfill(last, "paused_time", Value::Null);
            backfill(last, "accumulated_seconds", json!(0.0));
        }
        Some(other) => {
            *other = default_last_session();
        }
        None => {}
    }

    Value::Object(map)
}

fn backfill(map: &mut Map<String, Value>, key: &str, default: Value) {
    if !map.contains_key(key) {
        map.insert(key.to_string(), default);
    }
}

fn default_last_session() -> Value {
    json!({
        "start_time": null,
        "paused_time": null,
        "accumulated_seconds": 0.0,
    })
}

fn default_document() -> Value {
    json!({
        "total_seconds": 0.0,
        "today_seconds": 0.0,
        "sessions": [],
        "last_session": default_last_session(),
    })
}
