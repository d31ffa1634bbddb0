// Fixture builders for tests. Kept in the library so integration tests and
// downstream crates can assemble trackers without hand-writing JSON.

use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::entities::metric::{Metric, MetricCode};
use crate::entities::tracker::{ParsedTracker, Tracker};

/// Build a raw tracker whose `metrics` field is the JSON encoding of the
/// given `(code, value)` readings. `created_at` is an RFC 3339 timestamp.
///
/// Panics on an invalid timestamp; fixtures use literals.
pub fn tracker(created_at: &str, metrics: &[(MetricCode, &str)]) -> Tracker {
    let at: DateTime<Utc> = created_at.parse().expect("fixture timestamp must be RFC 3339");
    let encoded: Vec<serde_json::Value> = metrics
        .iter()
        .map(|(code, value)| json!({ "code": code, "value": value }))
        .collect();

    Tracker {
        id: Uuid::new_v4(),
        metrics: serde_json::Value::Array(encoded).to_string(),
        user_id: Uuid::new_v4(),
        caregiver_id: None,
        status: "completed".to_string(),
        reason: None,
        created_at: at,
        updated_at: at,
    }
}

/// Build an already-decoded tracker with the given readings.
pub fn parsed_tracker(created_at: &str, metrics: &[(MetricCode, &str)]) -> ParsedTracker {
    let at: DateTime<Utc> = created_at.parse().expect("fixture timestamp must be RFC 3339");

    ParsedTracker {
        id: Uuid::new_v4(),
        metrics: metrics
            .iter()
            .map(|(code, value)| Metric {
                code: *code,
                value: (*value).to_string(),
                name: None,
            })
            .collect(),
        user_id: Uuid::new_v4(),
        caregiver_id: None,
        status: "completed".to_string(),
        reason: None,
        created_at: at,
        updated_at: at,
    }
}
