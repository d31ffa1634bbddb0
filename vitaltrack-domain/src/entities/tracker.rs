use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::metric::Metric;

/// One recording session as delivered by the upstream data-fetch layer.
///
/// `metrics` is a JSON-encoded array of readings; it stays opaque here and
/// is decoded exactly once by the parser service. Trackers are immutable in
/// this layer: all writes happen upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracker {
    /// Unique identifier for the tracker
    pub id: Uuid,

    /// JSON-encoded array of metric readings
    pub metrics: String,

    /// Patient the readings belong to
    pub user_id: Uuid,

    /// Caregiver who recorded the session, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caregiver_id: Option<Uuid>,

    /// Upstream workflow status; vocabulary owned by the backend
    pub status: String,

    /// Free-text reason for the recording session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// When the session was recorded; ordering key for all aggregation
    pub created_at: DateTime<Utc>,

    /// When the tracker row was last touched upstream
    pub updated_at: DateTime<Utc>,
}

/// A tracker with its `metrics` field decoded into structured readings.
///
/// Built by the parser service; malformed stored JSON yields an empty
/// `metrics` vector rather than an error.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedTracker {
    /// Unique identifier for the tracker
    pub id: Uuid,

    /// Decoded metric readings, empty if the stored JSON was malformed
    pub metrics: Vec<Metric>,

    /// Patient the readings belong to
    pub user_id: Uuid,

    /// Caregiver who recorded the session, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caregiver_id: Option<Uuid>,

    /// Upstream workflow status; vocabulary owned by the backend
    pub status: String,

    /// Free-text reason for the recording session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// When the session was recorded; ordering key for all aggregation
    pub created_at: DateTime<Utc>,

    /// When the tracker row was last touched upstream
    pub updated_at: DateTime<Utc>,
}
