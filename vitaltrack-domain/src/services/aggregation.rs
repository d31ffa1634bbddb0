use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::entities::chart::{BloodPressurePoint, ChartDataPoint};
use crate::entities::metric::{MetricCode, NumericValue};
use crate::entities::tracker::ParsedTracker;
use crate::services::parser::{extract_numeric_value, metric_value};

/// The most recent reading of one metric across a tracker set.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LatestMetricEntry {
    /// Raw value string of the winning reading
    pub value: String,

    /// `updated_at` of the tracker the reading came from
    pub updated_at: DateTime<Utc>,

    /// Id of the tracker the reading came from
    pub tracker_id: Uuid,
}

/// Latest reading per metric code. Empty input yields an empty map.
pub type LatestMetrics = HashMap<MetricCode, LatestMetricEntry>;

/// Compute the most recent reading of every metric across `trackers`.
///
/// Recency is judged by `created_at`, not array position: trackers are
/// scanned newest-first (ties keep input order) and the first sighting of
/// each code wins. [`MetricCode::Unknown`] readings are ignored.
pub fn latest_metrics(trackers: &[ParsedTracker]) -> LatestMetrics {
    let mut newest_first: Vec<&ParsedTracker> = trackers.iter().collect();
    newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut latest = LatestMetrics::new();
    for tracker in newest_first {
        for metric in &tracker.metrics {
            if metric.code == MetricCode::Unknown {
                continue;
            }
            latest.entry(metric.code).or_insert_with(|| LatestMetricEntry {
                value: metric.value.clone(),
                updated_at: tracker.updated_at,
                tracker_id: tracker.id,
            });
        }
    }
    latest
}

/// The metric codes a chart series tracks, one accumulator each (blood
/// pressure counts as two).
const CHART_CODES: [MetricCode; 5] = [
    MetricCode::Weight,
    MetricCode::BloodPressure,
    MetricCode::Pulse,
    MetricCode::Temperature,
    MetricCode::BloodGlucoseFasting,
];

/// Build the carry-forward chart series: one point per tracker, ascending
/// by `created_at`.
///
/// A metric missing from a tracker keeps its last known value; a metric
/// never seen stays `None`. An extraction of 0.0 counts as "no data" and
/// does not overwrite a carried value; the two blood-pressure sides update
/// independently.
pub fn chart_data(trackers: &[ParsedTracker]) -> Vec<ChartDataPoint> {
    let mut oldest_first: Vec<&ParsedTracker> = trackers.iter().collect();
    oldest_first.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    let mut body_weight: Option<f64> = None;
    let mut systolic: Option<f64> = None;
    let mut diastolic: Option<f64> = None;
    let mut pulse: Option<f64> = None;
    let mut temperature: Option<f64> = None;
    let mut blood_glucose: Option<f64> = None;

    let mut points = Vec::with_capacity(oldest_first.len());
    for tracker in oldest_first {
        for code in CHART_CODES {
            let Some(raw) = metric_value(tracker, code) else {
                continue;
            };
            match (code, extract_numeric_value(raw)) {
                (MetricCode::BloodPressure, NumericValue::Pair { systolic: s, diastolic: d }) => {
                    update(&mut systolic, s);
                    update(&mut diastolic, d);
                }
                // A lone number recorded as blood pressure is the systolic side.
                (MetricCode::BloodPressure, NumericValue::Single(s)) => update(&mut systolic, s),
                (MetricCode::Weight, v) => update(&mut body_weight, v.primary()),
                (MetricCode::Pulse, v) => update(&mut pulse, v.primary()),
                (MetricCode::Temperature, v) => update(&mut temperature, v.primary()),
                (MetricCode::BloodGlucoseFasting, v) => update(&mut blood_glucose, v.primary()),
                _ => {}
            }
        }

        points.push(ChartDataPoint {
            name: tracker.created_at.format("%Y-%m-%d").to_string(),
            body_weight,
            blood_pressure: BloodPressurePoint { systolic, diastolic },
            pulse,
            temperature,
            blood_glucose,
        });
    }
    points
}

/// Overwrite a carry-forward accumulator, treating 0.0 as "no data".
fn update(slot: &mut Option<f64>, value: f64) {
    if value != 0.0 {
        *slot = Some(value);
    }
}
