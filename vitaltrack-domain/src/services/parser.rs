use tracing::warn;

use crate::entities::metric::{Metric, MetricCode, NumericValue};
use crate::entities::tracker::{ParsedTracker, Tracker};

/// Decode a stored `metrics` JSON string into readings.
///
/// Fail-soft: any decode failure, including JSON that is not an array,
/// yields an empty vector. A warning is logged; nothing is raised to the
/// caller.
pub fn parse_metrics(raw: &str) -> Vec<Metric> {
    match serde_json::from_str::<Vec<Metric>>(raw) {
        Ok(metrics) => metrics,
        Err(err) => {
            warn!(error = %err, "failed to decode stored metrics, treating as empty");
            Vec::new()
        }
    }
}

/// Decode the `metrics` field of every tracker, preserving order and all
/// other fields.
pub fn parse_health_trackers(trackers: Vec<Tracker>) -> Vec<ParsedTracker> {
    trackers
        .into_iter()
        .map(|t| ParsedTracker {
            id: t.id,
            metrics: parse_metrics(&t.metrics),
            user_id: t.user_id,
            caregiver_id: t.caregiver_id,
            status: t.status,
            reason: t.reason,
            created_at: t.created_at,
            updated_at: t.updated_at,
        })
        .collect()
}

/// Extract the numeric content of a freeform reading string.
///
/// Every character except digits, `.` and `/` is stripped. A surviving `/`
/// marks a systolic/diastolic pair; each side defaults to 0.0 when its part
/// is empty or unparseable. Otherwise the cleaned string parses as a single
/// value, defaulting to 0.0. Never fails; 0.0 means "no data", not a
/// clinical zero reading.
pub fn extract_numeric_value(raw: &str) -> NumericValue {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '/')
        .collect();

    if cleaned.contains('/') {
        let mut parts = cleaned.split('/');
        let systolic = parts.next().and_then(|p| p.parse::<f64>().ok()).unwrap_or(0.0);
        let diastolic = parts.next().and_then(|p| p.parse::<f64>().ok()).unwrap_or(0.0);
        NumericValue::Pair { systolic, diastolic }
    } else {
        NumericValue::Single(cleaned.parse::<f64>().unwrap_or(0.0))
    }
}

/// Raw value string of the first reading matching `code`, if any.
pub fn metric_value(tracker: &ParsedTracker, code: MetricCode) -> Option<&str> {
    tracker
        .metrics
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{parsed_tracker, tracker};

    #[test]
    fn test_parse_metrics_decodes_valid_array() {
        let metrics =
            parse_metrics(r#"[{"code":"weight","value":"76kg"},{"code":"pulse","value":"72 bpm"}]"#);
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].code, MetricCode::Weight);
        assert_eq!(metrics[0].value, "76kg");
        assert_eq!(metrics[1].code, MetricCode::Pulse);
    }

    #[test]
    fn test_parse_metrics_never_fails() {
        assert!(parse_metrics("").is_empty());
        assert!(parse_metrics("not json").is_empty());
        assert!(parse_metrics("{\"code\":\"weight\"}").is_empty());
        assert!(parse_metrics("42").is_empty());
        assert!(parse_metrics("[{\"value\":\"76kg\"}]").is_empty());
    }

    #[test]
    fn test_parse_metrics_keeps_unknown_codes() {
        let metrics = parse_metrics(r#"[{"code":"brand_new_code","value":"5"}]"#);
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].code, MetricCode::Unknown);
    }

    #[test]
    fn test_parse_health_trackers_preserves_order_and_fields() {
        let a = tracker("2025-01-01T08:00:00Z", &[(MetricCode::Weight, "70kg")]);
        let b = tracker("2025-01-15T08:00:00Z", &[(MetricCode::Pulse, "72bpm")]);
        let a_id = a.id;
        let status = a.status.clone();

        let parsed = parse_health_trackers(vec![a, b]);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].id, a_id);
        assert_eq!(parsed[0].status, status);
        assert_eq!(parsed[0].metrics[0].code, MetricCode::Weight);
        assert_eq!(parsed[1].metrics[0].code, MetricCode::Pulse);
    }

    #[test]
    fn test_parse_health_trackers_malformed_metrics_yield_empty() {
        let mut t = tracker("2025-01-01T08:00:00Z", &[]);
        t.metrics = "oops".to_string();
        let parsed = parse_health_trackers(vec![t]);
        assert!(parsed[0].metrics.is_empty());
    }

    #[test]
    fn test_extract_pair() {
        assert_eq!(
            extract_numeric_value("120/80mmHg"),
            NumericValue::Pair { systolic: 120.0, diastolic: 80.0 }
        );
        assert_eq!(
            extract_numeric_value("120/80 mmHg"),
            NumericValue::Pair { systolic: 120.0, diastolic: 80.0 }
        );
    }

    #[test]
    fn test_extract_single() {
        assert_eq!(extract_numeric_value("76kg"), NumericValue::Single(76.0));
        assert_eq!(extract_numeric_value("36.6 °C"), NumericValue::Single(36.6));
    }

    #[test]
    fn test_extract_defaults_to_zero() {
        assert_eq!(extract_numeric_value(""), NumericValue::Single(0.0));
        assert_eq!(extract_numeric_value("abc"), NumericValue::Single(0.0));
    }

    #[test]
    fn test_extract_pair_with_missing_side() {
        assert_eq!(
            extract_numeric_value("120/"),
            NumericValue::Pair { systolic: 120.0, diastolic: 0.0 }
        );
        assert_eq!(
            extract_numeric_value("/80"),
            NumericValue::Pair { systolic: 0.0, diastolic: 80.0 }
        );
    }

    #[test]
    fn test_metric_value_first_match() {
        let t = parsed_tracker(
            "2025-01-01T08:00:00Z",
            &[(MetricCode::Weight, "70kg"), (MetricCode::Weight, "71kg")],
        );
        assert_eq!(metric_value(&t, MetricCode::Weight), Some("70kg"));
        assert_eq!(metric_value(&t, MetricCode::Pulse), None);
    }
}
