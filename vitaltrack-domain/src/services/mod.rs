// Services that implement the engine logic
pub mod aggregation;
pub mod parser;
pub mod trends;

// Re-export the main entry points for easier imports
pub use aggregation::{chart_data, latest_metrics, LatestMetricEntry, LatestMetrics};
pub use parser::{extract_numeric_value, metric_value, parse_health_trackers, parse_metrics};
pub use trends::{metric_trend, metric_trend_at, simple_trend};
