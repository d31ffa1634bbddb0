// Domain entities and value objects
pub mod chart;
pub mod metric;
pub mod tracker;
pub mod trend;

// Re-export common types for easier imports
pub use chart::{BloodPressurePoint, ChartDataPoint};
pub use metric::{Metric, MetricCode, NumericValue};
pub use tracker::{ParsedTracker, Tracker};
pub use trend::{PeriodParseError, TrendData, TrendDirection, TrendPeriod, TrendPolarity};
