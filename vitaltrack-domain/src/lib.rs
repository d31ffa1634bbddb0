// VitalTrack Domain
// This crate contains the health-metric engine for the VitalTrack application:
// the static metric catalog, the tracker parser, and the aggregation/trend
// services. It is a pure data-transformation layer: trackers are fetched and
// persisted elsewhere, this crate only reads and derives.

// Static metric metadata registry
pub mod catalog;

// Domain entities
pub mod entities;

// Services that implement the engine logic
pub mod services;

// Test fixtures and builders
pub mod testing;

// Re-export common types for easier imports
pub use entities::metric::{Metric, MetricCode, NumericValue};
pub use entities::tracker::{ParsedTracker, Tracker};
pub use entities::trend::{TrendData, TrendDirection, TrendPeriod};
