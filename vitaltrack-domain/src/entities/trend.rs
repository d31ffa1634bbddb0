use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Direction of a period-over-period change in a metric's average.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Average increased by 1% or more
    Up,

    /// Average decreased by 1% or more
    Down,

    /// Absolute change below 1%
    Stable,
}

/// Which direction of change is clinically desirable for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendPolarity {
    /// A decrease is an improvement (e.g. fasting glucose, LDL, CRP)
    LowerIsBetter,

    /// An increase is an improvement (e.g. HDL, oxygen saturation, eGFR)
    HigherIsBetter,

    /// Any movement away from baseline is unwanted (e.g. weight, pulse)
    StableIsBest,
}

/// Time window a trend is computed over, ending at "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendPeriod {
    /// The trailing seven days
    ThisWeek,

    /// First of the current calendar month to now
    ThisMonth,

    /// The full previous calendar month
    LastMonth,

    /// The trailing three calendar months
    LastThreeMonths,
}

/// Error for an unrecognized period label.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized trend period: {0}")]
pub struct PeriodParseError(pub String);

impl FromStr for TrendPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "this-week" => Ok(TrendPeriod::ThisWeek),
            "this-month" => Ok(TrendPeriod::ThisMonth),
            "last-month" => Ok(TrendPeriod::LastMonth),
            "last-3-months" => Ok(TrendPeriod::LastThreeMonths),
            other => Err(PeriodParseError(other.to_string())),
        }
    }
}

impl TrendPeriod {
    /// Human-readable label used in [`TrendData::period`].
    pub fn label(&self) -> &'static str {
        match self {
            TrendPeriod::ThisWeek => "This week",
            TrendPeriod::ThisMonth => "This month",
            TrendPeriod::LastMonth => "Last month",
            TrendPeriod::LastThreeMonths => "Last 3 months",
        }
    }
}

/// A computed trend for one metric over one period.
///
/// Derived on demand, never persisted. `is_good` is the clinical judgment of
/// the direction per the metric's polarity; a stable trend is always good.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendData {
    /// Absolute percentage change between the two halves of the window
    pub value: f64,

    /// Up, down, or stable
    pub direction: TrendDirection,

    /// Human label of the window, e.g. "This month" or "vs. previous"
    pub period: String,

    /// Whether the movement is a clinical improvement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_good: Option<bool>,
}
