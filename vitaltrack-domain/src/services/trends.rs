use chrono::{DateTime, Datelike, Duration, Months, TimeZone, Utc};

use crate::entities::metric::MetricCode;
use crate::entities::tracker::ParsedTracker;
use crate::entities::trend::{TrendData, TrendDirection, TrendPeriod, TrendPolarity};
use crate::services::parser::{extract_numeric_value, metric_value};

/// Absolute change below this is reported as stable.
const STABLE_THRESHOLD_PCT: f64 = 1.0;

/// Clinical polarity of a metric: which direction of change is desirable.
///
/// Codes in neither better-list default to higher-is-better.
pub fn trend_polarity(code: MetricCode) -> TrendPolarity {
    use MetricCode::*;
    match code {
        BloodGlucoseFasting | BloodGlucoseRandom | Hba1c | CholesterolTotal | CholesterolLdl
        | Triglycerides | Creatinine | Urea | UricAcid | Alt | Ast | BilirubinTotal
        | AlkalinePhosphatase | Crp => TrendPolarity::LowerIsBetter,
        CholesterolHdl | OxygenSaturation | Egfr | Albumin | Hemoglobin | Hematocrit => {
            TrendPolarity::HigherIsBetter
        }
        BloodPressure | Pulse | Temperature | RespiratoryRate | Weight | Height | Bmi
        | WaistCircumference | Sodium | Potassium | Calcium | Chloride | WbcCount
        | PlateletCount | Tsh => TrendPolarity::StableIsBest,
        _ => TrendPolarity::HigherIsBetter,
    }
}

/// Period-over-period trend of a metric's average, judged at the current
/// wall clock. See [`metric_trend_at`] for the algorithm.
pub fn metric_trend(
    trackers: &[ParsedTracker],
    code: MetricCode,
    period: TrendPeriod,
) -> Option<TrendData> {
    metric_trend_at(trackers, code, period, Utc::now())
}

/// Period-over-period trend of a metric's average, judged at an explicit
/// `now` (the window always ends at or before `now`).
///
/// The trackers inside the window are sorted ascending and split at the
/// midpoint, the extra sample of an odd window going to the recent half;
/// the percentage change between the two half-means drives the direction.
/// Returns `None` when fewer than two trackers fall in the window or when
/// either half has no reading of `code` — insufficient data, not an error.
pub fn metric_trend_at(
    trackers: &[ParsedTracker],
    code: MetricCode,
    period: TrendPeriod,
    now: DateTime<Utc>,
) -> Option<TrendData> {
    let window = resolve_window(period, now)?;

    let mut windowed: Vec<&ParsedTracker> = trackers
        .iter()
        .filter(|t| window.contains(t.created_at))
        .collect();
    if windowed.len() < 2 {
        return None;
    }
    windowed.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    let mid = windowed.len() / 2;
    let first_mean = mean_of(&windowed[..mid], code)?;
    let second_mean = mean_of(&windowed[mid..], code)?;

    Some(build_trend(first_mean, second_mean, code, period.label().to_string()))
}

/// Trend of the single latest reading against the next-most-recent one.
///
/// Not windowed and not averaged; `None` when fewer than two readings of
/// `code` exist anywhere in the input.
pub fn simple_trend(trackers: &[ParsedTracker], code: MetricCode) -> Option<TrendData> {
    let mut newest_first: Vec<&ParsedTracker> = trackers.iter().collect();
    newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut readings = newest_first
        .iter()
        .filter_map(|t| metric_value(t, code))
        .map(|raw| extract_numeric_value(raw).primary());
    let latest = readings.next()?;
    let previous = readings.next()?;

    Some(build_trend(previous, latest, code, "vs. previous".to_string()))
}

/// Time window a trend is filtered against.
///
/// Windows ending at "now" include their endpoint; a window ending on a
/// calendar boundary excludes it, since the boundary instant belongs to the
/// next month.
struct Window {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    end_exclusive: bool,
}

impl Window {
    fn contains(&self, at: DateTime<Utc>) -> bool {
        if at < self.start {
            return false;
        }
        if self.end_exclusive {
            at < self.end
        } else {
            at <= self.end
        }
    }
}

fn resolve_window(period: TrendPeriod, now: DateTime<Utc>) -> Option<Window> {
    let first_of_month = Utc
        .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()?;

    match period {
        TrendPeriod::ThisWeek => Some(Window {
            start: now - Duration::days(7),
            end: now,
            end_exclusive: false,
        }),
        TrendPeriod::ThisMonth => Some(Window {
            start: first_of_month,
            end: now,
            end_exclusive: false,
        }),
        TrendPeriod::LastMonth => Some(Window {
            start: first_of_month.checked_sub_months(Months::new(1))?,
            end: first_of_month,
            end_exclusive: true,
        }),
        TrendPeriod::LastThreeMonths => Some(Window {
            start: now.checked_sub_months(Months::new(3))?,
            end: now,
            end_exclusive: false,
        }),
    }
}

/// Mean of the metric's value across the trackers that report it.
///
/// Pairs contribute their systolic side. A reading that extracts to 0.0
/// still counts: it reported the code. `None` when nothing qualifies.
fn mean_of(trackers: &[&ParsedTracker], code: MetricCode) -> Option<f64> {
    let values: Vec<f64> = trackers
        .iter()
        .filter_map(|t| metric_value(t, code))
        .map(|raw| extract_numeric_value(raw).primary())
        .collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn percentage_change(first: f64, second: f64) -> f64 {
    if first == 0.0 {
        // No meaningful baseline: any positive movement reads as +100%.
        if second > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        (second - first) / first * 100.0
    }
}

fn build_trend(first: f64, second: f64, code: MetricCode, period: String) -> TrendData {
    let change = percentage_change(first, second);
    let direction = if change.abs() < STABLE_THRESHOLD_PCT {
        TrendDirection::Stable
    } else if change > 0.0 {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    };

    let is_good = match (direction, trend_polarity(code)) {
        (TrendDirection::Stable, _) => true,
        (TrendDirection::Up, polarity) => polarity == TrendPolarity::HigherIsBetter,
        (TrendDirection::Down, polarity) => polarity == TrendPolarity::LowerIsBetter,
    };

    TrendData {
        value: change.abs(),
        direction,
        period,
        is_good: Some(is_good),
    }
}
