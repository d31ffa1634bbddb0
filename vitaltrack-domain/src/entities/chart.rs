use serde::Serialize;

/// Blood pressure sample within a chart point.
///
/// The two sides carry forward independently: a reading that supplies only
/// systolic keeps the previously seen diastolic.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct BloodPressurePoint {
    /// Systolic side in mmHg, `None` until first recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systolic: Option<f64>,

    /// Diastolic side in mmHg, `None` until first recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diastolic: Option<f64>,
}

/// One synthetic series sample per tracker, for chart consumers.
///
/// Fields are `None` until the metric has been recorded at least once; after
/// that the last known value is carried forward, never reset. `None` means
/// "never recorded", which downstream must not render as a zero reading.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
    /// Date label for the x axis (the tracker's `created_at` date)
    pub name: String,

    /// Body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_weight: Option<f64>,

    /// Blood pressure pair
    pub blood_pressure: BloodPressurePoint,

    /// Pulse rate in beats per minute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulse: Option<f64>,

    /// Body temperature in degrees Celsius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Fasting blood glucose in mg/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_glucose: Option<f64>,
}
