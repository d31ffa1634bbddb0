use serde::{Deserialize, Serialize};

/// Closed set of clinical metric identifiers known to the engine.
///
/// The wire representation is the snake_case code stored by the recording UI
/// (e.g. `blood_pressure`, `hba1c`). Codes not in this set deserialize to
/// [`MetricCode::Unknown`] so that one unrecognized reading cannot fail the
/// decode of a whole stored metrics array; the catalog has no entry for
/// `Unknown` and aggregation ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCode {
    // Vital signs
    BloodPressure,
    Pulse,
    Temperature,
    RespiratoryRate,
    OxygenSaturation,

    // Body measurements
    Weight,
    Height,
    Bmi,
    WaistCircumference,

    // Diabetes panel
    BloodGlucoseFasting,
    BloodGlucoseRandom,
    Hba1c,

    // Lipid panel
    CholesterolTotal,
    CholesterolLdl,
    CholesterolHdl,
    Triglycerides,

    // Kidney function
    Creatinine,
    Egfr,
    Urea,
    UricAcid,

    // Liver function
    Alt,
    Ast,
    BilirubinTotal,
    AlkalinePhosphatase,
    Albumin,

    // Blood count
    Hemoglobin,
    Hematocrit,
    WbcCount,
    PlateletCount,

    // Electrolytes
    Sodium,
    Potassium,
    Calcium,
    Chloride,

    // Other
    Crp,
    Tsh,

    /// Catch-all for codes recorded by a newer client than this build knows.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for MetricCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Reuse the serde name so logs match the stored representation.
        let name = serde_json::to_string(self).unwrap_or_default();
        write!(f, "{}", name.trim_matches('"'))
    }
}

/// One raw metric reading as stored inside a tracker's `metrics` JSON.
///
/// `value` is the freeform display string produced by the recording UI and
/// may carry a unit suffix ("76kg") or a slash-separated pair ("120/80mmHg").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metric {
    /// Which metric this reading is for
    pub code: MetricCode,

    /// Display string as entered, possibly unit-suffixed
    pub value: String,

    /// Optional display name captured at recording time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Numeric content extracted from a reading's display string.
///
/// A slash in the cleaned string marks a blood-pressure style pair; the
/// tagged variants keep callers from treating a pair as a scalar by
/// accident.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    /// A single reading, e.g. "76kg" -> 76.0
    Single(f64),

    /// A systolic/diastolic pair, e.g. "120/80mmHg" -> 120.0 / 80.0
    Pair { systolic: f64, diastolic: f64 },
}

impl NumericValue {
    /// The value used when a scalar is needed: the reading itself, or the
    /// systolic side of a pair.
    pub fn primary(&self) -> f64 {
        match *self {
            NumericValue::Single(v) => v,
            NumericValue::Pair { systolic, .. } => systolic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_snake_case_round_trip() {
        let json = serde_json::to_string(&MetricCode::BloodPressure).unwrap();
        assert_eq!(json, "\"blood_pressure\"");

        let code: MetricCode = serde_json::from_str("\"hba1c\"").unwrap();
        assert_eq!(code, MetricCode::Hba1c);

        let code: MetricCode = serde_json::from_str("\"cholesterol_hdl\"").unwrap();
        assert_eq!(code, MetricCode::CholesterolHdl);
    }

    #[test]
    fn test_unrecognized_code_decodes_to_unknown() {
        let code: MetricCode = serde_json::from_str("\"quantum_flux\"").unwrap();
        assert_eq!(code, MetricCode::Unknown);
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(MetricCode::BloodGlucoseFasting.to_string(), "blood_glucose_fasting");
        assert_eq!(MetricCode::WbcCount.to_string(), "wbc_count");
    }

    #[test]
    fn test_primary_of_pair_is_systolic() {
        let pair = NumericValue::Pair { systolic: 120.0, diastolic: 80.0 };
        assert_eq!(pair.primary(), 120.0);
        assert_eq!(NumericValue::Single(76.0).primary(), 76.0);
    }
}
