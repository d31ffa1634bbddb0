// Static metric registry: display metadata, category grouping, and the
// primary/secondary display-priority policy. Read-only after first access.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::entities::metric::MetricCode;

/// Clinical grouping used when laying out a patient's metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    Vitals,
    Body,
    Diabetes,
    Lipids,
    Kidney,
    Liver,
    Hematology,
    Electrolytes,
    Other,
}

impl MetricCategory {
    /// All known categories, in display order.
    pub const ALL: [MetricCategory; 9] = [
        MetricCategory::Vitals,
        MetricCategory::Body,
        MetricCategory::Diabetes,
        MetricCategory::Lipids,
        MetricCategory::Kidney,
        MetricCategory::Liver,
        MetricCategory::Hematology,
        MetricCategory::Electrolytes,
        MetricCategory::Other,
    ];
}

/// How prominently a metric is surfaced on dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricPriority {
    Primary,
    Secondary,
    Tertiary,
}

/// Inclusive reference interval for a metric.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

/// Display metadata for one metric code. Static and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct MetricConfig {
    pub code: MetricCode,
    pub name: &'static str,
    pub category: MetricCategory,
    pub priority: MetricPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_range: Option<NormalRange>,
    pub chartable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

/// Codes surfaced first on dashboards, in display order.
const PRIMARY_DISPLAY: [MetricCode; 6] = [
    MetricCode::BloodPressure,
    MetricCode::Weight,
    MetricCode::Pulse,
    MetricCode::Temperature,
    MetricCode::BloodGlucoseFasting,
    MetricCode::OxygenSaturation,
];

/// Codes surfaced after the primary tier, in display order.
const SECONDARY_DISPLAY: [MetricCode; 8] = [
    MetricCode::Hba1c,
    MetricCode::BloodGlucoseRandom,
    MetricCode::CholesterolLdl,
    MetricCode::CholesterolHdl,
    MetricCode::Creatinine,
    MetricCode::Egfr,
    MetricCode::Hemoglobin,
    MetricCode::Bmi,
];

fn range(min: f64, max: f64, unit: &'static str) -> Option<NormalRange> {
    Some(NormalRange { min, max, unit })
}

static CATALOG: Lazy<HashMap<MetricCode, MetricConfig>> = Lazy::new(|| {
    use MetricCategory::*;
    use MetricCode::*;

    let configs = [
        // Vital signs. Blood pressure has no scalar reference interval: the
        // stored value is a systolic/diastolic pair.
        config(BloodPressure, "Blood Pressure", Vitals, Some("mmHg"), None, true, Some("#ef4444")),
        config(Pulse, "Pulse", Vitals, Some("bpm"), range(60.0, 100.0, "bpm"), true, Some("#f97316")),
        config(Temperature, "Temperature", Vitals, Some("°C"), range(36.1, 37.2, "°C"), true, Some("#eab308")),
        config(RespiratoryRate, "Respiratory Rate", Vitals, Some("breaths/min"), range(12.0, 20.0, "breaths/min"), false, None),
        config(OxygenSaturation, "Oxygen Saturation", Vitals, Some("%"), range(95.0, 100.0, "%"), false, None),
        // Body measurements
        config(Weight, "Body Weight", Body, Some("kg"), None, true, Some("#8b5cf6")),
        config(Height, "Height", Body, Some("cm"), None, false, None),
        config(Bmi, "Body Mass Index", Body, Some("kg/m²"), range(18.5, 24.9, "kg/m²"), false, None),
        config(WaistCircumference, "Waist Circumference", Body, Some("cm"), None, false, None),
        // Diabetes panel
        config(BloodGlucoseFasting, "Fasting Blood Glucose", Diabetes, Some("mg/dL"), range(70.0, 100.0, "mg/dL"), true, Some("#22c55e")),
        config(BloodGlucoseRandom, "Random Blood Glucose", Diabetes, Some("mg/dL"), range(70.0, 140.0, "mg/dL"), false, None),
        config(Hba1c, "HbA1c", Diabetes, Some("%"), range(4.0, 5.6, "%"), false, None),
        // Lipid panel
        config(CholesterolTotal, "Total Cholesterol", Lipids, Some("mg/dL"), range(125.0, 200.0, "mg/dL"), false, None),
        config(CholesterolLdl, "LDL Cholesterol", Lipids, Some("mg/dL"), range(0.0, 100.0, "mg/dL"), false, None),
        config(CholesterolHdl, "HDL Cholesterol", Lipids, Some("mg/dL"), range(40.0, 90.0, "mg/dL"), false, None),
        config(Triglycerides, "Triglycerides", Lipids, Some("mg/dL"), range(0.0, 150.0, "mg/dL"), false, None),
        // Kidney function
        config(Creatinine, "Creatinine", Kidney, Some("mg/dL"), range(0.6, 1.3, "mg/dL"), false, None),
        config(Egfr, "eGFR", Kidney, Some("mL/min/1.73m²"), range(90.0, 120.0, "mL/min/1.73m²"), false, None),
        config(Urea, "Blood Urea Nitrogen", Kidney, Some("mg/dL"), range(7.0, 20.0, "mg/dL"), false, None),
        config(UricAcid, "Uric Acid", Kidney, Some("mg/dL"), range(3.5, 7.2, "mg/dL"), false, None),
        // Liver function
        config(Alt, "ALT", Liver, Some("U/L"), range(7.0, 56.0, "U/L"), false, None),
        config(Ast, "AST", Liver, Some("U/L"), range(10.0, 40.0, "U/L"), false, None),
        config(BilirubinTotal, "Total Bilirubin", Liver, Some("mg/dL"), range(0.1, 1.2, "mg/dL"), false, None),
        config(AlkalinePhosphatase, "Alkaline Phosphatase", Liver, Some("U/L"), range(44.0, 147.0, "U/L"), false, None),
        config(Albumin, "Albumin", Liver, Some("g/dL"), range(3.4, 5.4, "g/dL"), false, None),
        // Blood count
        config(Hemoglobin, "Hemoglobin", Hematology, Some("g/dL"), range(12.0, 17.5, "g/dL"), false, None),
        config(Hematocrit, "Hematocrit", Hematology, Some("%"), range(36.0, 50.0, "%"), false, None),
        config(WbcCount, "White Blood Cell Count", Hematology, Some("10³/µL"), range(4.5, 11.0, "10³/µL"), false, None),
        config(PlateletCount, "Platelet Count", Hematology, Some("10³/µL"), range(150.0, 450.0, "10³/µL"), false, None),
        // Electrolytes
        config(Sodium, "Sodium", Electrolytes, Some("mmol/L"), range(135.0, 145.0, "mmol/L"), false, None),
        config(Potassium, "Potassium", Electrolytes, Some("mmol/L"), range(3.5, 5.2, "mmol/L"), false, None),
        config(Calcium, "Calcium", Electrolytes, Some("mg/dL"), range(8.5, 10.2, "mg/dL"), false, None),
        config(Chloride, "Chloride", Electrolytes, Some("mmol/L"), range(96.0, 106.0, "mmol/L"), false, None),
        // Other
        config(Crp, "C-Reactive Protein", Other, Some("mg/L"), range(0.0, 3.0, "mg/L"), false, None),
        config(Tsh, "TSH", Other, Some("mIU/L"), range(0.4, 4.0, "mIU/L"), false, None),
    ];

    configs.into_iter().map(|c| (c.code, c)).collect()
});

fn config(
    code: MetricCode,
    name: &'static str,
    category: MetricCategory,
    unit: Option<&'static str>,
    normal_range: Option<NormalRange>,
    chartable: bool,
    color: Option<&'static str>,
) -> MetricConfig {
    let priority = if PRIMARY_DISPLAY.contains(&code) {
        MetricPriority::Primary
    } else if SECONDARY_DISPLAY.contains(&code) {
        MetricPriority::Secondary
    } else {
        MetricPriority::Tertiary
    };
    MetricConfig { code, name, category, priority, unit, normal_range, chartable, color }
}

/// Look up the static configuration for a code. `None` for [`MetricCode::Unknown`].
pub fn metric_config(code: MetricCode) -> Option<&'static MetricConfig> {
    CATALOG.get(&code)
}

/// Select up to `max_count` codes to surface prominently.
///
/// Primary-tier codes present in `available` come first, in primary display
/// order; then secondary-tier codes in secondary order; then any remaining
/// available codes in their input order. Never returns duplicates and never
/// exceeds `max_count`.
pub fn display_metrics(available: &[MetricCode], max_count: usize) -> Vec<MetricCode> {
    let mut selected: Vec<MetricCode> = Vec::with_capacity(max_count);

    let tiers = [&PRIMARY_DISPLAY[..], &SECONDARY_DISPLAY[..]];
    for tier in tiers {
        for code in tier {
            if selected.len() == max_count {
                return selected;
            }
            if available.contains(code) && !selected.contains(code) {
                selected.push(*code);
            }
        }
    }

    for code in available {
        if selected.len() == max_count {
            break;
        }
        if !selected.contains(code) && CATALOG.contains_key(code) {
            selected.push(*code);
        }
    }

    selected
}

/// Group codes by clinical category.
///
/// Every known category appears as a key, with an empty vector when nothing
/// falls in it. Codes without a catalog entry are silently dropped.
pub fn group_by_category(codes: &[MetricCode]) -> BTreeMap<MetricCategory, Vec<MetricCode>> {
    let mut groups: BTreeMap<MetricCategory, Vec<MetricCode>> =
        MetricCategory::ALL.iter().map(|c| (*c, Vec::new())).collect();

    for code in codes {
        if let Some(cfg) = CATALOG.get(code) {
            // Key is guaranteed present: groups was seeded from ALL.
            if let Some(bucket) = groups.get_mut(&cfg.category) {
                bucket.push(*code);
            }
        }
    }

    groups
}

/// Inclusive-bounds check against the metric's reference interval.
///
/// `None` when the metric has no defined interval (or no catalog entry).
pub fn is_within_normal_range(code: MetricCode, value: f64) -> Option<bool> {
    let range = CATALOG.get(&code)?.normal_range?;
    Some(value >= range.min && value <= range.max)
}

/// Human label for a category. Total over the closed enum.
pub fn category_display_name(category: MetricCategory) -> &'static str {
    match category {
        MetricCategory::Vitals => "Vital Signs",
        MetricCategory::Body => "Body Measurements",
        MetricCategory::Diabetes => "Diabetes",
        MetricCategory::Lipids => "Lipid Panel",
        MetricCategory::Kidney => "Kidney Function",
        MetricCategory::Liver => "Liver Function",
        MetricCategory::Hematology => "Blood Count",
        MetricCategory::Electrolytes => "Electrolytes",
        MetricCategory::Other => "Other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_code_has_a_config() {
        // Unknown is the only code without catalog metadata.
        assert_eq!(CATALOG.len(), 35);
        assert!(metric_config(MetricCode::Unknown).is_none());
        assert!(metric_config(MetricCode::Hba1c).is_some());
    }

    #[test]
    fn test_config_fields() {
        let cfg = metric_config(MetricCode::Weight).unwrap();
        assert_eq!(cfg.name, "Body Weight");
        assert_eq!(cfg.category, MetricCategory::Body);
        assert_eq!(cfg.priority, MetricPriority::Primary);
        assert!(cfg.chartable);

        let cfg = metric_config(MetricCode::Tsh).unwrap();
        assert_eq!(cfg.priority, MetricPriority::Tertiary);
        assert!(!cfg.chartable);
    }

    #[test]
    fn test_display_metrics_priority_order() {
        let available = [MetricCode::Weight, MetricCode::Pulse, MetricCode::Hba1c];
        let selected = display_metrics(&available, 4);
        assert_eq!(
            selected,
            vec![MetricCode::Weight, MetricCode::Pulse, MetricCode::Hba1c]
        );
    }

    #[test]
    fn test_display_metrics_caps_at_max_count() {
        let available = [
            MetricCode::BloodPressure,
            MetricCode::Weight,
            MetricCode::Pulse,
            MetricCode::Temperature,
        ];
        let selected = display_metrics(&available, 2);
        assert_eq!(selected, vec![MetricCode::BloodPressure, MetricCode::Weight]);
    }

    #[test]
    fn test_display_metrics_falls_back_to_input_order() {
        // Neither code is primary or secondary tier; input order is kept.
        let available = [MetricCode::Tsh, MetricCode::Sodium];
        let selected = display_metrics(&available, 5);
        assert_eq!(selected, vec![MetricCode::Tsh, MetricCode::Sodium]);
    }

    #[test]
    fn test_display_metrics_drops_duplicates_and_unknown() {
        let available = [
            MetricCode::Weight,
            MetricCode::Weight,
            MetricCode::Unknown,
        ];
        let selected = display_metrics(&available, 5);
        assert_eq!(selected, vec![MetricCode::Weight]);
    }

    #[test]
    fn test_group_by_category_seeds_every_key() {
        let groups = group_by_category(&[MetricCode::Weight, MetricCode::Sodium]);
        assert_eq!(groups.len(), MetricCategory::ALL.len());
        assert_eq!(groups[&MetricCategory::Body], vec![MetricCode::Weight]);
        assert_eq!(groups[&MetricCategory::Electrolytes], vec![MetricCode::Sodium]);
        assert!(groups[&MetricCategory::Liver].is_empty());
    }

    #[test]
    fn test_group_by_category_drops_unknown() {
        let groups = group_by_category(&[MetricCode::Unknown]);
        assert!(groups.values().all(|v| v.is_empty()));
    }

    #[test]
    fn test_normal_range_is_inclusive() {
        assert_eq!(is_within_normal_range(MetricCode::Pulse, 60.0), Some(true));
        assert_eq!(is_within_normal_range(MetricCode::Pulse, 100.0), Some(true));
        assert_eq!(is_within_normal_range(MetricCode::Pulse, 101.0), Some(false));
        // No scalar interval defined for a paired metric.
        assert_eq!(is_within_normal_range(MetricCode::BloodPressure, 120.0), None);
        assert_eq!(is_within_normal_range(MetricCode::Unknown, 1.0), None);
    }

    #[test]
    fn test_category_display_names_are_total() {
        for category in MetricCategory::ALL {
            assert!(!category_display_name(category).is_empty());
        }
    }
}
