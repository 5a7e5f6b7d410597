//! Per-patient classification.

use crate::blood_pressure::{blood_pressure_category, parse_blood_pressure, BloodPressureCategory};
use crate::constants::{FEVER_THRESHOLD, HIGH_RISK_THRESHOLD};
use crate::quality::{quality_issues, QualityIssue};
use crate::record::PatientRecord;
use crate::scoring::{age_score, temperature_score, RiskScores};
use serde::{Deserialize, Serialize};

/// Verdict for a single patient record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub patient_id: String,
    pub scores: RiskScores,
    pub blood_pressure_category: BloodPressureCategory,
    pub is_high_risk: bool,
    pub has_fever: bool,
    pub has_data_quality_issues: bool,
    pub quality_issues: Vec<QualityIssue>,
}

/// Classifies one record. Pure and deterministic; any record, however malformed,
/// produces a verdict.
pub fn classify(record: &PatientRecord) -> Classification {
    let category = blood_pressure_category(parse_blood_pressure(record.blood_pressure.as_str()));
    let scores = RiskScores::new(
        category.score(),
        temperature_score(record.temperature),
        age_score(record.age),
    );
    let issues = quality_issues(record);

    Classification {
        patient_id: record.patient_id.clone(),
        scores,
        blood_pressure_category: category,
        is_high_risk: scores.total >= HIGH_RISK_THRESHOLD,
        has_fever: record
            .temperature
            .value()
            .is_some_and(|t| t >= FEVER_THRESHOLD),
        has_data_quality_issues: !issues.is_empty(),
        quality_issues: issues,
    }
}
