//! Data-quality checks.
//!
//! A record has a data-quality issue when any scored field is missing or unparsable. The
//! magnitude of a valid reading is never considered.

use crate::blood_pressure::parse_blood_pressure;
use crate::record::PatientRecord;
use serde::{Deserialize, Serialize};

/// A scored field that could not be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityIssue {
    BloodPressure,
    Temperature,
    Age,
}

/// Lists deficient fields in the order blood pressure, temperature, age.
pub fn quality_issues(record: &PatientRecord) -> Vec<QualityIssue> {
    let mut issues = Vec::new();
    if !parse_blood_pressure(record.blood_pressure.as_str()).is_parsed() {
        issues.push(QualityIssue::BloodPressure);
    }
    if !record.temperature.is_valid() {
        issues.push(QualityIssue::Temperature);
    }
    if !record.age.is_valid() {
        issues.push(QualityIssue::Age);
    }
    issues
}

pub fn has_data_quality_issues(record: &PatientRecord) -> bool {
    !quality_issues(record).is_empty()
}
