//! Patient record as supplied by an upstream patient feed.
//!
//! Every field is tolerant: a record always deserialises, whatever the upstream sent.
//! Scoring only reads `age`, `blood_pressure` and `temperature`; the remaining fields are
//! carried through untouched.

use serde::{Deserialize, Serialize};
use vitals_types::{deserialize_identifier, Measurement, RawText};

/// One patient visit record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(default, deserialize_with = "deserialize_identifier")]
    pub patient_id: String,
    #[serde(default)]
    pub name: RawText,
    #[serde(default)]
    pub age: Measurement,
    #[serde(default)]
    pub gender: RawText,
    /// Expected as `"<systolic>/<diastolic>"`.
    #[serde(default)]
    pub blood_pressure: RawText,
    #[serde(default)]
    pub temperature: Measurement,
    #[serde(default)]
    pub visit_date: RawText,
    #[serde(default)]
    pub diagnosis: RawText,
    #[serde(default)]
    pub medications: RawText,
}

impl PatientRecord {
    /// Creates a record with only an identifier; every reading starts out missing.
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            ..Self::default()
        }
    }

    pub fn with_blood_pressure(mut self, blood_pressure: impl Into<RawText>) -> Self {
        self.blood_pressure = blood_pressure.into();
        self
    }

    pub fn with_temperature(mut self, temperature: impl Into<Measurement>) -> Self {
        self.temperature = temperature.into();
        self
    }

    pub fn with_age(mut self, age: impl Into<Measurement>) -> Self {
        self.age = age.into();
        self
    }
}
