//! Temperature and age sub-scores, and the combined score carrier.

use crate::constants::{
    AGE_MIDDLE_BAND_END, AGE_MIDDLE_BAND_START, FEVER_THRESHOLD, HIGH_FEVER_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use vitals_types::Measurement;

/// Temperature sub-score in `0..=2`.
///
/// Missing or non-numeric readings score zero, as does anything below the fever threshold
/// (including values strictly between 99.5 and 99.6).
pub fn temperature_score(temperature: Measurement) -> u8 {
    match temperature.value() {
        Some(t) if t >= HIGH_FEVER_THRESHOLD => 2,
        Some(t) if t >= FEVER_THRESHOLD => 1,
        _ => 0,
    }
}

/// Age sub-score in `0..=2`.
pub fn age_score(age: Measurement) -> u8 {
    match age.value() {
        Some(a) if a > AGE_MIDDLE_BAND_END => 2,
        Some(a) if a >= AGE_MIDDLE_BAND_START => 1,
        _ => 0,
    }
}

/// The three sub-scores and their sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScores {
    pub blood_pressure: u8,
    pub temperature: u8,
    pub age: u8,
    pub total: u8,
}

impl RiskScores {
    pub fn new(blood_pressure: u8, temperature: u8, age: u8) -> Self {
        Self {
            blood_pressure,
            temperature,
            age,
            total: blood_pressure + temperature + age,
        }
    }
}
