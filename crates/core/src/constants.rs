//! Constants used throughout the vitals core crate.
//!
//! Scoring thresholds live here so the classifier, the scorers and the tests agree on a
//! single set of numbers.

/// Total score at or above which a patient is classified as high risk.
pub const HIGH_RISK_THRESHOLD: u8 = 4;

/// Temperature at or above which a valid reading counts as fever.
pub const FEVER_THRESHOLD: f64 = 99.6;

/// Temperature at or above which the temperature sub-score reaches its maximum.
pub const HIGH_FEVER_THRESHOLD: f64 = 101.0;

/// Lower bound (inclusive) of the middle age band.
pub const AGE_MIDDLE_BAND_START: f64 = 40.0;

/// Upper bound (inclusive) of the middle age band.
pub const AGE_MIDDLE_BAND_END: f64 = 65.0;

/// Batch size at which `BatchAnalyzer` switches to the rayon path by default.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Default listen address for the REST API.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";
