//! # Vitals Core
//!
//! Core business logic for vital-sign risk triage.
//!
//! This crate contains pure classification logic and the seams to its collaborators:
//! - Blood-pressure parsing and the three sub-score functions
//! - Data-quality checks and the per-patient classifier
//! - Batch analysis into high-risk, fever and data-quality identifier lists
//! - `PatientSource` / `AssessmentSink` traits injected into `AssessmentService`
//!
//! **No API concerns**: HTTP servers, request bodies and CLI parsing belong in `api-rest`,
//! `api-shared` or `vitals-cli`.

pub mod batch;
pub mod blood_pressure;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod quality;
pub mod record;
pub mod scoring;
pub mod service;
pub mod source;
pub mod submission;

pub use batch::{analyze, analyze_parallel, AssessmentPayload, BatchAnalysis, BatchAnalyzer, BatchSummary};
pub use blood_pressure::{
    blood_pressure_category, blood_pressure_score, parse_blood_pressure, BloodPressureCategory,
    BloodPressureReading,
};
pub use classifier::{classify, Classification};
pub use config::{parallel_threshold_from_env_value, AnalyzerConfig};
pub use constants::DEFAULT_REST_ADDR;
pub use error::{TriageError, TriageResult};
pub use quality::{has_data_quality_issues, quality_issues, QualityIssue};
pub use record::PatientRecord;
pub use scoring::{age_score, temperature_score, RiskScores};
pub use service::{AssessmentOutcome, AssessmentService};
pub use source::{parse_patient_document, InMemorySource, JsonFileSource, PatientSource};
pub use submission::{AssessmentSink, RecordingSink, SubmissionAck};

pub use vitals_types::{Measurement, RawText};
