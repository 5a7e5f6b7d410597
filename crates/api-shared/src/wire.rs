//! Request and response bodies for the triage API.
//!
//! Core types are embedded directly; their OpenAPI schema is declared as a free-form
//! object because record fields accept any JSON value.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vitals_core::{AssessmentPayload, BatchSummary, Classification, PatientRecord};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ClassifyReq {
    #[schema(value_type = Object)]
    pub patient: PatientRecord,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ClassifyRes {
    #[schema(value_type = Object)]
    pub classification: Classification,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct AssessReq {
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub patients: Vec<PatientRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AssessRes {
    /// The three identifier lists, ready for submission.
    #[schema(value_type = Object)]
    pub payload: AssessmentPayload,
    #[schema(value_type = Object)]
    pub summary: BatchSummary,
    /// Per-patient verdicts in input order.
    #[schema(value_type = Vec<Object>)]
    pub classifications: Vec<Classification>,
}
