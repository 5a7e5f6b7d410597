//! Submission collaborators.
//!
//! An [`AssessmentSink`] receives the three identifier lists produced by a batch and
//! answers with a [`SubmissionAck`].

use crate::batch::AssessmentPayload;
use crate::{TriageError, TriageResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Acknowledgment returned by a sink after accepting a payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub submission_id: String,
    pub received_at: DateTime<Utc>,
    pub high_risk_count: usize,
    pub fever_count: usize,
    pub data_quality_count: usize,
}

impl SubmissionAck {
    /// Builds an acknowledgment for `payload` with a fresh identifier.
    pub fn for_payload(payload: &AssessmentPayload) -> Self {
        Self {
            submission_id: uuid::Uuid::new_v4().simple().to_string(),
            received_at: Utc::now(),
            high_risk_count: payload.high_risk_patients.len(),
            fever_count: payload.fever_patients.len(),
            data_quality_count: payload.data_quality_issues.len(),
        }
    }
}

/// Consumes an assessment payload.
pub trait AssessmentSink {
    fn submit(&self, payload: &AssessmentPayload) -> TriageResult<SubmissionAck>;
}

/// Sink that keeps every submitted payload in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    submissions: Mutex<Vec<AssessmentPayload>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads received so far, oldest first.
    pub fn submissions(&self) -> TriageResult<Vec<AssessmentPayload>> {
        let guard = self
            .submissions
            .lock()
            .map_err(|_| TriageError::Submission("recording sink lock poisoned".into()))?;
        Ok(guard.clone())
    }
}

impl AssessmentSink for RecordingSink {
    fn submit(&self, payload: &AssessmentPayload) -> TriageResult<SubmissionAck> {
        let mut guard = self
            .submissions
            .lock()
            .map_err(|_| TriageError::Submission("recording sink lock poisoned".into()))?;
        guard.push(payload.clone());
        Ok(SubmissionAck::for_payload(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> AssessmentPayload {
        AssessmentPayload {
            high_risk_patients: vec!["A".into(), "B".into()],
            fever_patients: vec!["A".into()],
            data_quality_issues: vec![],
        }
    }

    #[test]
    fn test_recording_sink_keeps_payloads() {
        let sink = RecordingSink::new();
        sink.submit(&payload()).unwrap();
        sink.submit(&AssessmentPayload::default()).unwrap();

        let received = sink.submissions().unwrap();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0], payload());
        assert_eq!(received[1], AssessmentPayload::default());
    }

    #[test]
    fn test_ack_counts_lists() {
        let ack = RecordingSink::new().submit(&payload()).unwrap();
        assert_eq!(ack.high_risk_count, 2);
        assert_eq!(ack.fever_count, 1);
        assert_eq!(ack.data_quality_count, 0);
        assert_eq!(ack.submission_id.len(), 32);
    }

    #[test]
    fn test_ack_ids_are_unique() {
        let sink = RecordingSink::new();
        let first = sink.submit(&payload()).unwrap();
        let second = sink.submit(&payload()).unwrap();
        assert_ne!(first.submission_id, second.submission_id);
    }
}
