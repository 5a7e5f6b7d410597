//! Assessment service wiring a patient source and a submission sink around the analyzer.

use crate::batch::{BatchAnalysis, BatchAnalyzer};
use crate::source::PatientSource;
use crate::submission::{AssessmentSink, SubmissionAck};
use crate::TriageResult;

/// What a full assessment run produced.
#[derive(Clone, Debug)]
pub struct AssessmentOutcome {
    pub analysis: BatchAnalysis,
    pub ack: SubmissionAck,
}

/// Fetch, analyse, submit.
///
/// Collaborators are injected at construction, so a missing source or sink is a compile
/// error rather than a runtime lookup failure.
pub struct AssessmentService<S, K> {
    source: S,
    sink: K,
    analyzer: BatchAnalyzer,
}

impl<S, K> AssessmentService<S, K>
where
    S: PatientSource,
    K: AssessmentSink,
{
    pub fn new(source: S, sink: K, analyzer: BatchAnalyzer) -> Self {
        Self {
            source,
            sink,
            analyzer,
        }
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Fetches every record, analyses the batch and submits the payload.
    ///
    /// # Errors
    ///
    /// Returns a `TriageError` if:
    /// - the source cannot supply records,
    /// - the sink rejects the payload.
    pub fn run(&self) -> TriageResult<AssessmentOutcome> {
        let records = self.source.fetch_all()?;
        tracing::info!("analysing {} patient records", records.len());

        let analysis = self.analyzer.analyze(&records);
        let ack = self.sink.submit(&analysis.payload())?;
        tracing::info!(
            submission_id = %ack.submission_id,
            high_risk = ack.high_risk_count,
            fever = ack.fever_count,
            data_quality = ack.data_quality_count,
            "assessment submitted"
        );

        Ok(AssessmentOutcome { analysis, ack })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PatientRecord;
    use crate::source::InMemorySource;
    use crate::submission::RecordingSink;
    use crate::TriageError;

    struct FailingSource;

    impl PatientSource for FailingSource {
        fn fetch_all(&self) -> TriageResult<Vec<PatientRecord>> {
            Err(TriageError::InvalidInput("upstream unavailable".into()))
        }
    }

    struct RejectingSink;

    impl AssessmentSink for RejectingSink {
        fn submit(&self, _: &crate::AssessmentPayload) -> TriageResult<SubmissionAck> {
            Err(TriageError::Submission("rejected".into()))
        }
    }

    fn records() -> Vec<PatientRecord> {
        vec![
            PatientRecord::new("P1")
                .with_blood_pressure("150/95")
                .with_temperature(102.3)
                .with_age(70.0),
            PatientRecord::new("P2").with_blood_pressure("INVALID"),
        ]
    }

    #[test]
    fn test_run_submits_payload() {
        let service = AssessmentService::new(
            InMemorySource::new(records()),
            RecordingSink::new(),
            BatchAnalyzer::default(),
        );

        let outcome = service.run().unwrap();
        assert_eq!(outcome.analysis.high_risk_patients, vec!["P1"]);
        assert_eq!(outcome.analysis.data_quality_issues, vec!["P2"]);
        assert_eq!(outcome.ack.high_risk_count, 1);

        let submitted = service.sink().submissions().unwrap();
        assert_eq!(submitted, vec![outcome.analysis.payload()]);
    }

    #[test]
    fn test_source_failure_skips_submission() {
        let service =
            AssessmentService::new(FailingSource, RecordingSink::new(), BatchAnalyzer::default());

        let err = service.run().expect_err("source should fail");
        assert!(matches!(err, TriageError::InvalidInput(_)));
        assert!(service.sink().submissions().unwrap().is_empty());
    }

    #[test]
    fn test_sink_failure_propagates() {
        let service = AssessmentService::new(
            InMemorySource::new(records()),
            RejectingSink,
            BatchAnalyzer::default(),
        );
        let err = service.run().expect_err("sink should fail");
        assert!(matches!(err, TriageError::Submission(msg) if msg == "rejected"));
    }
}
