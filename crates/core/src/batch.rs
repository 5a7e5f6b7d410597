//! Batch analysis over a patient collection.
//!
//! Every record is classified independently and its identifier is appended to each result
//! list whose flag it carries. Lists keep input order and are not deduplicated.

use crate::classifier::{classify, Classification};
use crate::config::AnalyzerConfig;
use crate::record::PatientRecord;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// The three identifier lists handed to the submission collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentPayload {
    pub high_risk_patients: Vec<String>,
    pub fever_patients: Vec<String>,
    pub data_quality_issues: Vec<String>,
}

/// Counts for a finished batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub high_risk: usize,
    pub fever: usize,
    pub data_quality: usize,
}

/// Result of analysing a batch: per-patient verdicts plus the partitioned identifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchAnalysis {
    pub classifications: Vec<Classification>,
    pub high_risk_patients: Vec<String>,
    pub fever_patients: Vec<String>,
    pub data_quality_issues: Vec<String>,
}

impl BatchAnalysis {
    /// Partitions classifications into the three identifier lists, keeping their order.
    pub fn from_classifications(classifications: Vec<Classification>) -> Self {
        let mut analysis = Self::default();
        for c in &classifications {
            if c.is_high_risk {
                analysis.high_risk_patients.push(c.patient_id.clone());
            }
            if c.has_fever {
                analysis.fever_patients.push(c.patient_id.clone());
            }
            if c.has_data_quality_issues {
                analysis.data_quality_issues.push(c.patient_id.clone());
            }
        }
        analysis.classifications = classifications;

        tracing::debug!(
            total = analysis.classifications.len(),
            high_risk = analysis.high_risk_patients.len(),
            fever = analysis.fever_patients.len(),
            data_quality = analysis.data_quality_issues.len(),
            "batch analysed"
        );

        analysis
    }

    pub fn payload(&self) -> AssessmentPayload {
        AssessmentPayload {
            high_risk_patients: self.high_risk_patients.clone(),
            fever_patients: self.fever_patients.clone(),
            data_quality_issues: self.data_quality_issues.clone(),
        }
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            total: self.classifications.len(),
            high_risk: self.high_risk_patients.len(),
            fever: self.fever_patients.len(),
            data_quality: self.data_quality_issues.len(),
        }
    }
}

/// Classifies records one after another.
pub fn analyze(records: &[PatientRecord]) -> BatchAnalysis {
    BatchAnalysis::from_classifications(records.iter().map(classify).collect())
}

/// Classifies records on the rayon pool. The result is identical to [`analyze`].
pub fn analyze_parallel(records: &[PatientRecord]) -> BatchAnalysis {
    BatchAnalysis::from_classifications(records.par_iter().map(classify).collect())
}

/// Chooses between [`analyze`] and [`analyze_parallel`] by batch size.
#[derive(Clone, Debug, Default)]
pub struct BatchAnalyzer {
    cfg: AnalyzerConfig,
}

impl BatchAnalyzer {
    pub fn new(cfg: AnalyzerConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.cfg
    }

    pub fn analyze(&self, records: &[PatientRecord]) -> BatchAnalysis {
        if self.cfg.use_parallel(records.len()) {
            analyze_parallel(records)
        } else {
            analyze(records)
        }
    }
}
