//! Patient sources.
//!
//! The analyzer never looks up where records come from; a [`PatientSource`] is handed to
//! [`crate::AssessmentService`] explicitly. Sources return a fully materialised collection
//! (all pages concatenated) before analysis begins.

use crate::record::PatientRecord;
use crate::{TriageError, TriageResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Supplies the ordered sequence of records to analyse.
pub trait PatientSource {
    fn fetch_all(&self) -> TriageResult<Vec<PatientRecord>>;
}

/// Source backed by records already in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    records: Vec<PatientRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<PatientRecord>) -> Self {
        Self { records }
    }
}

impl PatientSource for InMemorySource {
    fn fetch_all(&self) -> TriageResult<Vec<PatientRecord>> {
        Ok(self.records.clone())
    }
}

/// Source reading a JSON document from disk.
///
/// Accepted shapes:
/// - a bare array of records,
/// - a single page object `{ "data": [...] }`,
/// - an array of page objects, concatenated in order.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PatientSource for JsonFileSource {
    fn fetch_all(&self) -> TriageResult<Vec<PatientRecord>> {
        let contents = std::fs::read_to_string(&self.path).map_err(TriageError::FileRead)?;
        let records = parse_patient_document(&contents)?;
        if records.is_empty() {
            tracing::warn!("no patient records in {}", self.path.display());
        }
        Ok(records)
    }
}

#[derive(Deserialize)]
struct Page {
    data: Vec<PatientRecord>,
}

// Page shapes are tried first: a page object would otherwise deserialise as a record
// with every field defaulted.
#[derive(Deserialize)]
#[serde(untagged)]
enum PatientDocument {
    Page(Page),
    Pages(Vec<Page>),
    Records(Vec<PatientRecord>),
}

/// Parses any of the document shapes accepted by [`JsonFileSource`].
pub fn parse_patient_document(contents: &str) -> TriageResult<Vec<PatientRecord>> {
    let document: PatientDocument =
        serde_json::from_str(contents).map_err(TriageError::Deserialization)?;

    Ok(match document {
        PatientDocument::Page(page) => page.data,
        PatientDocument::Pages(pages) => pages.into_iter().flat_map(|p| p.data).collect(),
        PatientDocument::Records(records) => records,
    })
}
