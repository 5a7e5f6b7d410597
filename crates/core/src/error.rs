/// Errors raised by the collaborators around the scoring core.
///
/// Scoring and classification never fail; these variants only cover reading patient
/// sources, encoding results and handing payloads to a submission sink.
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read patient source: {0}")]
    FileRead(std::io::Error),
    #[error("failed to deserialize patient records: {0}")]
    Deserialization(serde_json::Error),
    #[error("failed to serialize assessment: {0}")]
    Serialization(serde_json::Error),
    #[error("submission failed: {0}")]
    Submission(String),
}

pub type TriageResult<T> = std::result::Result<T, TriageError>;
