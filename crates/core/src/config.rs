//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into services, so
//! request handling never reads process-wide environment variables.

use crate::constants::DEFAULT_PARALLEL_THRESHOLD;
use crate::{TriageError, TriageResult};

/// Analyzer configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzerConfig {
    parallel_threshold: usize,
}

impl AnalyzerConfig {
    /// Create a new `AnalyzerConfig`.
    ///
    /// A `parallel_threshold` of `0` disables the rayon path entirely.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Whether a batch of `len` records should be analysed in parallel.
    pub fn use_parallel(&self, len: usize) -> bool {
        self.parallel_threshold != 0 && len >= self.parallel_threshold
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLEL_THRESHOLD)
    }
}

/// Parse the parallel threshold from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default threshold.
pub fn parallel_threshold_from_env_value(value: Option<String>) -> TriageResult<usize> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_PARALLEL_THRESHOLD),
        Some(v) => v.parse::<usize>().map_err(|_| {
            TriageError::InvalidInput(format!(
                "VITALS_PARALLEL_THRESHOLD must be a non-negative integer, got {v:?}"
            ))
        }),
    }
}
