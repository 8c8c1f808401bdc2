//! Outcome of a generation run.

use serde::Serialize;
use std::path::PathBuf;

/// An example file that was generated (or would be, in dry-run mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// The env file that was read.
    pub source: PathBuf,
    /// The example file that was written.
    pub example: PathBuf,
    /// Number of values replaced by placeholders.
    pub redactions: usize,
    /// Whether the file was actually written.
    pub written: bool,
}

/// An env file that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateFailure {
    pub source: PathBuf,
    pub error: String,
}

/// Collected results for every discovered env file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub generated: Vec<GeneratedFile>,
    pub failures: Vec<GenerateFailure>,
}

impl GenerateReport {
    /// Whether every file was processed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of env files seen.
    pub fn total(&self) -> usize {
        self.generated.len() + self.failures.len()
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| anyhow::Error::from(e).into())
    }
}
