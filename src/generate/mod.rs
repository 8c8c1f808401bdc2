//! Example file generation.
//!
//! Reads each discovered env file, renders its redacted example, and writes
//! it next to the source. A failure on one file is recorded in the
//! [`GenerateReport`] and the remaining files are still processed.
//!
//! # Example
//!
//! ```
//! use examplenv::generate::{generate_all, GenerateOptions};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let source = temp.path().join(".env");
//! fs::write(&source, "TOKEN=abc # !SECRET\n").unwrap();
//!
//! let report = generate_all(&[source], &GenerateOptions::default());
//! assert!(report.is_success());
//!
//! let example = fs::read_to_string(temp.path().join("example.env")).unwrap();
//! assert!(example.contains("TOKEN=<TOKEN> # !SECRET"));
//! ```

pub mod report;

pub use report::{GenerateFailure, GenerateReport, GeneratedFile};

use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::example_path;
use crate::envfile::{render, TransformOptions};
use crate::error::{ExamplenvError, Result};

/// Options for a generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Redaction options passed to the transformer.
    pub transform: TransformOptions,
    /// Render without writing anything.
    pub dry_run: bool,
}

/// Generate the example file for a single env file.
///
/// # Errors
///
/// Returns `ReadFailed` if the source cannot be read as UTF-8 text and
/// `WriteFailed` if the example file cannot be written.
pub fn generate_file(source: &Path, options: &GenerateOptions) -> Result<GeneratedFile> {
    let name = source.file_name().and_then(|n| n.to_str());
    let (Some(name), Some(example)) = (name, example_path(source)) else {
        return Err(anyhow::anyhow!("{} has no usable file name", source.display()).into());
    };

    let content = fs::read_to_string(source).map_err(|e| ExamplenvError::ReadFailed {
        path: source.to_path_buf(),
        source: e,
    })?;

    let rendered = render(name, &content, options.transform);

    if options.dry_run {
        tracing::debug!("Dry run, not writing {}", example.display());
    } else {
        fs::write(&example, &rendered.content).map_err(|e| ExamplenvError::WriteFailed {
            path: example.clone(),
            source: e,
        })?;
        tracing::debug!(
            "Wrote {} ({} value(s) redacted)",
            example.display(),
            rendered.redactions
        );
    }

    Ok(GeneratedFile {
        source: source.to_path_buf(),
        example,
        redactions: rendered.redactions,
        written: !options.dry_run,
    })
}

/// Generate example files for every source, collecting results.
pub fn generate_all(sources: &[PathBuf], options: &GenerateOptions) -> GenerateReport {
    let mut report = GenerateReport::default();

    for source in sources {
        match generate_file(source, options) {
            Ok(file) => report.generated.push(file),
            Err(e) => {
                tracing::debug!("Failed to generate example for {}: {}", source.display(), e);
                report.failures.push(GenerateFailure {
                    source: source.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    report
}
