//! Configuration file discovery and loading.

use crate::config::schema::ExamplenvConfig;
use crate::error::{ExamplenvError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional settings file in the scanned directory.
pub const CONFIG_FILE_NAME: &str = ".examplenv.yml";

/// Path of the settings file for the given root.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Load the settings for `root`, falling back to defaults when no
/// `.examplenv.yml` exists.
///
/// # Errors
///
/// Returns `ConfigParseError` if the file exists but is not valid YAML for
/// the schema.
pub fn load_config(root: &Path) -> Result<ExamplenvConfig> {
    let path = config_path(root);
    if !path.is_file() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ExamplenvConfig::default());
    }

    tracing::debug!("Loading config from {}", path.display());
    load_config_file(&path)
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<ExamplenvConfig> {
    let content = fs::read_to_string(path).map_err(|e| ExamplenvError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into an [`ExamplenvConfig`].
///
/// An empty document yields the defaults.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ExamplenvConfig> {
    if content.trim().is_empty() {
        return Ok(ExamplenvConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ExamplenvError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
