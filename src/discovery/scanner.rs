//! Directory scanning for env files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ExamplenvConfig;
use crate::error::{ExamplenvError, Result};

use super::naming::is_env_file_name;

/// What to look for while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// File name prefix identifying env files.
    pub prefix: String,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Directory names that are skipped.
    pub exclude: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self::from(&ExamplenvConfig::default())
    }
}

impl From<&ExamplenvConfig> for DiscoveryOptions {
    fn from(config: &ExamplenvConfig) -> Self {
        Self {
            prefix: config.prefix.clone(),
            recursive: config.recursive,
            exclude: config.exclude.clone(),
        }
    }
}

/// Ensure `root` exists and is a directory.
pub fn check_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(ExamplenvError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(ExamplenvError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

/// Find env files under `root`.
///
/// Hidden directories are scanned; symlinked directories are not followed.
/// The result is sorted.
///
/// # Errors
///
/// Returns `DirectoryNotFound` / `NotADirectory` for a bad root, or `Io` if
/// the root cannot be listed. Unreadable subdirectories and entries are
/// logged and skipped.
///
/// # Example
///
/// ```
/// use examplenv::discovery::{discover, DiscoveryOptions};
/// use tempfile::TempDir;
/// use std::fs;
///
/// let temp = TempDir::new().unwrap();
/// fs::write(temp.path().join(".env"), "A=1").unwrap();
/// fs::write(temp.path().join("README.md"), "").unwrap();
///
/// let found = discover(temp.path(), &DiscoveryOptions::default()).unwrap();
/// assert_eq!(found, vec![temp.path().join(".env")]);
/// ```
pub fn discover(root: &Path, options: &DiscoveryOptions) -> Result<Vec<PathBuf>> {
    check_root(root)?;

    let mut found = Vec::new();
    scan_dir(root, options, &mut found)?;
    found.sort();

    tracing::debug!(
        "Discovered {} env file(s) under {}",
        found.len(),
        root.display()
    );
    Ok(found)
}

fn scan_dir(dir: &Path, options: &DiscoveryOptions, found: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::debug!("Skipping non UTF-8 path {}", path.display());
            continue;
        };

        if file_type.is_dir() {
            if options.recursive && !options.exclude.iter().any(|e| *e == name) {
                // An unreadable subdirectory skips that subtree only.
                if let Err(e) = scan_dir(&path, options, found) {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                }
            }
            continue;
        }

        let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
        if is_file && is_env_file_name(&name, &options.prefix) {
            tracing::debug!("Found env file {}", path.display());
            found.push(path);
        }
    }
    Ok(())
}
