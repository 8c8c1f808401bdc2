//! Example file naming.

use std::path::{Path, PathBuf};

/// Prepended to the source file name to form the example file name.
pub const EXAMPLE_PREFIX: &str = "example";

/// Whether `file_name` identifies an env file for the given prefix.
///
/// # Example
///
/// ```
/// use examplenv::discovery::is_env_file_name;
///
/// assert!(is_env_file_name(".env", ".env"));
/// assert!(is_env_file_name(".env.prod", ".env"));
/// assert!(!is_env_file_name("example.env", ".env"));
/// ```
pub fn is_env_file_name(file_name: &str, prefix: &str) -> bool {
    !prefix.is_empty() && file_name.starts_with(prefix)
}

/// Name of the example file generated for `file_name`.
///
/// `.env` becomes `example.env`, `.env.dev` becomes `example.env.dev`.
pub fn example_file_name(file_name: &str) -> String {
    format!("{}{}", EXAMPLE_PREFIX, file_name)
}

/// Sibling path of the example file for `source`.
///
/// Returns `None` when `source` has no usable file name.
pub fn example_path(source: &Path) -> Option<PathBuf> {
    let name = source.file_name()?.to_str()?;
    Some(source.with_file_name(example_file_name(name)))
}
