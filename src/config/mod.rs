//! Settings loading for examplenv.
//!
//! Settings come from an optional `.examplenv.yml` in the scanned directory,
//! with command line flags layered on top:
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use examplenv::config::{load_config, ConfigOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".examplenv.yml"), "mask_all: true").unwrap();
//!
//! let config = load_config(temp.path())
//!     .unwrap()
//!     .with_overrides(&ConfigOverrides::default());
//! assert!(config.mask_all);
//! assert_eq!(config.prefix, ".env");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{config_path, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{ConfigOverrides, ExamplenvConfig};
