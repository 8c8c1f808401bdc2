//! Env file discovery.
//!
//! - [`discover`] walks a directory for files named with the configured prefix
//! - [`example_path`] names the sibling example file for a discovered file

pub mod naming;
pub mod scanner;

pub use naming::{example_file_name, example_path, is_env_file_name, EXAMPLE_PREFIX};
pub use scanner::{check_root, discover, DiscoveryOptions};
