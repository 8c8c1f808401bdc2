//! examplenv - Generate example env files with secrets redacted.
//!
//! examplenv scans a directory for `.env`, `.env.dev`, `.env.prod`, ... and
//! writes a sibling `example.env*` for each, keeping comments and layout but
//! replacing marked values with `<KEY>` placeholders.
//!
//! # Markers
//!
//! - `# !SECRET` on a line redacts that line's value
//! - `# !MASK-ON` redacts every following value until `# !MASK-OFF`
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.examplenv.yml` loading
//! - [`discovery`] - Env file discovery and example file naming
//! - [`envfile`] - Line classification and redaction
//! - [`error`] - Error types and result aliases
//! - [`generate`] - Reading, rendering and writing example files
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use examplenv::envfile::{render_example, TransformOptions};
//!
//! let content = "# !MASK-ON\nAPP_SECRET=ThisIsASecret\n# !MASK-OFF\nPORT=8080\n";
//! let example = render_example(".env", content, TransformOptions::default());
//! assert_eq!(
//!     example,
//!     "# Example environment variables for .env\n# !MASK-ON\nAPP_SECRET=<APP_SECRET>\n# !MASK-OFF\nPORT=8080\n"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod envfile;
pub mod error;
pub mod generate;
pub mod ui;

pub use error::{ExamplenvError, Result};
