//! Env file redaction.
//!
//! This module turns the content of a `.env` file into the content of its
//! example file:
//!
//! - [`EnvLine`] classifies a raw line as an assignment or pass-through
//! - [`Markers`] finds `!SECRET`, `!MASK-ON` and `!MASK-OFF` in comments
//! - [`LineTransformer`] applies the redaction rules line by line
//!
//! # Example
//!
//! ```
//! use examplenv::envfile::{transform, TransformOptions};
//!
//! let output = transform(
//!     ["# !MASK-ON", "APP_SECRET=ThisIsASecret", "# !MASK-OFF"],
//!     TransformOptions::default(),
//! );
//! assert_eq!(output, ["# !MASK-ON", "APP_SECRET=<APP_SECRET>", "# !MASK-OFF"]);
//! ```

pub mod line;
pub mod markers;
pub mod transformer;

pub use line::{Assignment, EnvLine};
pub use markers::Markers;
pub use transformer::{
    header, placeholder, render, render_example, transform, LineTransformer, Rendered,
    TransformOptions,
};
