//! Gen command implementation.
//!
//! The `examplenv gen` command finds env files and writes their redacted
//! example files.

use std::path::{Path, PathBuf};

use crate::cli::args::GenArgs;
use crate::config::{load_config, ConfigOverrides, ExamplenvConfig};
use crate::discovery::{check_root, discover, DiscoveryOptions};
use crate::envfile::TransformOptions;
use crate::error::Result;
use crate::generate::{generate_all, GenerateOptions, GenerateReport};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The gen command implementation.
pub struct GenCommand {
    working_dir: PathBuf,
    args: GenArgs,
}

impl GenCommand {
    /// Create a new gen command.
    pub fn new(working_dir: &Path, args: GenArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    /// Directory to scan: the positional argument, else the working directory.
    pub fn root(&self) -> PathBuf {
        match &self.args.dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => self.working_dir.join(dir),
            None => self.working_dir.clone(),
        }
    }

    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            prefix: self.args.prefix.clone(),
            mask_all: self.args.mask_all,
            no_recursive: self.args.no_recursive,
        }
    }

    fn report(&self, root: &Path, report: &GenerateReport, ui: &mut dyn UserInterface) {
        for file in &report.generated {
            ui.show_file(
                &display_path(root, &file.source),
                &display_path(root, &file.example),
            );
            ui.detail(&format!("{} value(s) redacted", file.redactions));
        }

        for failure in &report.failures {
            ui.error(&failure.error);
        }

        let count = report.generated.len();
        let noun = if count == 1 { "file" } else { "files" };
        if report.is_success() {
            if self.args.dry_run {
                ui.success(&format!("Would generate {} example {}", count, noun));
            } else {
                ui.success(&format!("Generated {} example {}", count, noun));
            }
        } else {
            ui.error(&format!(
                "{} of {} env files failed",
                report.failures.len(),
                report.total()
            ));
        }
    }
}

impl Command for GenCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.root();
        check_root(&root)?;

        let config: ExamplenvConfig = load_config(&root)?.with_overrides(&self.overrides());
        tracing::debug!("Resolved settings: {:?}", config);

        if self.args.json {
            ui.set_output_mode(OutputMode::Silent);
        }

        ui.show_header(&format!(
            "Searching for {} files in: {}",
            config.prefix,
            root.display()
        ));

        let sources = discover(&root, &DiscoveryOptions::from(&config))?;
        if sources.is_empty() && !self.args.json {
            ui.warning(&format!("No {} files found", config.prefix));
            return Ok(CommandResult::success());
        }

        let options = GenerateOptions {
            transform: TransformOptions {
                mask_all: config.mask_all,
            },
            dry_run: self.args.dry_run,
        };
        let report = generate_all(&sources, &options);
        tracing::info!(
            "Processed {} env file(s), {} failed",
            report.total(),
            report.failures.len()
        );

        if self.args.json {
            println!("{}", report.to_json()?);
        } else {
            self.report(&root, &report, ui);
        }

        if report.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

/// Path relative to `root` for display, falling back to the full path.
fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
