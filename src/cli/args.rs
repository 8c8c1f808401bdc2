//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// examplenv - Generate example env files with secrets redacted.
#[derive(Debug, Parser)]
#[command(name = "examplenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct Cli {
    /// Show per-file details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find all .env files and generate their examples
    Gen(GenArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `gen` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenArgs {
    /// Directory to search for env files (defaults to the current directory)
    pub dir: Option<PathBuf>,

    /// Mask all values, only keep keys
    #[arg(long)]
    pub mask_all: bool,

    /// File name prefix identifying env files
    #[arg(long, env = "EXAMPLENV_PREFIX")]
    pub prefix: Option<String>,

    /// Only look in the directory itself, not its subdirectories
    #[arg(long)]
    pub no_recursive: bool,

    /// Show what would be generated without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Output a JSON report instead of progress lines
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
