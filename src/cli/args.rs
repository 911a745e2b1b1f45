//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// Lintweave - Composable lint configuration.
#[derive(Debug, Parser)]
#[command(name = "lintweave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to options file (overrides lintweave.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

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
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the composed fragment list (default if no command specified)
    Compose(ComposeArgs),

    /// Evaluate locally implemented rules, such as missing companions
    Check(CheckArgs),

    /// Show which package manager would install companions
    Detect(DetectArgs),

    /// Install companion packages with the detected package manager
    Install(InstallArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// How `compose` prints fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ComposeFormat {
    /// One fragment name per line
    #[default]
    Names,
    /// Full fragments as a JSON array
    Json,
}

/// Arguments for the `compose` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ComposeArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "names")]
    pub format: ComposeFormat,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Install missing companions while checking
    #[arg(long)]
    pub fix: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            fix: false,
            format: OutputFormat::Human,
        }
    }
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DetectArgs {
    /// Directory to detect from (defaults to the project root)
    pub dir: Option<PathBuf>,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallArgs {
    /// Package specs, e.g. `eslint-plugin-yml` or `@eslint/markdown@^6`
    #[arg(required = true)]
    pub specs: Vec<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
