//! CLI Argument Structures and Configuration
//!
//! This module contains all CLI argument definitions, command structures,
//! and configuration enums used by the Skald CLI binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Documentation Cross-Reference Curation
#[derive(Parser)]
#[command(name = "skald")]
#[command(version = VERSION)]
#[command(about = "📜 Skald - Documentation Cross-Reference Curation")]
#[command(long_about = "
Keep the @related annotations in your header documentation curated: the three
most relevant symbols first, deterministic ordering, golden overrides
respected.

Common Usage:

  # Curate every header under the current directory
  skald update

  # Curate a specific include tree
  skald update ./include

  # See what would change without touching any file
  skald update --dry-run ./include

  # CI gate - nonzero exit when annotations are out of date
  skald check ./include

  # Curate a single entity from the shell
  skald curate cf_audio_play cf_audio_stop CF_AUDIO_PARAMS cf_audio_pause

  # Emit the default configuration
  skald print-default-config
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a documentation tree and rewrite stale @related lists
    Update(UpdateArgs),

    /// Dry run that fails when any @related list is out of date
    Check(CheckArgs),

    /// Curate a single entity's related list and print it
    Curate(CurateArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),
}

/// Output format for run reports
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable plain text
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Root of the documentation tree to process
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to a skald configuration file (default: .skald.yml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Additional directory names to skip
    #[arg(long = "ignore-dir", value_name = "NAME")]
    pub ignore_dir: Vec<String>,

    /// Additional glob patterns (relative to root) to skip
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Additional file extensions to treat as documentation files
    #[arg(long = "extension", value_name = "EXT")]
    pub extension: Vec<String>,

    /// Compute and report changes without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Report output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Suppress the report body, print only the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Root of the documentation tree to check
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to a skald configuration file (default: .skald.yml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Additional directory names to skip
    #[arg(long = "ignore-dir", value_name = "NAME")]
    pub ignore_dir: Vec<String>,

    /// Additional glob patterns (relative to root) to skip
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Additional file extensions to treat as documentation files
    #[arg(long = "extension", value_name = "EXT")]
    pub extension: Vec<String>,

    /// Report output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CurateArgs {
    /// Name of the documented entity
    pub name: String,

    /// Candidate tokens as currently written
    pub tokens: Vec<String>,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Where to write the configuration file
    #[arg(default_value = ".skald.yml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
