//! Command Execution Logic
//!
//! This module handles the skald subcommands: curating documentation trees,
//! gating CI on stale annotations, one-shot curation, and configuration
//! management. Settings are layered defaults <- config file <- CLI flags.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use anyhow::Context;
use console::style;
use serde::Deserialize;
use tracing::debug;

use crate::cli::args::{CheckArgs, CurateArgs, InitConfigArgs, ReportFormat, UpdateArgs};
use skald_rs::core::config::RelatedConfig;
use skald_rs::io::reports::{self, CurationReport};
use skald_rs::{run_curation, RelatedCurator};

/// Implicit configuration file names probed in the working directory.
const IMPLICIT_CONFIG_FILES: [&str; 2] = [".skald.yml", ".skald.yaml"];

/// Optional YAML configuration for skald commands.
#[derive(Debug, Default, Deserialize)]
pub struct SkaldConfigFile {
    pub root: Option<PathBuf>,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignore_dir: Vec<String>,
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub overrides: BTreeMap<String, Vec<String>>,
}

/// Run the `update` command.
pub fn update_command(args: UpdateArgs) -> anyhow::Result<()> {
    let config = build_run_config(
        &args.root,
        &args.config,
        &args.ignore_dir,
        &args.ignore,
        &args.extension,
    )?;

    let report = run_curation(&config, args.dry_run)?;
    render_report(&report, &args.format, args.quiet)?;

    if !matches!(args.format, ReportFormat::Json) {
        print_outcome_banner(&report);
    }

    Ok(())
}

/// Run the `check` command: dry run, nonzero exit on pending changes.
pub fn check_command(args: CheckArgs) -> anyhow::Result<()> {
    let config = build_run_config(
        &args.root,
        &args.config,
        &args.ignore_dir,
        &args.ignore,
        &args.extension,
    )?;

    let report = run_curation(&config, true)?;
    render_report(&report, &args.format, false)?;

    if report.has_changes() {
        anyhow::bail!(
            "{} file(s) carry stale @related annotations; run `skald update`",
            report.files_changed
        );
    }
    if report.has_failures() {
        anyhow::bail!("{} file(s) could not be checked", report.failures.len());
    }

    Ok(())
}

/// Run the `curate` command: one entity, straight to stdout.
pub fn curate_command(args: CurateArgs) -> anyhow::Result<()> {
    let file_config = find_config_file(&None)?;
    let curator = match file_config {
        Some(config) => RelatedCurator::with_overrides(config.overrides),
        None => RelatedCurator::new(),
    };
    let curated = curator.curate(&args.name, &args.tokens);
    println!("{}", curated.join(" "));
    Ok(())
}

/// Print the default configuration as YAML.
pub fn print_default_config() -> anyhow::Result<()> {
    let config = RelatedConfig::new(PathBuf::from("."));
    let yaml =
        serde_yaml::to_string(&config).context("Failed to serialize default configuration")?;
    println!("{yaml}");
    Ok(())
}

/// Write a starter configuration file.
pub fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "Configuration file already exists: {} (use --force to overwrite)",
            args.output.display()
        );
    }

    let config = RelatedConfig::new(PathBuf::from("."));
    let yaml =
        serde_yaml::to_string(&config).context("Failed to serialize default configuration")?;
    std::fs::write(&args.output, yaml)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "{} Wrote configuration to {}",
        style("✅").green(),
        style(args.output.display()).cyan()
    );
    Ok(())
}

/// Assemble the effective run configuration from defaults, the config file,
/// and CLI flags.
fn build_run_config(
    cli_root: &Path,
    explicit_config: &Option<PathBuf>,
    ignore_dir: &[String],
    ignore: &[String],
    extension: &[String],
) -> anyhow::Result<RelatedConfig> {
    let file_config = find_config_file(explicit_config)?;
    let root = resolve_root(cli_root, file_config.as_ref())?;

    let mut config = RelatedConfig::new(root);
    if let Some(file_config) = file_config {
        apply_file_config(&mut config, file_config);
    }
    extend_ignore_set(&mut config.ignore_dirs, ignore_dir.to_vec());
    extend_list(&mut config.ignore_globs, ignore.to_vec());
    extend_list(&mut config.extensions, extension.to_vec());

    Ok(config)
}

/// Find and load a config file from an explicit path or implicit locations.
pub fn find_config_file(
    explicit_path: &Option<PathBuf>,
) -> anyhow::Result<Option<SkaldConfigFile>> {
    let implicit_config = IMPLICIT_CONFIG_FILES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists());

    match explicit_path.clone().or(implicit_config) {
        Some(path) => Ok(Some(load_config_file(&path)?)),
        None => Ok(None),
    }
}

/// Load skald settings from a YAML file.
pub fn load_config_file(path: &Path) -> anyhow::Result<SkaldConfigFile> {
    debug!("Loading configuration from {}", path.display());
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read skald config at {}", path.display()))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse skald config {}", path.display()))
}

/// Resolve and validate the run root.
fn resolve_root(cli_root: &Path, file_config: Option<&SkaldConfigFile>) -> anyhow::Result<PathBuf> {
    let root_override = if cli_root != Path::new(".") {
        cli_root.to_path_buf()
    } else {
        file_config
            .and_then(|config| config.root.clone())
            .unwrap_or_else(|| cli_root.to_path_buf())
    };

    if !root_override.exists() {
        anyhow::bail!("Root does not exist: {}", root_override.display());
    }

    let root = std::fs::canonicalize(&root_override)
        .with_context(|| format!("Failed to resolve root {}", root_override.display()))?;

    if !root.is_dir() {
        anyhow::bail!("Root must be a directory: {}", root.display());
    }

    Ok(root)
}

/// Apply file config settings on top of the defaults.
fn apply_file_config(config: &mut RelatedConfig, file_config: SkaldConfigFile) {
    extend_list(&mut config.extensions, file_config.extensions);
    extend_ignore_set(&mut config.ignore_dirs, file_config.ignore_dir);
    extend_list(&mut config.ignore_globs, file_config.ignore);
    config.overrides.extend(file_config.overrides);
}

/// Extend a set with non-empty trimmed strings.
fn extend_ignore_set(set: &mut BTreeSet<String>, items: Vec<String>) {
    for item in items {
        if !item.trim().is_empty() {
            set.insert(item);
        }
    }
}

/// Extend a list with non-empty trimmed strings, skipping duplicates.
fn extend_list(list: &mut Vec<String>, items: Vec<String>) {
    for item in items {
        if !item.trim().is_empty() && !list.contains(&item) {
            list.push(item);
        }
    }
}

/// Render the report in the requested format.
fn render_report(
    report: &CurationReport,
    format: &ReportFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    match format {
        ReportFormat::Json => println!("{}", reports::render_json(report)?),
        ReportFormat::Text if quiet => {
            let text = reports::render_text(report);
            if let Some(summary) = text.lines().last() {
                println!("{summary}");
            }
        }
        ReportFormat::Text => println!("{}", reports::render_text(report)),
    }
    Ok(())
}

/// One-line styled outcome banner after a text-format run.
fn print_outcome_banner(report: &CurationReport) {
    if report.has_failures() {
        println!(
            "{} {} file(s) could not be processed",
            style("⚠️").yellow(),
            report.failures.len()
        );
    }
    if report.files_changed == 0 {
        println!("{} All @related annotations are curated", style("✅").green());
    } else if report.dry_run {
        println!(
            "{} {} file(s) would be updated",
            style("📝").yellow(),
            report.files_changed
        );
    } else {
        println!(
            "{} {} file(s) updated",
            style("✅").green(),
            report.files_changed
        );
    }
}
