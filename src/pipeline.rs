//! Directory walking and parallel document processing.
//!
//! Each file is processed independently: scanned, curated, and rewritten in
//! isolation from every other file. Processing runs in parallel across files
//! via rayon; the curator is pure and shares only its immutable override
//! table, so no coordination is needed. One file's failure is recorded and
//! never aborts the rest of the run.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::config::RelatedConfig;
use crate::core::curator::RelatedCurator;
use crate::core::errors::{Result, SkaldError};
use crate::io::reports::{CurationReport, FileFailure, FileReport};
use crate::rewrite::{rewrite_document, ChangeRecord};

/// Run a curation pass over the configured root.
///
/// With `dry_run` set, changes are computed and reported but nothing is
/// written back to disk.
pub fn run_curation(config: &RelatedConfig, dry_run: bool) -> Result<CurationReport> {
    let globset = build_ignore_globset(&config.ignore_globs)?;
    let curator = RelatedCurator::with_overrides(config.overrides.clone());
    let files = collect_documents(config, &globset)?;

    info!(
        "Curating related lists across {} file(s) under {}",
        files.len(),
        config.root.display()
    );

    let outcomes: Vec<(PathBuf, std::result::Result<Vec<ChangeRecord>, String>)> = files
        .par_iter()
        .map(|path| {
            let outcome = process_file(path, &curator, dry_run);
            (path.clone(), outcome)
        })
        .collect();

    let mut report = CurationReport {
        files_scanned: outcomes.len(),
        files_changed: 0,
        dry_run,
        changed_files: Vec::new(),
        failures: Vec::new(),
    };

    for (path, outcome) in outcomes {
        let rel = relative_path(&path, &config.root);
        match outcome {
            Ok(changes) if changes.is_empty() => {}
            Ok(changes) => {
                report.files_changed += 1;
                report.changed_files.push(FileReport { path: rel, changes });
            }
            Err(detail) => {
                warn!("Skipping {}: {}", rel.display(), detail);
                report.failures.push(FileFailure { path: rel, detail });
            }
        }
    }

    Ok(report)
}

/// Curate one file, persisting it when changed (unless `dry_run`).
///
/// Failures are returned as plain strings so the caller can record them
/// against the file without aborting the surrounding run.
fn process_file(
    path: &Path,
    curator: &RelatedCurator,
    dry_run: bool,
) -> std::result::Result<Vec<ChangeRecord>, String> {
    let source =
        fs::read_to_string(path).map_err(|err| format!("failed to read file: {err}"))?;

    let outcome = rewrite_document(&source, curator);
    if let Some(content) = &outcome.content {
        debug!(
            "{}: {} related line(s) updated",
            path.display(),
            outcome.changes.len()
        );
        if !dry_run {
            fs::write(path, content).map_err(|err| format!("failed to write file: {err}"))?;
        }
    }

    Ok(outcome.changes)
}

/// Collect documentation files under the root, sorted for deterministic
/// reporting.
fn collect_documents(config: &RelatedConfig, globset: &GlobSet) -> Result<Vec<PathBuf>> {
    if !config.root.exists() {
        return Err(SkaldError::validation(format!(
            "Root does not exist: {}",
            config.root.display()
        )));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(&config.root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry, config));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable directory entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if !config.matches_extension(&path) {
            continue;
        }
        if globset.is_match(relative_path(&path, &config.root)) {
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

fn is_ignored_dir(entry: &walkdir::DirEntry, config: &RelatedConfig) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .map(|name| config.ignore_dirs.contains(name))
        .unwrap_or(false)
}

fn build_ignore_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|err| {
            SkaldError::config_field(
                format!("Invalid glob pattern '{pattern}': {err}"),
                "ignore_globs",
            )
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|err| SkaldError::config(format!("Failed to build ignore globset: {err}")))
}

fn relative_path(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(PathBuf::from)
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
