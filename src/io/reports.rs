//! Aggregated run reports and their text/JSON rendering.

use std::path::PathBuf;

use serde::Serialize;

use crate::core::errors::Result;
use crate::rewrite::ChangeRecord;

/// All rewritten annotations within a single file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Path of the file, relative to the run root.
    pub path: PathBuf,
    /// The rewritten lines, in document order.
    pub changes: Vec<ChangeRecord>,
}

/// A file that could not be processed.
#[derive(Debug, Serialize)]
pub struct FileFailure {
    /// Path of the file, relative to the run root.
    pub path: PathBuf,
    /// Human-readable description of what went wrong.
    pub detail: String,
}

/// Complete results of one curation run.
#[derive(Debug, Serialize)]
pub struct CurationReport {
    /// Number of documentation files scanned.
    pub files_scanned: usize,
    /// Number of files whose annotations changed.
    pub files_changed: usize,
    /// Whether changes were computed without being persisted.
    pub dry_run: bool,
    /// Per-file change details, sorted by path.
    pub changed_files: Vec<FileReport>,
    /// Files skipped because of read or write failures.
    pub failures: Vec<FileFailure>,
}

impl CurationReport {
    /// True when at least one file changed (or would change under dry run).
    pub fn has_changes(&self) -> bool {
        self.files_changed > 0
    }

    /// True when any file could not be processed.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Render a curation report as plain text.
pub fn render_text(report: &CurationReport) -> String {
    let mut output = String::new();

    output.push_str("Curated files\n");
    output.push_str("-------------\n");
    if report.changed_files.is_empty() {
        output.push_str("  None\n\n");
    } else {
        for file in &report.changed_files {
            output.push_str(&format!("  - {}\n", file.path.display()));
            for change in &file.changes {
                output.push_str(&format!(
                    "      L{} [{} {}] {} -> {}\n",
                    change.line,
                    change.kind,
                    change.entity,
                    change.before.join(" "),
                    change.after.join(" "),
                ));
            }
        }
        output.push('\n');
    }

    output.push_str("Failures\n");
    output.push_str("--------\n");
    if report.failures.is_empty() {
        output.push_str("  None\n\n");
    } else {
        for failure in &report.failures {
            output.push_str(&format!(
                "  - {} - {}\n",
                failure.path.display(),
                failure.detail
            ));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Summary: {} file(s) scanned, {} file(s) updated{}.\n",
        report.files_scanned,
        report.files_changed,
        if report.dry_run { " (dry run)" } else { "" }
    ));

    output
}

/// Render a curation report as JSON.
pub fn render_json(report: &CurationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
