//! Configuration for curation runs.
//!
//! Mirrors the layered model of the CLI: embedded defaults, then an optional
//! YAML file, then command-line flags. The structure itself is plain data so
//! it serializes cleanly for `print-default-config`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// File extensions scanned by default.
pub const DEFAULT_EXTENSIONS: [&str; 1] = ["h"];

static DEFAULT_IGNORED_DIR_NAMES: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    [
        ".git",
        ".hg",
        ".svn",
        ".idea",
        ".vscode",
        "node_modules",
        "target",
        "build",
        "dist",
        "out",
        "third_party",
        "vendor",
        "tmp",
        "temp",
    ]
    .into_iter()
    .collect()
});

/// Configuration for a curation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelatedConfig {
    /// Root path of the documentation tree to process.
    pub root: PathBuf,
    /// File extensions (without dot) treated as documentation files.
    pub extensions: Vec<String>,
    /// Directory names to skip while walking.
    pub ignore_dirs: BTreeSet<String>,
    /// Glob patterns (relative to root) to skip.
    pub ignore_globs: Vec<String>,
    /// Override entries layered over the built-in table; the value lists the
    /// preferred related names for the keyed entity.
    #[serde(default)]
    pub overrides: BTreeMap<String, Vec<String>>,
}

impl RelatedConfig {
    /// Create a new configuration with defaults for the given root.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extensions: DEFAULT_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            ignore_dirs: DEFAULT_IGNORED_DIR_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            ignore_globs: Vec::new(),
            overrides: BTreeMap::new(),
        }
    }

    /// True when `path`'s extension is one of the configured extensions.
    pub fn matches_extension(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.extensions
                    .iter()
                    .any(|configured| configured.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults_scan_header_files_only() {
        let config = RelatedConfig::new(PathBuf::from("."));
        assert!(config.matches_extension(Path::new("include/cute_app.h")));
        assert!(!config.matches_extension(Path::new("src/app.c")));
        assert!(!config.matches_extension(Path::new("README")));
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        let config = RelatedConfig::new(PathBuf::from("."));
        assert!(config.matches_extension(Path::new("include/LEGACY.H")));
    }

    #[test]
    fn default_config_round_trips_through_yaml() {
        let config = RelatedConfig::new(PathBuf::from("include"));
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: RelatedConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.root, config.root);
        assert_eq!(parsed.extensions, config.extensions);
        assert_eq!(parsed.ignore_dirs, config.ignore_dirs);
    }
}
