//! Rewriting of `@related` lines inside documents.
//!
//! For every curation site the rewriter renders the canonical annotation line
//! ` * @related  A B C` and swaps it in when it differs from what is already
//! written. Documents keep their original line-ending convention (CRLF is
//! detected and preserved, LF otherwise) and always end with exactly one
//! trailing line ending after a rewrite. Unchanged documents are reported as
//! such so callers can skip persisting them, which makes a second run over
//! curated output a no-op.

use serde::Serialize;

use crate::core::curator::RelatedCurator;
use crate::scan::{scan_document, EntityKind};

/// One rewritten `@related` line.
#[derive(Clone, Debug, Serialize)]
pub struct ChangeRecord {
    /// One-based line number of the rewritten line.
    pub line: usize,
    /// Entity the annotation belongs to.
    pub entity: String,
    /// Kind of the entity.
    pub kind: EntityKind,
    /// Token list as it was written before curation.
    pub before: Vec<String>,
    /// Curated token list.
    pub after: Vec<String>,
}

/// Result of rewriting one document.
#[derive(Debug)]
pub struct RewriteOutcome {
    /// Full replacement text when at least one line changed, `None` when the
    /// document is already curated.
    pub content: Option<String>,
    /// The individual line changes, in document order.
    pub changes: Vec<ChangeRecord>,
}

impl RewriteOutcome {
    /// True when the document needs to be persisted.
    pub fn is_changed(&self) -> bool {
        self.content.is_some()
    }
}

/// Curate every `@related` annotation in `source` and build the replacement
/// document text.
pub fn rewrite_document(source: &str, curator: &RelatedCurator) -> RewriteOutcome {
    let sites = scan_document(source);
    let mut lines: Vec<String> = source.lines().map(str::to_string).collect();
    let mut changes = Vec::new();

    for site in sites {
        let curated = curator.curate(&site.entity, &site.tokens);
        let replacement = render_related_line(&curated);
        if lines[site.line_index] != replacement {
            changes.push(ChangeRecord {
                line: site.line_index + 1,
                entity: site.entity,
                kind: site.kind,
                before: site.tokens,
                after: curated,
            });
            lines[site.line_index] = replacement;
        }
    }

    if changes.is_empty() {
        return RewriteOutcome {
            content: None,
            changes,
        };
    }

    let eol = detect_line_ending(source);
    let mut content = lines.join(eol);
    content.push_str(eol);
    RewriteOutcome {
        content: Some(content),
        changes,
    }
}

/// Render the canonical `@related` annotation line for a curated list.
pub fn render_related_line(tokens: &[String]) -> String {
    format!(" * @related  {}", tokens.join(" "))
}

/// Detect the document's line-ending convention.
pub fn detect_line_ending(source: &str) -> &'static str {
    if source.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

#[cfg(test)]
#[path = "rewrite_tests.rs"]
mod tests;
