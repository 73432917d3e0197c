//! Scanning of documentation comment blocks for curation sites.
//!
//! The scanner is line-oriented and pure: it walks document text looking for
//! declaration tags (`@function`, `@struct`, `@enum`, `@typedef`, `@macro`)
//! and `@related` annotation lines. The most recently seen declaration names
//! the "current entity"; each `@related` line under a current entity yields a
//! [`RelatedSite`]. A `@related` line appearing before any declaration is
//! ignored.

use serde::Serialize;

/// The kind of documented entity a declaration tag names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A `@function` declaration.
    Function,
    /// A `@struct` declaration.
    Struct,
    /// An `@enum` declaration.
    Enum,
    /// A `@typedef` declaration.
    Typedef,
    /// A `@macro` declaration.
    Macro,
}

impl EntityKind {
    /// Human-readable tag name, matching the declaration syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Typedef => "typedef",
            Self::Macro => "macro",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const DECLARATION_TAGS: [(&str, EntityKind); 5] = [
    ("@function", EntityKind::Function),
    ("@struct", EntityKind::Struct),
    ("@enum", EntityKind::Enum),
    ("@typedef", EntityKind::Typedef),
    ("@macro", EntityKind::Macro),
];

const RELATED_TAG: &str = "* @related";

/// One `@related` annotation found under a documented entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelatedSite {
    /// Zero-based index of the `@related` line within the document.
    pub line_index: usize,
    /// Name of the entity the annotation belongs to.
    pub entity: String,
    /// Kind of the entity.
    pub kind: EntityKind,
    /// Candidate tokens as currently written, in order.
    pub tokens: Vec<String>,
}

/// Extract all curation sites from a document.
pub fn scan_document(source: &str) -> Vec<RelatedSite> {
    let mut sites = Vec::new();
    let mut current: Option<(String, EntityKind)> = None;

    for (line_index, line) in source.lines().enumerate() {
        if let Some(declaration) = declaration_on(line) {
            current = Some(declaration);
        }
        if let Some(tokens) = related_tokens_on(line) {
            if let Some((entity, kind)) = &current {
                sites.push(RelatedSite {
                    line_index,
                    entity: entity.clone(),
                    kind: *kind,
                    tokens,
                });
            }
        }
    }

    sites
}

/// Parse a declaration tag on a comment line, e.g. `* @function cf_make_app`.
fn declaration_on(line: &str) -> Option<(String, EntityKind)> {
    let mut remainder = line;
    while let Some(position) = remainder.find("* @") {
        let tagged = &remainder[position + 2..];
        for (tag, kind) in DECLARATION_TAGS {
            if let Some(rest) = tagged.strip_prefix(tag) {
                // The tag must be followed by whitespace, then an identifier.
                if !rest.starts_with(|ch: char| ch.is_whitespace()) {
                    continue;
                }
                let name = leading_identifier(rest.trim_start());
                if !name.is_empty() {
                    return Some((name.to_string(), kind));
                }
            }
        }
        remainder = &remainder[position + 3..];
    }
    None
}

/// Parse the candidate tokens from a `* @related` line.
fn related_tokens_on(line: &str) -> Option<Vec<String>> {
    let position = line.find(RELATED_TAG)?;
    let rest = &line[position + RELATED_TAG.len()..];
    if !rest.starts_with(|ch: char| ch.is_whitespace()) {
        return None;
    }
    Some(rest.split_whitespace().map(str::to_string).collect())
}

fn leading_identifier(text: &str) -> &str {
    let end = text
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_alphanumeric() && *ch != '_')
        .map(|(index, _)| index)
        .unwrap_or(text.len());
    &text[..end]
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
