// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Documentation-side help records

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Literal markers left behind when help is generated but never authored.
pub const PLACEHOLDER_MARKERS: &[&str] = &["{{ Fill in the Synopsis }}", "[<<Add description here>>]"];

// Case-insensitive, tolerant of spacing inside the delimiters
#[allow(clippy::expect_used)]
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\{\{\s*fill\s+in\s+the\s+synopsis\s*\}\}|\[<<\s*add\s+description\s+here\s*>>\]")
        .expect("constant regex pattern is valid")
});

/// Whether `text` contains an auto-generation placeholder marker.
pub fn is_placeholder(text: &str) -> bool {
    PLACEHOLDER_PATTERN.is_match(text)
}

/// A navigation reference from a help record (e.g. "Online Version").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLink {
    #[serde(default)]
    pub text: String,
    /// Navigation target; may be empty for text-only references
    #[serde(default)]
    pub uri: String,
}

impl RelatedLink {
    /// Whether the link points somewhere.
    pub fn has_target(&self) -> bool {
        !self.uri.trim().is_empty()
    }
}

/// Documentation for one parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDoc {
    #[serde(default)]
    pub name: String,
    /// Prose shown to the reader
    #[serde(default)]
    pub text: String,
    /// String-rendered boolean, compared case-insensitively
    #[serde(default)]
    pub required: String,
    /// Declared type exactly as authored, surrounding whitespace included
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<String>,
}

/// Help for one command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpRecord {
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub related_links: Vec<RelatedLink>,
    #[serde(default)]
    pub parameters: Vec<ParameterDoc>,
}

impl HelpRecord {
    /// Find a parameter's documentation by name (case-insensitive).
    pub fn parameter(&self, name: &str) -> Option<&ParameterDoc> {
        let folded = name.to_lowercase();
        self.parameters
            .iter()
            .find(|doc| doc.name.to_lowercase() == folded)
    }

    /// The first related link, if any.
    pub fn first_link(&self) -> Option<&RelatedLink> {
        self.related_links.first()
    }
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
