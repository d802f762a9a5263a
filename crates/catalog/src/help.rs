// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help declarations: the documentation side of the catalog

use crate::labeled::{deserialize_flag_string, deserialize_labeled, Labeled};
use serde::{Deserialize, Serialize};
use surf_core::{HelpRecord, ParameterDoc, RelatedLink};

/// Documentation for one parameter as authored
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HelpParameterDef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
    /// "true" / "false"; a bare boolean is accepted and rendered as a string
    #[serde(default, deserialize_with = "deserialize_flag_string")]
    pub required: String,
    /// Kept verbatim, surrounding whitespace included
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<String>,
}

impl Labeled for HelpParameterDef {
    fn adopt_label(&mut self, label: String) {
        if self.name.is_empty() {
            self.name = label;
        }
    }
}

/// A help definition from the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HelpDef {
    /// Command name this help documents
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub description: String,
    /// Related links, in authored order
    #[serde(default, alias = "link", deserialize_with = "deserialize_labeled")]
    pub links: Vec<RelatedLink>,
    #[serde(default, alias = "parameter", deserialize_with = "deserialize_labeled")]
    pub parameters: Vec<HelpParameterDef>,
}

impl HelpDef {
    /// Project into the record handed to the checker.
    pub fn to_record(&self) -> HelpRecord {
        HelpRecord {
            synopsis: self.synopsis.clone(),
            description: self.description.clone(),
            related_links: self.links.clone(),
            parameters: self
                .parameters
                .iter()
                .map(|p| ParameterDoc {
                    name: p.name.clone(),
                    text: p.text.clone(),
                    required: p.required.clone(),
                    declared_type: p.declared_type.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
