// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command declarations: the registry side of the catalog

use crate::labeled::{deserialize_labeled, Labeled};
use serde::{Deserialize, Serialize};
use surf_core::{sort_parameters, ParameterDescriptor, ALL_PARAMETER_SETS};

/// One parameter as declared inside a command or a parameter set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterDecl {
    #[serde(default)]
    pub name: String,
    /// Canonical type name (e.g. "String", "SwitchParameter")
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub mandatory: bool,
}

impl Labeled for ParameterDecl {
    fn adopt_label(&mut self, label: String) {
        if self.name.is_empty() {
            self.name = label;
        }
    }
}

/// A named, alternative invocation form of a command
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParameterSetDecl {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "parameter", deserialize_with = "deserialize_labeled")]
    pub parameters: Vec<ParameterDecl>,
}

impl Labeled for ParameterSetDecl {
    fn adopt_label(&mut self, label: String) {
        if self.name.is_empty() {
            self.name = label;
        }
    }
}

/// A command definition from the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommandDef {
    /// Command name (e.g., "Invoke-Build")
    #[serde(default)]
    pub name: String,
    /// Parameters the caller is expected to supply first; each must be
    /// mandatory in at least one parameter set
    #[serde(default)]
    pub primary: Vec<String>,
    /// Parameters shared by every parameter set
    #[serde(default, alias = "parameter", deserialize_with = "deserialize_labeled")]
    pub parameters: Vec<ParameterDecl>,
    /// Named parameter sets, in declaration order
    #[serde(default, alias = "parameter_set", deserialize_with = "deserialize_labeled")]
    pub parameter_sets: Vec<ParameterSetDecl>,
}

impl CommandDef {
    /// Every (set, parameter) occurrence in traversal order: shared
    /// parameters first, then each named set in declaration order.
    fn occurrences(&self) -> impl Iterator<Item = (&str, &ParameterDecl)> {
        let shared = self.parameters.iter().map(|p| (ALL_PARAMETER_SETS, p));
        let per_set = self
            .parameter_sets
            .iter()
            .flat_map(|set| set.parameters.iter().map(move |p| (set.name.as_str(), p)));
        shared.chain(per_set)
    }

    /// Flatten declarations into one descriptor per parameter.
    ///
    /// The first occurrence of a name (case-insensitive) fixes its spelling
    /// and type; later occurrences only add parameter-set membership.
    /// Sorted by case-folded name.
    pub fn descriptors(&self) -> Vec<ParameterDescriptor> {
        let mut out: Vec<ParameterDescriptor> = Vec::new();
        for (set, decl) in self.occurrences() {
            match out.iter_mut().find(|d| d.is_named(&decl.name)) {
                Some(existing) => {
                    if existing.type_name != decl.type_name {
                        tracing::warn!(
                            command = %self.name,
                            parameter = %existing.name,
                            kept = %existing.type_name,
                            ignored = %decl.type_name,
                            set,
                            "conflicting parameter type across parameter sets",
                        );
                    }
                    existing.add_set(set, decl.mandatory);
                }
                None => out.push(ParameterDescriptor::in_set(
                    &decl.name,
                    &decl.type_name,
                    set,
                    decl.mandatory,
                )),
            }
        }
        sort_parameters(&mut out);
        out
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
