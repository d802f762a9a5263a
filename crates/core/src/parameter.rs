// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry-side parameter metadata

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the implicit parameter set for parameters declared outside any
/// named set.
pub const ALL_PARAMETER_SETS: &str = "__AllParameterSets";

/// One parameter of one command, as the registry declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    /// Canonical display name of the value type (`String`, `Int32`, ...)
    pub type_name: String,
    /// Mandatory in at least one parameter set
    pub is_mandatory: bool,
    /// Parameter set name → mandatory in that set, in discovery order
    #[serde(default)]
    pub parameter_sets: IndexMap<String, bool>,
}

impl ParameterDescriptor {
    /// Create a descriptor that belongs only to the implicit all-sets set.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, mandatory: bool) -> Self {
        Self::in_set(name, type_name, ALL_PARAMETER_SETS, mandatory)
    }

    /// Create a descriptor first seen in `set`.
    pub fn in_set(
        name: impl Into<String>,
        type_name: impl Into<String>,
        set: impl Into<String>,
        mandatory: bool,
    ) -> Self {
        let mut parameter_sets = IndexMap::new();
        parameter_sets.insert(set.into(), mandatory);
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_mandatory: mandatory,
            parameter_sets,
        }
    }

    /// Record membership in another parameter set.
    ///
    /// Mandatoriness collapses to "mandatory in any set". Re-adding a set
    /// that is already present keeps the first recorded value.
    pub fn add_set(&mut self, set: impl Into<String>, mandatory: bool) {
        self.parameter_sets.entry(set.into()).or_insert(mandatory);
        self.is_mandatory = self.parameter_sets.values().any(|m| *m);
    }

    /// Whether this parameter is mandatory in the named set.
    pub fn is_mandatory_in(&self, set: &str) -> bool {
        self.parameter_sets.get(set).copied().unwrap_or(false)
    }

    /// Case-folded name used for matching and ordering.
    pub fn folded_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Whether `other` names this parameter (case-insensitive).
    pub fn is_named(&self, other: &str) -> bool {
        self.folded_name() == other.to_lowercase()
    }
}

#[cfg(test)]
#[path = "parameter_tests.rs"]
mod tests;
