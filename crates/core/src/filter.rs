// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Common-parameter filtering.
//!
//! The host framework injects the same switches into every command (verbosity,
//! error handling, confirmation, ...). They are not part of a command's
//! authored contract, so both the registry list and the documentation list
//! drop them before comparison.

use crate::{ParameterDescriptor, ParameterDoc};

/// Framework-injected parameters excluded from comparison.
pub const EXCLUDED_PARAMETERS: &[&str] = &[
    "Verbose",
    "Debug",
    "ErrorAction",
    "ErrorVariable",
    "InformationAction",
    "InformationVariable",
    "OutBuffer",
    "OutVariable",
    "PipelineVariable",
    "WarningAction",
    "WarningVariable",
    "Confirm",
    "WhatIf",
];

/// Anything filterable by parameter name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for ParameterDescriptor {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for ParameterDoc {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl Named for &str {
    fn name(&self) -> &str {
        self
    }
}

/// Whether `name` is in `excluded` (case-insensitive).
pub fn is_excluded(name: &str, excluded: &[&str]) -> bool {
    let folded = name.to_lowercase();
    excluded.iter().any(|e| e.to_lowercase() == folded)
}

/// Drop every item whose name is in `excluded`, preserving order.
pub fn exclude<T: Named + Clone>(items: &[T], excluded: &[&str]) -> Vec<T> {
    items
        .iter()
        .filter(|item| !is_excluded(item.name(), excluded))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
