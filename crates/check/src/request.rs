// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use surf_core::CommandName;

/// What to validate: one command plus the parameters expected to be primary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub command: CommandName,
    #[serde(default)]
    pub primary: BTreeSet<String>,
}

impl ValidationRequest {
    pub fn new(command: impl Into<CommandName>) -> Self {
        Self {
            command: command.into(),
            primary: BTreeSet::new(),
        }
    }

    /// Add primary parameter names.
    ///
    /// Names match parameters case-insensitively, so a name that differs from
    /// one already present only by case is dropped (first spelling wins).
    pub fn with_primary<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            let folded = name.to_lowercase();
            if !self.primary.iter().any(|p| p.to_lowercase() == folded) {
                self.primary.insert(name);
            }
        }
        self
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
