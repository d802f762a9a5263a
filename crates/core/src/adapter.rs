// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter seams: where parameter contracts and help records come from.

use crate::{CommandName, HelpRecord, ParameterDescriptor};
use thiserror::Error;

/// Lookup failures. Fatal for one command's validation, never for a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("command not found: {0}")]
    CommandNotFound(CommandName),
    #[error("no help found for command: {0}")]
    HelpNotFound(CommandName),
}

/// Source of declared parameter metadata.
pub trait CommandRegistry {
    /// Every registered command, sorted by name.
    fn commands(&self) -> Vec<CommandName>;

    /// Parameters of `command`, deduplicated by case-folded name and sorted.
    fn list_parameters(&self, command: &CommandName)
        -> Result<Vec<ParameterDescriptor>, LookupError>;
}

/// Source of help records.
pub trait HelpSource {
    /// Help for `command`. Declared type strings are returned as authored.
    fn get_help(&self, command: &CommandName) -> Result<HelpRecord, LookupError>;
}

/// Sort descriptors by case-folded name, then by original spelling.
pub fn sort_parameters(params: &mut [ParameterDescriptor]) {
    params.sort_by(|a, b| {
        a.folded_name()
            .cmp(&b.folded_name())
            .then_with(|| a.name.cmp(&b.name))
    });
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod tests;
