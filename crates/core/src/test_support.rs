// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::adapter::sort_parameters;
use crate::{
    CommandName, CommandRegistry, HelpRecord, HelpSource, LookupError, ParameterDescriptor,
    ParameterDoc, RelatedLink,
};
use std::collections::BTreeMap;

// ── Record builders ─────────────────────────────────────────────────────────

/// A documentation entry for one parameter.
pub fn param_doc(name: &str, required: &str, declared_type: &str) -> ParameterDoc {
    ParameterDoc {
        name: name.to_string(),
        text: format!("The {name} parameter."),
        required: required.to_string(),
        declared_type: Some(declared_type.to_string()),
    }
}

/// A fully authored help record documenting `params`.
pub fn help_record(params: &[ParameterDoc]) -> HelpRecord {
    HelpRecord {
        synopsis: "Does a thing.".to_string(),
        description: "Does a thing, thoroughly.".to_string(),
        related_links: vec![RelatedLink {
            text: "Online Version".to_string(),
            uri: "https://example.invalid/help".to_string(),
        }],
        parameters: params.to_vec(),
    }
}

// ── In-memory adapters ──────────────────────────────────────────────────────

/// Both adapters backed by plain maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    pub commands: BTreeMap<CommandName, Vec<ParameterDescriptor>>,
    pub help: BTreeMap<CommandName, HelpRecord>,
}

impl MemoryCatalog {
    pub fn with_command(mut self, name: &str, params: Vec<ParameterDescriptor>) -> Self {
        self.commands.insert(CommandName::from(name), params);
        self
    }

    pub fn with_help(mut self, name: &str, help: HelpRecord) -> Self {
        self.help.insert(CommandName::from(name), help);
        self
    }
}

impl CommandRegistry for MemoryCatalog {
    fn commands(&self) -> Vec<CommandName> {
        self.commands.keys().cloned().collect()
    }

    fn list_parameters(
        &self,
        command: &CommandName,
    ) -> Result<Vec<ParameterDescriptor>, LookupError> {
        let mut params = self
            .commands
            .get(command)
            .cloned()
            .ok_or_else(|| LookupError::CommandNotFound(command.clone()))?;
        sort_parameters(&mut params);
        Ok(params)
    }
}

impl HelpSource for MemoryCatalog {
    fn get_help(&self, command: &CommandName) -> Result<HelpRecord, LookupError> {
        self.help
            .get(command)
            .cloned()
            .ok_or_else(|| LookupError::HelpNotFound(command.clone()))
    }
}
