// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog parsing (TOML, HCL, and JSON)

use crate::validate::{validate_command, validate_help};
use crate::{CommandDef, HelpDef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use surf_core::{
    CommandName, CommandRegistry, HelpRecord, HelpSource, LookupError, ParameterDescriptor,
};
use thiserror::Error;

/// Catalog file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Hcl,
    Json,
}

impl Format {
    /// Pick a format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "toml" => Some(Format::Toml),
            "hcl" => Some(Format::Hcl),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Errors that can occur during catalog parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid format for {location}: {message}")]
    InvalidFormat { location: String, message: String },
}

/// A parsed catalog: command declarations plus help records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, alias = "command")]
    pub commands: BTreeMap<String, CommandDef>,
    #[serde(default, alias = "help")]
    pub help: BTreeMap<String, HelpDef>,
}

impl Catalog {
    /// Get a command definition by name
    pub fn get_command(&self, name: &str) -> Option<&CommandDef> {
        self.commands.get(name)
    }

    /// Get a help definition by name
    pub fn get_help_def(&self, name: &str) -> Option<&HelpDef> {
        self.help.get(name)
    }

    /// Declared primary parameters of a command (empty when unknown)
    pub fn primary_parameters(&self, name: &str) -> Vec<String> {
        self.get_command(name)
            .map(|cmd| cmd.primary.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.help.is_empty()
    }
}

impl CommandRegistry for Catalog {
    fn commands(&self) -> Vec<CommandName> {
        self.commands.keys().map(|k| CommandName::from(k.as_str())).collect()
    }

    fn list_parameters(
        &self,
        command: &CommandName,
    ) -> Result<Vec<ParameterDescriptor>, LookupError> {
        self.get_command(command)
            .map(CommandDef::descriptors)
            .ok_or_else(|| LookupError::CommandNotFound(command.clone()))
    }
}

impl HelpSource for Catalog {
    fn get_help(&self, command: &CommandName) -> Result<HelpRecord, LookupError> {
        self.get_help_def(command)
            .map(HelpDef::to_record)
            .ok_or_else(|| LookupError::HelpNotFound(command.clone()))
    }
}

/// Parse a catalog from TOML content (convenience wrapper)
pub fn parse_catalog(content: &str) -> Result<Catalog, ParseError> {
    parse_catalog_with_format(content, Format::Toml)
}

/// Parse a catalog from the given content in the specified format
pub fn parse_catalog_with_format(content: &str, format: Format) -> Result<Catalog, ParseError> {
    // 1. Serde does the heavy lifting
    let mut catalog: Catalog = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Hcl => hcl::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };

    // 2. Name fixup: inject map keys into .name fields
    for (name, cmd) in &mut catalog.commands {
        cmd.name = name.clone();
    }
    for (name, help) in &mut catalog.help {
        help.name = name.clone();
    }

    // 3. Validation: names unique after case-folding, required fields present
    for cmd in catalog.commands.values() {
        validate_command(cmd)?;
    }
    for help in catalog.help.values() {
        validate_help(help)?;
    }

    Ok(catalog)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
