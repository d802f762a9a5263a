// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `surf list`: commands known to the catalog.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

use surf_catalog::{load_catalog_dir, Catalog};
use surf_core::{exclude, EXCLUDED_PARAMETERS};

use crate::output::{print_json, OutputFormat};
use crate::table::{Column, Table};

/// Whether a name has a declaration, help, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HelpState {
    Documented,
    Undocumented,
    /// Help exists for a command the registry does not declare
    Orphaned,
}

impl HelpState {
    fn as_str(&self) -> &'static str {
        match self {
            HelpState::Documented => "documented",
            HelpState::Undocumented => "undocumented",
            HelpState::Orphaned => "orphaned",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListEntry {
    pub command: String,
    /// Declared parameters, common parameters excluded
    pub parameters: usize,
    pub parameter_sets: usize,
    pub primary: Vec<String>,
    pub help: HelpState,
}

pub fn handle(catalog_dir: &Path, format: OutputFormat) -> Result<()> {
    let catalog = load_catalog_dir(catalog_dir, false)?;
    if catalog.is_empty() {
        eprintln!("No commands found in {}", catalog_dir.display());
        return Ok(());
    }
    let entries = list_entries(&catalog);

    match format {
        OutputFormat::Text => {
            let mut table = Table::new(vec![
                Column::left("COMMAND"),
                Column::right("PARAMS"),
                Column::right("SETS"),
                Column::left("PRIMARY").with_max(40),
                Column::status("HELP"),
            ]);
            for entry in &entries {
                let primary = if entry.primary.is_empty() {
                    "-".to_string()
                } else {
                    entry.primary.join(", ")
                };
                table.row(vec![
                    entry.command.clone(),
                    entry.parameters.to_string(),
                    entry.parameter_sets.to_string(),
                    primary,
                    entry.help.as_str().to_string(),
                ]);
            }
            table.render(&mut std::io::stdout());
        }
        OutputFormat::Json => print_json(&entries)?,
    }
    Ok(())
}

/// Every command or help name in the catalog, sorted.
fn list_entries(catalog: &Catalog) -> Vec<ListEntry> {
    let names: BTreeSet<&String> = catalog.commands.keys().chain(catalog.help.keys()).collect();
    names
        .into_iter()
        .map(|name| {
            let command = catalog.get_command(name);
            let help = match (command.is_some(), catalog.get_help_def(name).is_some()) {
                (true, true) => HelpState::Documented,
                (true, false) => HelpState::Undocumented,
                (false, _) => HelpState::Orphaned,
            };
            ListEntry {
                command: name.clone(),
                parameters: command
                    .map(|c| exclude(&c.descriptors(), EXCLUDED_PARAMETERS).len())
                    .unwrap_or(0),
                parameter_sets: command.map(|c| c.parameter_sets.len()).unwrap_or(0),
                primary: command.map(|c| c.primary.clone()).unwrap_or_default(),
                help,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
