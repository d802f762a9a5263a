// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `surf show`: one command's parameters next to its documentation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;

use surf_catalog::load_catalog_dir;
use surf_core::{
    is_excluded, CommandName, CommandRegistry, HelpRecord, HelpSource, ParameterDescriptor,
    ParameterDoc, EXCLUDED_PARAMETERS,
};

use crate::color;
use crate::exit_error::{ExitError, USAGE};
use crate::output::{print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Command name (e.g. "Invoke-Build")
    pub command: String,
}

#[derive(Debug, Serialize)]
struct ShowJson<'a> {
    command: &'a CommandName,
    primary: Vec<String>,
    parameters: Option<&'a [ParameterDescriptor]>,
    help: Option<&'a HelpRecord>,
}

/// One parameter as seen from both sides.
#[derive(Debug, PartialEq)]
struct Row {
    name: String,
    type_name: String,
    mandatory: String,
    sets: String,
    doc_type: String,
    required: String,
    note: &'static str,
}

pub fn handle(args: ShowArgs, catalog_dir: &Path, format: OutputFormat) -> Result<()> {
    let catalog = load_catalog_dir(catalog_dir, false)?;
    let name = CommandName::from(args.command.as_str());

    let params = catalog.list_parameters(&name).ok();
    let help = catalog.get_help(&name).ok();
    if params.is_none() && help.is_none() {
        return Err(ExitError::new(USAGE, format!("unknown command: {name}")).into());
    }
    let primary = catalog.primary_parameters(&name);

    match format {
        OutputFormat::Text => {
            println!("{}", color::header(name.as_str()));
            if let Some(help) = &help {
                print_help_summary(help);
            } else {
                println!("  {}", color::context("(no help)"));
            }
            if !primary.is_empty() {
                println!("  Primary:      {}", primary.join(", "));
            }
            println!();

            let rows = side_by_side(params.as_deref().unwrap_or_default(), help.as_ref());
            let mut table = Table::new(vec![
                Column::left("PARAMETER"),
                Column::left("TYPE"),
                Column::left("MANDATORY"),
                Column::muted("SETS").with_max(48),
                Column::left("DOC TYPE"),
                Column::left("REQUIRED"),
                Column::status("NOTE"),
            ]);
            for row in rows {
                table.row(vec![
                    row.name,
                    row.type_name,
                    row.mandatory,
                    row.sets,
                    row.doc_type,
                    row.required,
                    row.note.to_string(),
                ]);
            }
            table.render(&mut std::io::stdout());
        }
        OutputFormat::Json => print_json(&ShowJson {
            command: &name,
            primary,
            parameters: params.as_deref(),
            help: help.as_ref(),
        })?,
    }
    Ok(())
}

fn print_help_summary(help: &HelpRecord) {
    println!("  Synopsis:     {}", or_dash(&help.synopsis));
    println!("  Description:  {}", or_dash(first_line(&help.description)));
    let links: Vec<String> = help
        .related_links
        .iter()
        .map(|link| {
            if link.has_target() {
                format!("{} <{}>", link.text, link.uri)
            } else {
                link.text.clone()
            }
        })
        .collect();
    println!("  Links:        {}", or_dash(&links.join("; ")));
}

fn first_line(text: &str) -> &str {
    text.trim().lines().next().unwrap_or("")
}

fn or_dash(text: &str) -> &str {
    if text.trim().is_empty() {
        "-"
    } else {
        text
    }
}

/// Registry parameters in sorted order, then documentation-only entries in
/// authored order.
fn side_by_side(params: &[ParameterDescriptor], help: Option<&HelpRecord>) -> Vec<Row> {
    let docs: &[ParameterDoc] = help.map(|h| h.parameters.as_slice()).unwrap_or_default();

    let mut rows: Vec<Row> = params
        .iter()
        .map(|param| {
            let doc = docs.iter().find(|d| param.is_named(&d.name));
            let note = if is_excluded(&param.name, EXCLUDED_PARAMETERS) {
                "common"
            } else if doc.is_none() {
                "undocumented"
            } else {
                ""
            };
            Row {
                name: param.name.clone(),
                type_name: param.type_name.clone(),
                mandatory: param.is_mandatory.to_string(),
                sets: format_sets(param),
                doc_type: doc.map_or_else(|| "-".to_string(), doc_type),
                required: doc.map_or_else(|| "-".to_string(), |d| or_dash(&d.required).to_string()),
                note,
            }
        })
        .collect();

    for doc in docs {
        if params.iter().any(|p| p.is_named(&doc.name)) {
            continue;
        }
        rows.push(Row {
            name: doc.name.clone(),
            type_name: "-".to_string(),
            mandatory: "-".to_string(),
            sets: "-".to_string(),
            doc_type: doc_type(doc),
            required: or_dash(&doc.required).to_string(),
            note: if is_excluded(&doc.name, EXCLUDED_PARAMETERS) {
                "common"
            } else {
                "orphaned"
            },
        });
    }
    rows
}

/// Set names in discovery order; mandatory membership is starred.
fn format_sets(param: &ParameterDescriptor) -> String {
    param
        .parameter_sets
        .iter()
        .map(|(set, mandatory)| {
            if *mandatory {
                format!("{set}*")
            } else {
                set.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Declared type, quoted when surrounding whitespace would otherwise hide.
fn doc_type(doc: &ParameterDoc) -> String {
    match doc.declared_type.as_deref() {
        None => "-".to_string(),
        Some(t) if t.trim() == t && !t.is_empty() => t.to_string(),
        Some(t) => format!("{t:?}"),
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
