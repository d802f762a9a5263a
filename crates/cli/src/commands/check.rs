// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `surf check`: validate commands against their help.

use anyhow::Result;
use clap::Args;
use std::collections::BTreeSet;
use std::fmt::Write;
use std::path::Path;
use std::sync::Arc;

use surf_catalog::{load_catalog_dir, Catalog};
use surf_check::{check_all, default_jobs, Report, ReportEntry, ValidationRequest};
use surf_core::{CommandName, CommandRegistry};

use crate::color;
use crate::exit_error::{ExitError, RULE_FAILURES, USAGE};
use crate::output::{format_details, print_json, OutputFormat};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Commands to validate (default: every registered command)
    #[arg(value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Validate every registered command
    #[arg(long, conflicts_with = "commands")]
    pub all: bool,

    /// Require this parameter to be mandatory (repeatable; replaces the
    /// catalog's `primary` list, so it needs exactly one COMMAND)
    #[arg(long = "primary", value_name = "NAME", requires = "commands")]
    pub primary: Vec<String>,

    /// Number of parallel workers [env: SURF_JOBS] [default: one per CPU]
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,
}

pub async fn handle(args: CheckArgs, catalog_dir: &Path, format: OutputFormat) -> Result<()> {
    check_primary_scope(&args)?;

    // Unloadable files fail the run rather than being skipped
    let catalog = Arc::new(load_catalog_dir(catalog_dir, true)?);
    let requests = build_requests(&catalog, &args);
    if requests.is_empty() {
        return Err(ExitError::new(
            USAGE,
            format!("no commands found in {}", catalog_dir.display()),
        )
        .into());
    }

    let jobs = args
        .jobs
        .or_else(crate::env::jobs)
        .unwrap_or_else(default_jobs);
    let report = check_all(catalog.clone(), catalog, requests, jobs).await?;

    match format {
        OutputFormat::Text => print!("{}", render_report(&report, color::should_colorize())),
        OutputFormat::Json => print_json(&report)?,
    }

    if report.passed() {
        Ok(())
    } else {
        Err(ExitError::silent(RULE_FAILURES).into())
    }
}

/// `--primary` replaces the catalog list of exactly one named command.
fn check_primary_scope(args: &CheckArgs) -> Result<(), ExitError> {
    let named: BTreeSet<&str> = args.commands.iter().map(String::as_str).collect();
    if !args.primary.is_empty() && named.len() != 1 {
        return Err(ExitError::new(USAGE, "--primary applies to a single COMMAND"));
    }
    Ok(())
}

/// One request per selected command, primary names from `--primary` when
/// given, otherwise from the catalog.
fn build_requests(catalog: &Catalog, args: &CheckArgs) -> Vec<ValidationRequest> {
    let names: BTreeSet<CommandName> = if args.all || args.commands.is_empty() {
        catalog.commands().into_iter().collect()
    } else {
        args.commands
            .iter()
            .map(|c| CommandName::from(c.as_str()))
            .collect()
    };

    names
        .into_iter()
        .map(|name| {
            let primary = if args.primary.is_empty() {
                catalog.primary_parameters(&name)
            } else {
                args.primary.clone()
            };
            ValidationRequest::new(name).with_primary(primary)
        })
        .collect()
}

/// Text rendering: one verdict line per command, its failures indented
/// beneath, then a summary line.
fn render_report(report: &Report, colorize: bool) -> String {
    let verdict = |text: &str| {
        if colorize {
            color::apply_status(text)
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();
    let entries = report.entries();
    let mut start = 0;
    while start < entries.len() {
        let command = &entries[start].command;
        let end = entries[start..]
            .iter()
            .position(|e| &e.command != command)
            .map_or(entries.len(), |n| start + n);
        let group = &entries[start..end];
        let failed: Vec<&ReportEntry> = group.iter().filter(|e| !e.passed).collect();

        if failed.is_empty() {
            let _ = writeln!(out, "{}  {command} ({} checks)", verdict("passed"), group.len());
        } else {
            let _ = writeln!(
                out,
                "{}  {command} ({} of {} checks failed)",
                verdict("failed"),
                failed.len(),
                group.len()
            );
            for entry in failed {
                let _ = writeln!(out, "  {}", failure_line(entry));
            }
        }
        start = end;
    }

    let summary = report.summary();
    let _ = writeln!(
        out,
        "\n{} command(s), {} check(s), {} failure(s)",
        summary.commands, summary.checks, summary.failures
    );
    out
}

fn failure_line(entry: &ReportEntry) -> String {
    let subject = match &entry.parameter {
        Some(parameter) => format!("{} [{parameter}]", entry.rule),
        None => entry.rule.to_string(),
    };
    let details = match entry.detail("error") {
        Some(error) if entry.rule.is_lookup_failure() => error.to_string(),
        _ => format_details(&entry.details),
    };
    if details.is_empty() {
        subject
    } else {
        format!("{subject}: {details}")
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
