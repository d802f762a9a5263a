// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation results

use crate::Rule;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use surf_core::CommandName;

/// The outcome of one rule for one command (and parameter, where the rule
/// is per-parameter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub command: CommandName,
    pub rule: Rule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    pub passed: bool,
    /// Context for failures, e.g. `expected` / `actual`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl ReportEntry {
    pub fn new(command: &CommandName, rule: Rule, passed: bool) -> Self {
        Self {
            command: command.clone(),
            rule,
            parameter: None,
            passed,
            details: BTreeMap::new(),
        }
    }

    pub fn for_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Attach `expected` and `actual` values.
    pub fn expected_actual(self, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        self.with_detail("expected", expected)
            .with_detail("actual", actual)
    }

    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }
}

/// Aggregate counts over a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub commands: usize,
    pub checks: usize,
    pub failures: usize,
}

/// Ordered report entries for one or more commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    /// Append every entry of `other`.
    pub fn merge(&mut self, other: Report) {
        self.entries.extend(other.entries);
    }

    /// Stable sort by command name; rule order within a command is kept.
    pub fn sort_by_command(&mut self) {
        self.entries.sort_by(|a, b| a.command.cmp(&b.command));
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// The gate: true when no entry failed.
    pub fn passed(&self) -> bool {
        self.entries.iter().all(|e| e.passed)
    }

    pub fn violations(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| !e.passed)
    }

    /// Entries for one command, in evaluation order.
    pub fn for_command<'a>(&'a self, command: &'a str) -> impl Iterator<Item = &'a ReportEntry> {
        self.entries
            .iter()
            .filter(move |e| e.command.as_str() == command)
    }

    pub fn summary(&self) -> Summary {
        let commands: BTreeSet<&CommandName> = self.entries.iter().map(|e| &e.command).collect();
        Summary {
            commands: commands.len(),
            checks: self.entries.len(),
            failures: self.violations().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ReportEntry> for Report {
    fn from_iter<I: IntoIterator<Item = ReportEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Report", 3)?;
        state.serialize_field("passed", &self.passed())?;
        state.serialize_field("summary", &self.summary())?;
        state.serialize_field("entries", &self.entries)?;
        state.end()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
