// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Pretty-print a value as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render failure details on one line.
///
/// `expected`/`actual` pairs read as `expected "x", actual "y"`; a `reason`
/// leads; any other keys follow as `key: value`.
pub fn format_details(details: &BTreeMap<String, String>) -> String {
    let pair = details.get("expected").zip(details.get("actual"));
    let mut parts = Vec::new();
    if let Some(reason) = details.get("reason") {
        parts.push(reason.clone());
    }
    if let Some((expected, actual)) = pair {
        parts.push(format!("expected {expected:?}, actual {actual:?}"));
    }
    for (key, value) in details {
        let covered = key == "reason" || (pair.is_some() && (key == "expected" || key == "actual"));
        if !covered {
            parts.push(format!("{key}: {value}"));
        }
    }
    parts.join("; ")
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
