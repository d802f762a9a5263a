// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog file discovery

use crate::parser::Format;
use crate::{parse_catalog_with_format, Catalog};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from catalog directory scanning
#[derive(Debug, Error)]
pub enum FindError {
    #[error("{kind} '{name}' defined in multiple catalog files: {first} and {second}")]
    Duplicate {
        kind: &'static str,
        name: String,
        first: String,
        second: String,
    },
    #[error("{count} catalog file(s) could not be loaded:\n{details}")]
    Skipped { count: usize, details: String },
    #[error("catalog directory not found: {0}")]
    NotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Load and merge every catalog file under `dir`.
///
/// Unreadable or invalid files are skipped with a warning, unless `strict`
/// is set, in which case they are reported together as
/// [`FindError::Skipped`]. A command or help record defined in more than one
/// file is always an error.
pub fn load_catalog_dir(dir: &Path, strict: bool) -> Result<Catalog, FindError> {
    if !dir.is_dir() {
        return Err(FindError::NotFound(dir.to_path_buf()));
    }
    let files = collect_catalog_files(dir)?;
    let mut merged = Catalog::default();
    let mut command_origin: Vec<(String, PathBuf)> = Vec::new();
    let mut help_origin: Vec<(String, PathBuf)> = Vec::new();
    let mut skipped: Vec<(PathBuf, String)> = Vec::new();

    for (path, format) in files {
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable catalog file");
                skipped.push((path, e.to_string()));
                continue;
            }
        };
        let catalog = match parse_catalog_with_format(&content, format) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping invalid catalog file");
                skipped.push((path, e.to_string()));
                continue;
            }
        };
        tracing::debug!(
            path = %path.display(),
            commands = catalog.commands.len(),
            help = catalog.help.len(),
            "loaded catalog file"
        );

        for (name, cmd) in catalog.commands {
            check_duplicate("command", &name, &path, &command_origin)?;
            command_origin.push((name.clone(), path.clone()));
            merged.commands.insert(name, cmd);
        }
        for (name, help) in catalog.help {
            check_duplicate("help", &name, &path, &help_origin)?;
            help_origin.push((name.clone(), path.clone()));
            merged.help.insert(name, help);
        }
    }

    if strict && !skipped.is_empty() {
        let details = skipped
            .iter()
            .map(|(p, e)| format!("  {}: {e}", p.display()))
            .collect::<Vec<_>>()
            .join("\n");
        return Err(FindError::Skipped {
            count: skipped.len(),
            details,
        });
    }

    Ok(merged)
}

fn check_duplicate(
    kind: &'static str,
    name: &str,
    path: &Path,
    seen: &[(String, PathBuf)],
) -> Result<(), FindError> {
    if let Some((_, first)) = seen.iter().find(|(n, _)| n == name) {
        return Err(FindError::Duplicate {
            kind,
            name: name.to_string(),
            first: first.display().to_string(),
            second: path.display().to_string(),
        });
    }
    Ok(())
}

/// Recursively collect all catalog files (`.hcl`, `.toml`, `.json`) under
/// `dir`, sorted by path so merge order is deterministic.
pub fn collect_catalog_files(dir: &Path) -> Result<Vec<(PathBuf, Format)>, std::io::Error> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in std::fs::read_dir(&current)?.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if let Some(format) = format_for_path(&path) {
                files.push((path, format));
            }
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

fn format_for_path(path: &Path) -> Option<Format> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(Format::from_extension)
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
