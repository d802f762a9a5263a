// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

// --- Catalog ---

/// SURF_CATALOG_DIR, when set and non-empty
pub fn catalog_dir() -> Option<PathBuf> {
    std::env::var("SURF_CATALOG_DIR")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

// --- Workers ---

/// SURF_JOBS, ignored unless it parses as a positive integer
pub fn jobs() -> Option<usize> {
    std::env::var("SURF_JOBS")
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
}

// --- Logging ---

/// SURF_LOG filter directives (e.g. "debug", "surf_catalog=debug")
pub fn log_filter() -> Option<String> {
    std::env::var("SURF_LOG").ok().filter(|s| !s.is_empty())
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
