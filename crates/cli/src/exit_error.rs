// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors that carry a process exit code.

use std::fmt;

/// One or more rules failed
pub const RULE_FAILURES: i32 = 1;
/// Bad invocation or unusable catalog
pub const USAGE: i32 = 2;

/// An error that terminates the CLI with a specific exit code.
///
/// An empty message exits silently (the command already printed its output).
#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Exit with `code` without printing anything further.
    pub fn silent(code: i32) -> Self {
        Self::new(code, String::new())
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExitError {}
