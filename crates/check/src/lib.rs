// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! surf-check: compares a command's parameter contract against its help.
//!
//! [`check`] validates one command; [`batch::check_all`] fans a list of
//! requests out over a bounded pool of blocking workers.

pub mod batch;
mod checker;
mod report;
mod request;
mod rule;

pub use batch::{check_all, default_jobs, BatchError};
pub use checker::check;
pub use report::{Report, ReportEntry, Summary};
pub use request::ValidationRequest;
pub use rule::Rule;
