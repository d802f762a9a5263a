// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel validation of many commands.

use crate::{check, Report, ValidationRequest};
use std::num::NonZeroUsize;
use std::sync::Arc;
use surf_core::{CommandRegistry, HelpSource};
use thiserror::Error;
use tokio::sync::{AcquireError, Semaphore};
use tokio::task::{JoinError, JoinSet};

/// Registry shared across workers
pub type SharedRegistry = Arc<dyn CommandRegistry + Send + Sync>;
/// Help source shared across workers
pub type SharedHelp = Arc<dyn HelpSource + Send + Sync>;

/// Errors from a batch run. Rule failures are never errors.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("validation worker failed: {0}")]
    Worker(#[from] JoinError),
    #[error("worker pool closed: {0}")]
    Closed(#[from] AcquireError),
}

/// One worker per available processor, falling back to one.
pub fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Validate every request on at most `jobs` blocking workers.
///
/// Each request yields its own report; they are merged and sorted by command
/// name, so the result does not depend on completion order.
pub async fn check_all(
    registry: SharedRegistry,
    help: SharedHelp,
    requests: Vec<ValidationRequest>,
    jobs: usize,
) -> Result<Report, BatchError> {
    let jobs = jobs.max(1);
    let semaphore = Arc::new(Semaphore::new(jobs));
    let mut workers = JoinSet::new();

    tracing::debug!(commands = requests.len(), jobs, "starting validation batch");

    for request in requests {
        let permit = Arc::clone(&semaphore).acquire_owned().await?;
        let registry = Arc::clone(&registry);
        let help = Arc::clone(&help);
        workers.spawn_blocking(move || {
            let _permit = permit;
            check(registry.as_ref(), help.as_ref(), &request)
        });
    }

    let mut report = Report::new();
    while let Some(result) = workers.join_next().await {
        report.merge(result?);
    }
    report.sort_by_command();
    Ok(report)
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
