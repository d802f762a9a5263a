// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! surf - command-surface consistency validator

mod color;
mod commands;
mod env;
mod exit_error;
mod output;
mod table;

use output::OutputFormat;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{check, list, show};
use exit_error::{ExitError, USAGE};
use std::path::{Path, PathBuf};

/// Directory name that marks a catalog root when searching upward
const CATALOG_DIR_NAME: &str = ".surf";

#[derive(Parser, Debug)]
#[command(
    name = "surf",
    version,
    about = "Check that commands and their help agree",
    styles = color::styles()
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Catalog directory [env: SURF_CATALOG_DIR] [default: nearest .surf/]
    #[arg(short = 'C', long = "catalog", value_name = "DIR", global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate commands against their help
    Check(check::CheckArgs),
    /// List commands in the catalog
    List,
    /// Show one command's parameters next to its documentation
    Show(show::ShowArgs),
}

#[tokio::main]
async fn main() {
    setup_logging();
    if let Err(e) = run().await {
        let code = e
            .downcast_ref::<ExitError>()
            .map_or(USAGE, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Log to stderr, filtered by SURF_LOG (default "warn").
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = crate::env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped; otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand: print help and exit 0
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let catalog_dir = resolve_catalog_dir(cli.catalog)?;
    tracing::debug!(catalog = %catalog_dir.display(), "using catalog");

    match command {
        Commands::Check(args) => check::handle(args, &catalog_dir, format).await?,
        Commands::List => list::handle(&catalog_dir, format)?,
        Commands::Show(args) => show::handle(args, &catalog_dir, format)?,
    }

    Ok(())
}

/// `--catalog` > SURF_CATALOG_DIR > nearest ancestor holding `.surf/`.
fn resolve_catalog_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag.or_else(crate::env::catalog_dir) {
        return Ok(dir);
    }
    let cwd = std::env::current_dir()?;
    find_catalog_root(&cwd).ok_or_else(|| {
        ExitError::new(
            USAGE,
            format!(
                "no catalog found: pass --catalog, set SURF_CATALOG_DIR, or create a {} directory",
                CATALOG_DIR_NAME
            ),
        )
        .into()
    })
}

/// Walk up from `start` looking for a `.surf` directory.
fn find_catalog_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CATALOG_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
