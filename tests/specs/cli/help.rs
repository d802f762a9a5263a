//! CLI help output specs

use crate::prelude::*;

#[test]
fn surf_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn surf_help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("check")
        .stdout_has("list")
        .stdout_has("show");
}

#[test]
fn surf_check_help_shows_flags() {
    cli()
        .args(&["check", "--help"])
        .passes()
        .stdout_has("--primary")
        .stdout_has("--jobs")
        .stdout_has("--all");
}

#[test]
fn surf_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
