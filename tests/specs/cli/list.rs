//! `surf list` specs

use crate::prelude::*;

#[test]
fn list_shows_table() {
    let temp = Project::with_catalog("build.hcl", CONSISTENT_CATALOG);
    temp.catalog_file("widget.toml", DRIFTED_CATALOG);
    temp.surf().args(&["list"]).passes().stdout_eq(
        "\
COMMAND       PARAMS  SETS  PRIMARY  HELP
Get-Widget         2     0  Name     documented
Invoke-Build       2     1  Task     documented
",
    );
}

#[test]
fn list_json() {
    let temp = Project::with_catalog("build.hcl", CONSISTENT_CATALOG);
    let json = temp.surf().args(&["list", "-o", "json"]).passes().json();
    assert_eq!(json[0]["command"], "Invoke-Build");
    assert_eq!(json[0]["parameters"], 2);
    assert_eq!(json[0]["help"], "documented");
}

#[test]
fn empty_catalog_says_so() {
    let temp = Project::empty();
    temp.file(".surf/.keep", "");
    temp.surf()
        .args(&["list"])
        .passes()
        .stderr_has("No commands found");
}
