//! `surf check` specs

use crate::prelude::*;

#[test]
fn consistent_catalog_passes() {
    let temp = Project::with_catalog("build.hcl", CONSISTENT_CATALOG);
    temp.surf().args(&["check"]).passes().stdout_eq(
        "passed  Invoke-Build (12 checks)\n\n1 command(s), 12 check(s), 0 failure(s)\n",
    );
}

#[test]
fn drifted_catalog_exits_one_with_violations() {
    let temp = Project::with_catalog("widget.toml", DRIFTED_CATALOG);
    temp.surf()
        .args(&["check"])
        .exits(1)
        .stdout_has("failed  Get-Widget")
        .stdout_has("unauthored_synopsis: placeholder")
        .stdout_has("undocumented_parameter [Count]")
        .stdout_has("missing_primary_parameter [Name]: not mandatory in any parameter set");
}

#[test]
fn json_report_shape() {
    let temp = Project::with_catalog("widget.toml", DRIFTED_CATALOG);
    let run = temp.surf().args(&["check", "-o", "json"]).exits(1);
    let json = run.json();

    assert_eq!(json["passed"], false);
    assert_eq!(json["summary"]["commands"], 1);
    let rules: Vec<&str> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["passed"] == false)
        .map(|e| e["rule"].as_str().unwrap())
        .collect();
    assert_eq!(
        rules,
        vec![
            "unauthored_synopsis",
            "undocumented_parameter",
            "mandatory_mismatch",
            "missing_primary_parameter",
        ]
    );
}

#[test]
fn named_command_limits_the_run() {
    let temp = Project::with_catalog("build.hcl", CONSISTENT_CATALOG);
    temp.catalog_file("widget.toml", DRIFTED_CATALOG);
    temp.surf()
        .args(&["check", "Invoke-Build"])
        .passes()
        .stdout_lacks("Get-Widget");
}

#[test]
fn unknown_named_command_is_reported_not_fatal() {
    let temp = Project::with_catalog("build.hcl", CONSISTENT_CATALOG);
    temp.surf()
        .args(&["check", "Invoke-Build", "Get-Nothing"])
        .exits(1)
        .stdout_has("command_not_found: command not found: Get-Nothing")
        .stdout_has("passed  Invoke-Build");
}

#[test]
fn primary_flag_overrides_catalog() {
    let temp = Project::with_catalog("build.hcl", CONSISTENT_CATALOG);
    temp.surf()
        .args(&["check", "Invoke-Build", "--primary", "File"])
        .exits(1)
        .stdout_has("missing_primary_parameter [File]");
}

#[test]
fn catalog_env_var_is_used() {
    let temp = Project::empty();
    temp.file("elsewhere/build.hcl", CONSISTENT_CATALOG);
    temp.surf()
        .env("SURF_CATALOG_DIR", temp.path().join("elsewhere"))
        .env("SURF_JOBS", "1")
        .args(&["check"])
        .passes();
}

#[test]
fn catalog_found_from_subdirectory() {
    let temp = Project::with_catalog("build.hcl", CONSISTENT_CATALOG);
    temp.file("src/nested/.keep", "");
    cli()
        .pwd(temp.path().join("src/nested"))
        .args(&["check", "-j", "2"])
        .passes();
}
