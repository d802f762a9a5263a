//! `surf show` specs

use crate::prelude::*;

#[test]
fn show_prints_help_and_parameters() {
    let temp = Project::with_catalog("build.hcl", CONSISTENT_CATALOG);
    temp.surf()
        .args(&["show", "Invoke-Build"])
        .passes()
        .stdout_has("Invoke-Build\n")
        .stdout_has("Synopsis:     Invokes build tasks.")
        .stdout_has("Links:        Online Version <https://example.invalid/invoke-build>")
        .stdout_has("Primary:      Task")
        .stdout_has("\" String[] \"")
        .stdout_has("common");
}

#[test]
fn show_json_includes_both_sides() {
    let temp = Project::with_catalog("build.hcl", CONSISTENT_CATALOG);
    let json = temp
        .surf()
        .args(&["show", "Invoke-Build", "-o", "json"])
        .passes()
        .json();

    assert_eq!(json["command"], "Invoke-Build");
    assert_eq!(json["primary"][0], "Task");
    assert_eq!(json["parameters"][1]["name"], "Task");
    assert_eq!(json["parameters"][1]["parameter_sets"]["ByName"], true);
    assert_eq!(json["help"]["parameters"][0]["type"], " String[] ");
}
