// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-format parsing tests: TOML, JSON, and HCL.

use surf_catalog::{parse_catalog, Catalog};
use surf_core::{CommandName, CommandRegistry, HelpSource};

fn assert_sample_invoke_build(catalog: &Catalog) {
    let name = CommandName::from("Invoke-Build");
    assert_eq!(catalog.primary_parameters("Invoke-Build"), vec!["Task"]);

    let params = catalog.list_parameters(&name).unwrap();
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["File", "Result", "Task", "Verbose"]);

    let task = &params[2];
    assert_eq!(task.type_name, "String[]");
    assert!(task.is_mandatory);
    assert!(task.is_mandatory_in("ByName"));
    assert!(!task.is_mandatory_in("ByResult"));

    let file = &params[0];
    assert!(!file.is_mandatory);

    let help = catalog.get_help(&name).unwrap();
    assert_eq!(help.synopsis, "Invokes build tasks.");
    assert_eq!(help.related_links.len(), 2);
    assert_eq!(help.related_links[0].text, "Online Version");
    assert!(help.related_links[0].has_target());
    assert!(!help.related_links[1].has_target());

    let task_doc = help.parameter("task").unwrap();
    assert_eq!(task_doc.required, "true");
    assert_eq!(task_doc.declared_type.as_deref(), Some(" String[] "));
    assert_eq!(help.parameter("File").unwrap().required, "false");
}

// ============================================================================
// TOML
// ============================================================================

#[test]
fn toml_sample_catalog() {
    let catalog = parse_catalog(include_str!("../fixtures/invoke_build.toml")).unwrap();
    assert_sample_invoke_build(&catalog);
}

#[test]
fn toml_empty() {
    let catalog = parse_catalog("").unwrap();
    assert!(catalog.commands.is_empty());
    assert!(catalog.help.is_empty());
}

#[test]
fn toml_parameter_array_form() {
    let toml = r#"
[[command.Get-Widget.parameter]]
name = "Name"
type = "String"
mandatory = true

[[command.Get-Widget.parameter]]
name = "Count"
type = "Int32"
"#;
    let cmd = &parse_catalog(toml).unwrap().commands["Get-Widget"];
    assert_eq!(cmd.parameters.len(), 2);
    assert_eq!(cmd.parameters[0].name, "Name");
    assert!(cmd.parameters[0].mandatory);
    assert_eq!(cmd.parameters[1].type_name, "Int32");
}

#[test]
fn toml_help_without_type_leaves_it_absent() {
    let toml = r#"
[help.Get-Widget.parameter.Name]
text = "Widget name."
required = "true"
"#;
    let help = &parse_catalog(toml).unwrap().help["Get-Widget"];
    assert_eq!(help.parameters[0].declared_type, None);
}

// ============================================================================
// HCL
// ============================================================================

#[test]
fn hcl_sample_catalog() {
    let catalog = super::parse_hcl(include_str!("../fixtures/invoke_build.hcl"));
    assert_sample_invoke_build(&catalog);
}

#[test]
fn hcl_labeled_blocks_keep_declaration_order() {
    let hcl = r#"
command "New-Thing" {
  parameter_set "Second" {
    parameter "B" { type = "String" }
  }
  parameter_set "First" {
    parameter "A" { type = "String" }
  }
}
"#;
    let cmd = &super::parse_hcl(hcl).commands["New-Thing"];
    let sets: Vec<&str> = cmd.parameter_sets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(sets, vec!["Second", "First"]);
}

#[test]
fn hcl_link_label_becomes_text() {
    let hcl = r#"
help "Get-Widget" {
  link "Online Version" {
    uri = "https://example.invalid/get-widget"
  }
}
"#;
    let help = &super::parse_hcl(hcl).help["Get-Widget"];
    assert_eq!(help.links[0].text, "Online Version");
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn json_sample_catalog() {
    let catalog = super::parse_json(include_str!("../fixtures/invoke_build.json"));
    assert_sample_invoke_build(&catalog);
}

#[test]
fn json_plural_keys_are_accepted() {
    let json = r#"{
  "commands": { "Get-Widget": { "parameters": [{ "name": "Name", "type": "String" }] } },
  "help": { "Get-Widget": { "synopsis": "Gets a widget.", "links": [] } }
}"#;
    let catalog = super::parse_json(json);
    assert_eq!(catalog.commands["Get-Widget"].parameters.len(), 1);
    assert!(catalog.help["Get-Widget"].links.is_empty());
}
