// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse error tests: syntax errors, missing fields, case-folded duplicates.

use surf_catalog::{parse_catalog, ParseError};

// ============================================================================
// Syntax and missing fields
// ============================================================================

#[test]
fn toml_syntax_error() {
    let err = parse_catalog("[command.broken\n").unwrap_err();
    assert!(matches!(err, ParseError::Toml(_)));
}

#[test]
fn missing_parameter_type() {
    super::assert_toml_err("[command.Get-Widget.parameter.Name]\nmandatory = true", &["type"]);
}

#[test]
fn empty_parameter_type() {
    super::assert_toml_err(
        "[command.Get-Widget.parameter.Name]\ntype = \"  \"",
        &["command.Get-Widget.parameter.Name", "type must not be empty"],
    );
}

#[test]
fn empty_primary_entry() {
    super::assert_toml_err(
        "[command.Get-Widget]\nprimary = [\"\"]",
        &["command.Get-Widget.primary[0]"],
    );
}

#[test]
fn array_parameter_without_name() {
    let err = parse_catalog("[[command.Get-Widget.parameter]]\ntype = \"String\"").unwrap_err();
    assert!(matches!(err, ParseError::InvalidFormat { .. }));
    super::assert_err_contains(&err, &["name is required"]);
}

// ============================================================================
// Case-folded duplicates
// ============================================================================

#[yare::parameterized(
    same_case   = { "Name", "Name" },
    folded_case = { "Name", "name" },
    upper_case  = { "name", "NAME" },
)]
fn duplicate_command_parameter(first: &str, second: &str) {
    let toml = format!(
        "[[command.Get-Widget.parameter]]\nname = \"{first}\"\ntype = \"String\"\n\
         [[command.Get-Widget.parameter]]\nname = \"{second}\"\ntype = \"String\""
    );
    crate::assert_toml_err(&toml, &["duplicate parameter", second]);
}

#[test]
fn duplicate_parameter_within_a_set() {
    let hcl = r#"
command "Get-Item" {
  parameter_set "ByPath" {
    parameter "Path" { type = "String" }
    parameter "PATH" { type = "String" }
  }
}
"#;
    super::assert_hcl_err(hcl, &["command.Get-Item.parameter_set.ByPath", "duplicate parameter"]);
}

#[test]
fn same_parameter_in_different_sets_is_allowed() {
    let hcl = r#"
command "Get-Item" {
  parameter_set "ByPath" {
    parameter "Path" { type = "String" }
  }
  parameter_set "ByLiteral" {
    parameter "path" { type = "String" }
  }
}
"#;
    let catalog = super::parse_hcl(hcl);
    assert_eq!(catalog.commands["Get-Item"].descriptors().len(), 1);
}

#[test]
fn duplicate_help_parameter() {
    let toml = r#"
[help.Get-Widget.parameter.Name]
text = "a"
[help.Get-Widget.parameter.NAME]
text = "b"
"#;
    super::assert_toml_err(toml, &["help.Get-Widget", "duplicate parameter"]);
}

#[test]
fn invalid_required_value_type() {
    let err = parse_catalog("[help.Get-Widget.parameter.Name]\nrequired = 1").unwrap_err();
    assert!(matches!(err, ParseError::Toml(_)));
}
