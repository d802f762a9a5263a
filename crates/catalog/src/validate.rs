// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation helpers for catalog parsing

use crate::parser::ParseError;
use crate::{CommandDef, HelpDef, ParameterDecl};
use std::collections::HashMap;

/// Reject names that collide after case-folding.
///
/// Returns the first offending name paired with the spelling it collides with.
fn find_case_collision<'a>(names: impl Iterator<Item = &'a str>) -> Option<(&'a str, &'a str)> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for name in names {
        if let Some(first) = seen.insert(name.to_lowercase(), name) {
            return Some((name, first));
        }
    }
    None
}

fn validate_parameter_list(params: &[ParameterDecl], location: &str) -> Result<(), ParseError> {
    for (i, param) in params.iter().enumerate() {
        if param.name.trim().is_empty() {
            return Err(ParseError::InvalidFormat {
                location: format!("{}.parameter[{}]", location, i),
                message: "parameter name is required".to_string(),
            });
        }
        if param.type_name.trim().is_empty() {
            return Err(ParseError::InvalidFormat {
                location: format!("{}.parameter.{}", location, param.name),
                message: "parameter type must not be empty".to_string(),
            });
        }
    }
    if let Some((dup, first)) = find_case_collision(params.iter().map(|p| p.name.as_str())) {
        return Err(ParseError::InvalidFormat {
            location: location.to_string(),
            message: format!(
                "duplicate parameter '{}' (collides with '{}' ignoring case)",
                dup, first
            ),
        });
    }
    Ok(())
}

/// Validate one command declaration.
pub(crate) fn validate_command(cmd: &CommandDef) -> Result<(), ParseError> {
    let location = format!("command.{}", cmd.name);

    validate_parameter_list(&cmd.parameters, &location)?;

    for (i, set) in cmd.parameter_sets.iter().enumerate() {
        if set.name.trim().is_empty() {
            return Err(ParseError::InvalidFormat {
                location: format!("{}.parameter_set[{}]", location, i),
                message: "parameter set name is required".to_string(),
            });
        }
        validate_parameter_list(
            &set.parameters,
            &format!("{}.parameter_set.{}", location, set.name),
        )?;
    }
    if let Some((dup, first)) = find_case_collision(cmd.parameter_sets.iter().map(|s| s.name.as_str())) {
        return Err(ParseError::InvalidFormat {
            location: location.clone(),
            message: format!(
                "duplicate parameter set '{}' (collides with '{}' ignoring case)",
                dup, first
            ),
        });
    }

    for (i, primary) in cmd.primary.iter().enumerate() {
        if primary.trim().is_empty() {
            return Err(ParseError::InvalidFormat {
                location: format!("{}.primary[{}]", location, i),
                message: "primary parameter name must not be empty".to_string(),
            });
        }
    }

    Ok(())
}

/// Validate one help declaration.
pub(crate) fn validate_help(help: &HelpDef) -> Result<(), ParseError> {
    let location = format!("help.{}", help.name);
    for (i, param) in help.parameters.iter().enumerate() {
        if param.name.trim().is_empty() {
            return Err(ParseError::InvalidFormat {
                location: format!("{}.parameter[{}]", location, i),
                message: "parameter name is required".to_string(),
            });
        }
    }
    if let Some((dup, first)) = find_case_collision(help.parameters.iter().map(|p| p.name.as_str())) {
        return Err(ParseError::InvalidFormat {
            location,
            message: format!(
                "duplicate parameter '{}' (collides with '{}' ignoring case)",
                dup, first
            ),
        });
    }
    Ok(())
}

