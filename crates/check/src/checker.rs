// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The consistency rules.
//!
//! Rules run in a fixed order and never short-circuit across parameters:
//! whole-command help rules first, then per-parameter rules over the
//! filtered registry list, then the primary-parameter rule over the
//! unfiltered list.

use crate::{Report, ReportEntry, Rule, ValidationRequest};
use std::collections::BTreeSet;
use surf_core::{
    exclude, is_placeholder, CommandName, CommandRegistry, HelpRecord, HelpSource, LookupError,
    ParameterDescriptor, ParameterDoc, EXCLUDED_PARAMETERS,
};

/// Validate one command against its help.
///
/// A lookup failure on either side yields a single entry for that command
/// and no rule is evaluated.
pub fn check<R, H>(registry: &R, help_source: &H, request: &ValidationRequest) -> Report
where
    R: CommandRegistry + ?Sized,
    H: HelpSource + ?Sized,
{
    let command = &request.command;

    let params = match registry.list_parameters(command) {
        Ok(params) => params,
        Err(e) => return Report::from_iter([lookup_failure(command, &e)]),
    };
    let help = match help_source.get_help(command) {
        Ok(help) => help,
        Err(e) => return Report::from_iter([lookup_failure(command, &e)]),
    };

    let mut report = Report::new();
    check_command_help(command, &help, &mut report);

    let registry_params = exclude(&params, EXCLUDED_PARAMETERS);
    let docs = exclude(&help.parameters, EXCLUDED_PARAMETERS);
    for param in &registry_params {
        check_parameter(command, param, &docs, &mut report);
    }

    check_primary(command, &params, &request.primary, &mut report);

    let summary = report.summary();
    tracing::debug!(
        command = %command,
        checks = summary.checks,
        failures = summary.failures,
        "validated command"
    );
    report
}

fn lookup_failure(command: &CommandName, err: &LookupError) -> ReportEntry {
    let rule = match err {
        LookupError::CommandNotFound(_) => Rule::CommandNotFound,
        LookupError::HelpNotFound(_) => Rule::HelpNotFound,
    };
    ReportEntry::new(command, rule, false).with_detail("error", err.to_string())
}

// Rules 1-3
fn check_command_help(command: &CommandName, help: &HelpRecord, report: &mut Report) {
    let synopsis = if help.synopsis.trim().is_empty() {
        ReportEntry::new(command, Rule::UnauthoredSynopsis, false).with_detail("reason", "empty")
    } else if is_placeholder(&help.synopsis) {
        ReportEntry::new(command, Rule::UnauthoredSynopsis, false)
            .with_detail("reason", "placeholder")
            .with_detail("actual", help.synopsis.as_str())
    } else {
        ReportEntry::new(command, Rule::UnauthoredSynopsis, true)
    };
    report.push(synopsis);

    let described = !help.description.trim().is_empty();
    let mut description = ReportEntry::new(command, Rule::MissingDescription, described);
    if !described {
        description = description.with_detail("reason", "empty");
    }
    report.push(description);

    let link = match help.first_link() {
        Some(link) if link.has_target() => ReportEntry::new(command, Rule::MissingRelatedLink, true),
        Some(link) => ReportEntry::new(command, Rule::MissingRelatedLink, false)
            .with_detail("reason", "first related link has no target")
            .with_detail("text", link.text.as_str()),
        None => ReportEntry::new(command, Rule::MissingRelatedLink, false)
            .with_detail("reason", "no related links"),
    };
    report.push(link);
}

// Rules 4-7
fn check_parameter(
    command: &CommandName,
    param: &ParameterDescriptor,
    docs: &[ParameterDoc],
    report: &mut Report,
) {
    let entry = |rule: Rule, passed: bool| {
        ReportEntry::new(command, rule, passed).for_parameter(param.name.as_str())
    };

    let Some(doc) = docs.iter().find(|d| param.is_named(&d.name)) else {
        report.push(entry(Rule::UndocumentedParameter, false));
        return;
    };
    report.push(entry(Rule::UndocumentedParameter, true));

    report.push(entry(Rule::EmptyParameterHelp, !doc.text.trim().is_empty()));

    let expected = param.is_mandatory.to_string();
    let mandatory = entry(
        Rule::MandatoryMismatch,
        expected.eq_ignore_ascii_case(&doc.required),
    );
    report.push(if mandatory.passed {
        mandatory
    } else {
        mandatory.expected_actual(expected, doc.required.as_str())
    });

    let declared = doc.declared_type.as_deref().unwrap_or("");
    let type_name = entry(Rule::TypeNameMismatch, declared.trim() == param.type_name);
    report.push(if type_name.passed {
        type_name
    } else {
        type_name.expected_actual(param.type_name.as_str(), declared)
    });
}

// Rule 8
fn check_primary(
    command: &CommandName,
    params: &[ParameterDescriptor],
    primary: &BTreeSet<String>,
    report: &mut Report,
) {
    for name in primary {
        let entry = match params.iter().find(|p| p.is_named(name)) {
            Some(p) if p.is_mandatory => {
                ReportEntry::new(command, Rule::MissingPrimaryParameter, true).for_parameter(&p.name)
            }
            Some(p) => ReportEntry::new(command, Rule::MissingPrimaryParameter, false)
                .for_parameter(&p.name)
                .with_detail("reason", "not mandatory in any parameter set"),
            None => ReportEntry::new(command, Rule::MissingPrimaryParameter, false)
                .for_parameter(name.as_str())
                .with_detail("reason", "not declared"),
        };
        report.push(entry);
    }
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
