// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rule identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// One consistency rule, or the adapter failure that pre-empted all rules.
///
/// Variants are declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// The registry has no such command
    CommandNotFound,
    /// The documentation source has no record for the command
    HelpNotFound,
    UnauthoredSynopsis,
    MissingDescription,
    MissingRelatedLink,
    UndocumentedParameter,
    EmptyParameterHelp,
    MandatoryMismatch,
    TypeNameMismatch,
    MissingPrimaryParameter,
}

impl Rule {
    /// Stable snake_case identifier, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::CommandNotFound => "command_not_found",
            Rule::HelpNotFound => "help_not_found",
            Rule::UnauthoredSynopsis => "unauthored_synopsis",
            Rule::MissingDescription => "missing_description",
            Rule::MissingRelatedLink => "missing_related_link",
            Rule::UndocumentedParameter => "undocumented_parameter",
            Rule::EmptyParameterHelp => "empty_parameter_help",
            Rule::MandatoryMismatch => "mandatory_mismatch",
            Rule::TypeNameMismatch => "type_name_mismatch",
            Rule::MissingPrimaryParameter => "missing_primary_parameter",
        }
    }

    /// Whether the entry reports an adapter failure rather than a rule.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Rule::CommandNotFound | Rule::HelpNotFound)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
