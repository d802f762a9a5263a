// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! surf-core: data model and adapter seams for command-surface validation

pub mod adapter;
pub mod command;
pub mod filter;
pub mod help;
pub mod parameter;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use adapter::{sort_parameters, CommandRegistry, HelpSource, LookupError};
pub use command::CommandName;
pub use filter::{exclude, is_excluded, Named, EXCLUDED_PARAMETERS};
pub use help::{is_placeholder, HelpRecord, ParameterDoc, RelatedLink, PLACEHOLDER_MARKERS};
pub use parameter::{ParameterDescriptor, ALL_PARAMETER_SETS};
