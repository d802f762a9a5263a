// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Catalog parsing and discovery.
//!
//! A catalog is a set of TOML, HCL, or JSON files declaring each command's
//! parameter contract (`command` blocks) and its help (`help` blocks). The
//! merged [`Catalog`] serves as both the command registry and the
//! documentation source for the checker.

mod command;
mod find;
mod help;
mod labeled;
mod parser;
mod validate;

pub use command::{CommandDef, ParameterDecl, ParameterSetDecl};
pub use find::{collect_catalog_files, load_catalog_dir, FindError};
pub use help::{HelpDef, HelpParameterDef};
pub use parser::{parse_catalog, parse_catalog_with_format, Catalog, Format, ParseError};
