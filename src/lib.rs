//! tscat - Qt Linguist translation catalog toolkit
//!
//! tscat is a CLI tool and library for working with Qt Linguist `.ts`
//! catalogs: it parses and rewrites them, resolves lookups the way a running
//! application does, and checks them for problems that would show up as
//! wrong or missing text in the UI.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, parser, writer, lookup table and statistics
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Check rules producing issues
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
