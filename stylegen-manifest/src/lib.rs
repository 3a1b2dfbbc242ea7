//! Parsing and validation of `stylegen.toml`.
//!
//! The manifest names the output package and directory, the marker that
//! identifies a properties holder, and the declarations to scan. The
//! [`TomlScanner`] turns those declarations into a component schema.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod scanner;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::StyleToml;
pub use manifest::{
    DEFAULT_DIR, DEFAULT_OWNER, DEFAULT_PACKAGE, DEFAULT_SUFFIX, Declaration, Manifest,
    OutputConfig, Param, ScannerConfig, parse_manifest,
};
pub use scanner::TomlScanner;
