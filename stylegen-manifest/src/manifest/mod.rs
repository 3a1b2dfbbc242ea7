//! stylegen.toml manifest types.

mod parse;

use std::path::PathBuf;

use serde::Deserialize;

pub use self::parse::parse_manifest;

pub const DEFAULT_PACKAGE: &str = "com.sdds.compose.uikit";
pub const DEFAULT_DIR: &str = "sdds-core/uikit-compose/src/main/kotlin";
pub const DEFAULT_OWNER: &str = "PropertyOwner";
pub const DEFAULT_SUFFIX: &str = "Properties";

/// Root of stylegen.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Declarations the scanner looks through, in file order.
    #[serde(default, rename = "declaration")]
    pub declarations: Vec<Declaration>,
}

/// Where the generated unit goes.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_package")]
    pub package: String,

    /// Output directory, relative to the manifest unless absolute.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            dir: default_dir(),
        }
    }
}

/// How a properties holder is recognized.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Supertype that marks a declaration as a properties holder.
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Suffix stripped from the holder name to get the component name.
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            suffix: default_suffix(),
        }
    }
}

/// A declared type with its primary constructor parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Declaration {
    pub name: String,

    #[serde(default)]
    pub supertypes: Vec<String>,

    #[serde(default, rename = "param")]
    pub params: Vec<Param>,
}

impl Declaration {
    pub fn extends(&self, supertype: &str) -> bool {
        self.supertypes.iter().any(|s| s.trim() == supertype)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Param {
    pub name: String,

    /// Textual type of the parameter, e.g. `ShapeProperty`.
    #[serde(rename = "type")]
    pub ty: String,
}

fn default_package() -> String {
    DEFAULT_PACKAGE.to_string()
}

fn default_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DIR)
}

fn default_owner() -> String {
    DEFAULT_OWNER.to_string()
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}
