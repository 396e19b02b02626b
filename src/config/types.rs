//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PathPlan;
use crate::error::AssembleResult;

use super::loader::{self, ConfigWarning};

/// Default external build tool
pub const DEFAULT_BUILD_TOOL: &str = "dotnet";

/// Build tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Program invoked as `<tool> build ...` and `<tool> publish ...`
    #[serde(default = "default_build_tool")]
    pub tool: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            tool: default_build_tool(),
        }
    }
}

fn default_build_tool() -> String {
    DEFAULT_BUILD_TOOL.to_string()
}

/// Console verbosity, ordered from least to most output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// Parse a case-insensitive name; unknown names fall back to `Normal`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" | "debug" => Verbosity::Verbose,
            _ => Verbosity::Normal,
        }
    }

    /// Raise verbosity by `-v` count; never lowers a configured level
    pub fn with_flag_count(self, count: u8) -> Self {
        if count > 0 {
            self.max(Verbosity::Verbose)
        } else {
            self
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Main configuration structure (`rea.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathPlan,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> AssembleResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
