//! Configuration module for rea
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (REA_*)
//! 3. Project config (`rea.toml` in the project root, or `--config`)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{load_for_root, with_env_overrides, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{BuildConfig, Config, OutputConfig, Verbosity, DEFAULT_BUILD_TOOL};
