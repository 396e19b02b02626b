//! Assemble Options
//!
//! Configuration types for a deployment run.

use std::path::PathBuf;

use crate::config::{Config, DEFAULT_BUILD_TOOL};
use crate::domain::value_objects::{HostOs, PathPlan};

/// Options for the assemble use case
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Project root; every path in `plan` is relative to it
    pub root: PathBuf,
    /// Source/destination layout
    pub plan: PathPlan,
    /// External build tool (`dotnet`)
    pub build_tool: String,
    /// Host the run targets; decides which native runtimes are copied
    pub host: HostOs,
    /// Reuse existing build outputs instead of rebuilding
    pub skip_build: bool,
}

impl AssembleOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            plan: PathPlan::default(),
            build_tool: DEFAULT_BUILD_TOOL.to_string(),
            host: HostOs::detect(),
            skip_build: false,
        }
    }

    /// Options for `root` with paths and build tool taken from `config`
    pub fn from_config(root: impl Into<PathBuf>, config: &Config) -> Self {
        Self::new(root)
            .with_plan(config.paths.clone())
            .with_build_tool(config.build.tool.clone())
    }

    pub fn with_plan(mut self, plan: PathPlan) -> Self {
        self.plan = plan;
        self
    }

    pub fn with_build_tool(mut self, tool: impl Into<String>) -> Self {
        self.build_tool = tool.into();
        self
    }

    pub fn with_host(mut self, host: HostOs) -> Self {
        self.host = host;
        self
    }

    pub fn with_skip_build(mut self, skip_build: bool) -> Self {
        self.skip_build = skip_build;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn options_defaults() {
        let options = AssembleOptions::new("/work");
        assert_eq!(options.root, Path::new("/work"));
        assert_eq!(options.build_tool, "dotnet");
        assert_eq!(options.plan, PathPlan::default());
        assert_eq!(options.host, HostOs::detect());
        assert!(!options.skip_build);
    }

    #[test]
    fn options_from_config() {
        let mut config = Config::default();
        config.build.tool = "fake-dotnet".to_string();
        config.paths.engine_build_dir = PathBuf::from("engine");

        let options = AssembleOptions::from_config(".", &config);

        assert_eq!(options.build_tool, "fake-dotnet");
        assert_eq!(options.plan.engine_build_dir, Path::new("engine"));
    }

    #[test]
    fn options_builders() {
        let options = AssembleOptions::new(".")
            .with_host(HostOs::Windows)
            .with_skip_build(true);
        assert_eq!(options.host, HostOs::Windows);
        assert!(options.skip_build);
    }
}
