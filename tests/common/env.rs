//! Test environment for isolated rea runs.
//!
//! Provides `TestEnv` - a temp project directory with a fake build tool,
//! plus helpers to run the rea binary against it.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::FAKE_BUILD_TOOL;

/// Result of running the rea binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project with a fake `dotnet` on hand
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Holds the fake build tool, outside the project tree
    tools_dir: TempDir,
    rea_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = TempDir::new().expect("Failed to create project dir");
        let tools_dir = TempDir::new().expect("Failed to create tools dir");

        let tool = tools_dir.path().join("fake-dotnet");
        std::fs::write(&tool, FAKE_BUILD_TOOL).expect("Failed to write fake build tool");
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake build tool executable");

        Self {
            project_root,
            tools_dir,
            rea_bin: PathBuf::from(env!("CARGO_BIN_EXE_rea")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn build_tool(&self) -> PathBuf {
        self.tools_dir.path().join("fake-dotnet")
    }

    /// Run rea from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run rea from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run rea from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.rea_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("REA_BUILD_TOOL", self.build_tool())
            .env("REA_NO_COLOR", "1")
            .env_remove("REA_VERBOSITY")
            .env_remove("FAKE_FAIL_BUILD")
            .env_remove("FAKE_FAIL_PUBLISH");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute rea");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a file from the project directory
    pub fn read_project_file(&self, relative_path: &str) -> String {
        let full_path = self.project_path(relative_path);
        std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Build tool invocations recorded by the fake tool
    pub fn build_log(&self) -> Vec<String> {
        std::fs::read_to_string(self.project_path("build.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
