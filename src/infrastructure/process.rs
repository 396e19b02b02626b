//! Process Build Runner
//!
//! Runs the external build tool with `std::process::Command` and blocks
//! until it exits. There is no timeout.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{BuildRunner, CommandOutput};
use crate::domain::value_objects::BuildCommand;
use crate::error::{AssembleError, AssembleResult};

/// Where the child's output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Child shares our stdout/stderr
    #[default]
    Inherit,
    /// Child stdout is sent to our stderr, keeping our stdout clean for JSON
    Stderr,
    /// Output is collected into `CommandOutput::captured`
    Capture,
}

/// Build runner backed by real processes
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    mode: OutputMode,
}

impl ProcessRunner {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl BuildRunner for ProcessRunner {
    fn run(&self, command: &BuildCommand, cwd: &Path) -> AssembleResult<CommandOutput> {
        let mut cmd = Command::new(&command.program);
        cmd.args(command.args())
            .current_dir(cwd)
            .stdin(Stdio::inherit());

        let spawn_err = |source| AssembleError::CommandSpawn {
            command: command.display(),
            source,
        };

        match self.mode {
            OutputMode::Inherit => {
                let status = cmd
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(spawn_err)?;
                Ok(CommandOutput {
                    code: status.code(),
                    success: status.success(),
                    captured: String::new(),
                })
            }
            OutputMode::Stderr => {
                let status = cmd
                    .stdout(Stdio::from(std::io::stderr()))
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(spawn_err)?;
                Ok(CommandOutput {
                    code: status.code(),
                    success: status.success(),
                    captured: String::new(),
                })
            }
            OutputMode::Capture => {
                let output = cmd.output().map_err(spawn_err)?;
                let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
                captured.push_str(&String::from_utf8_lossy(&output.stderr));
                Ok(CommandOutput {
                    code: output.status.code(),
                    success: output.status.success(),
                    captured,
                })
            }
        }
    }
}
