//! BuildRunner port - runs an external build tool and waits for it

use std::path::Path;

use crate::domain::value_objects::BuildCommand;
use crate::error::AssembleResult;

/// Outcome of a finished external command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    pub success: bool,
    /// Output captured by the runner; empty when output is passed through
    pub captured: String,
}

impl CommandOutput {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            success: true,
            captured: String::new(),
        }
    }

    pub fn failure(code: Option<i32>) -> Self {
        Self {
            code,
            success: false,
            captured: String::new(),
        }
    }
}

/// Runs build commands synchronously
///
/// A command that could not be started is an `Err`; a command that ran
/// and failed is an `Ok` with `success == false`.
pub trait BuildRunner {
    fn run(&self, command: &BuildCommand, cwd: &Path) -> AssembleResult<CommandOutput>;
}
