//! Error types for rea
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for assembler operations
pub type AssembleResult<T> = Result<T, AssembleError>;

/// Main error type for assembler operations
#[derive(Error, Debug)]
pub enum AssembleError {
    /// Host operating system has no known runtime identifier
    #[error("unsupported platform: {os}")]
    UnsupportedPlatform { os: String },

    /// External build tool exited with a failure status
    #[error("build command failed ({}): {command}", describe_code(.code))]
    BuildFailed { command: String, code: Option<i32> },

    /// External build tool could not be started at all
    #[error("failed to start build command '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem operation failed on a specific path
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed
    #[error("invalid config in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },
}

impl AssembleError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AssembleError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Process exit code the CLI should report for this error
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Path the error is attached to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            AssembleError::Io { path, .. } => Some(path),
            AssembleError::Config { file, .. } => Some(file),
            _ => None,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}
