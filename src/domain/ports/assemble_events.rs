//! Assemble Event Port
//!
//! Provides an observable interface for a deployment run.
//! Enables console progress, JSON event streams, and testing.

use std::path::PathBuf;

use crate::domain::value_objects::Platform;

/// Phase of a deployment run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssembleStep {
    Clean,
    Build,
    Layout,
    CopyGameFiles,
    CopyNativeRuntimes,
}

impl AssembleStep {
    /// Stable identifier for machine-readable output
    pub fn id(&self) -> &'static str {
        match self {
            AssembleStep::Clean => "clean",
            AssembleStep::Build => "build",
            AssembleStep::Layout => "layout",
            AssembleStep::CopyGameFiles => "copy_game_files",
            AssembleStep::CopyNativeRuntimes => "copy_native_runtimes",
        }
    }
}

/// Event emitted during a deployment run
#[derive(Debug, Clone, PartialEq)]
pub enum AssembleEvent {
    /// Platform detected, nothing touched yet
    Started { root: PathBuf, platform: Platform },

    /// A step began
    StepStarted { step: AssembleStep },

    /// One unit of work inside a step finished
    Progress { step: AssembleStep },

    /// A step finished
    StepFinished { step: AssembleStep },

    /// A stale path was removed during cleaning
    PathRemoved { path: PathBuf },

    /// External build about to run
    BuildStarted { command: String },

    /// External build finished
    BuildFinished { command: String, success: bool },

    /// Directory ensured
    DirectoryCreated { path: PathBuf },

    /// File copied into the engine build directory
    FileCopied { from: PathBuf, to: PathBuf },

    /// Optional input missing, step part skipped
    Skipped { path: PathBuf, reason: String },

    /// Run finished
    Completed {
        binaries: usize,
        native_libraries: usize,
        asset_files: usize,
        manifest: bool,
    },
}

/// Trait for receiving assemble events
///
/// Implementations:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait AssembleEventSink: Send + Sync {
    /// Handle an event
    fn on_event(&self, event: AssembleEvent);

    /// Check if this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl AssembleEventSink for NoopEventSink {
    fn on_event(&self, _event: AssembleEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
