//! Use Case Factory
//!
//! Creates the assemble use case and its event sink with infrastructure
//! dependencies wired up.

use std::sync::Arc;

use crate::application::AssembleUseCase;
use crate::config::Verbosity;
use crate::domain::ports::AssembleEventSink;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs, OutputMode, ProcessRunner};
use crate::ui::TerminalCapabilities;

/// The assemble use case backed by the real file system and processes
pub type ConcreteAssembleUseCase = AssembleUseCase<LocalFs, ProcessRunner>;

/// Create an assemble use case with all dependencies wired up.
///
/// In JSON mode the build tool's stdout is sent to stderr so stdout only
/// carries events.
pub fn create_assemble_use_case(json: bool) -> ConcreteAssembleUseCase {
    let mode = if json {
        OutputMode::Stderr
    } else {
        OutputMode::Inherit
    };
    AssembleUseCase::new(LocalFs::new(), ProcessRunner::new(mode))
}

/// Pick the event sink for the requested output format
pub fn create_event_sink(
    json: bool,
    verbosity: Verbosity,
    caps: &TerminalCapabilities,
) -> Arc<dyn AssembleEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(
            verbosity,
            caps.supports_color,
            caps.supports_unicode,
        ))
    }
}
