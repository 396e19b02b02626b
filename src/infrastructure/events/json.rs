//! JSON Event Sink
//!
//! Outputs assemble events as NDJSON for CI/automation consumption.

use crate::domain::ports::{AssembleEvent, AssembleEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Render one event as a JSON object
pub fn event_to_json(event: &AssembleEvent) -> serde_json::Value {
    match event {
        AssembleEvent::Started { root, platform } => serde_json::json!({
            "event": "start",
            "command": "assemble",
            "root": root.display().to_string(),
            "platform": platform,
        }),
        AssembleEvent::StepStarted { step } => serde_json::json!({
            "event": "step_start",
            "step": step.id(),
        }),
        AssembleEvent::Progress { step } => serde_json::json!({
            "event": "progress",
            "step": step.id(),
        }),
        AssembleEvent::StepFinished { step } => serde_json::json!({
            "event": "step_complete",
            "step": step.id(),
        }),
        AssembleEvent::PathRemoved { path } => serde_json::json!({
            "event": "removed",
            "path": path.display().to_string(),
        }),
        AssembleEvent::BuildStarted { command } => serde_json::json!({
            "event": "build_start",
            "build_command": command,
        }),
        AssembleEvent::BuildFinished { command, success } => serde_json::json!({
            "event": "build_complete",
            "build_command": command,
            "success": success,
        }),
        AssembleEvent::DirectoryCreated { path } => serde_json::json!({
            "event": "directory_created",
            "path": path.display().to_string(),
        }),
        AssembleEvent::FileCopied { from, to } => serde_json::json!({
            "event": "copied",
            "from": from.display().to_string(),
            "to": to.display().to_string(),
        }),
        AssembleEvent::Skipped { path, reason } => serde_json::json!({
            "event": "skipped",
            "path": path.display().to_string(),
            "reason": reason,
        }),
        AssembleEvent::Completed {
            binaries,
            native_libraries,
            asset_files,
            manifest,
        } => serde_json::json!({
            "event": "complete",
            "command": "assemble",
            "status": "success",
            "binaries": binaries,
            "native_libraries": native_libraries,
            "asset_files": asset_files,
            "manifest": manifest,
        }),
    }
}

impl AssembleEventSink for JsonEventSink {
    fn on_event(&self, event: AssembleEvent) {
        self.write_event(event_to_json(&event));
    }
}
