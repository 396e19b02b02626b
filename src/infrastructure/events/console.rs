//! Console Event Sink
//!
//! Human-readable progress: one line per step, with `.` markers for the
//! steps that do several small things. Per-file lines only at verbose level.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{AssembleEvent, AssembleEventSink, AssembleStep};
use crate::ui::{ColoredText, Icons};

struct ConsoleState {
    writer: Box<dyn Write + Send>,
    /// A step header or marker line is waiting for its newline
    line_open: bool,
}

/// Event sink that prints progress for humans
pub struct ConsoleEventSink {
    state: Mutex<ConsoleState>,
    verbosity: Verbosity,
    color: bool,
    icons: Icons,
}

impl ConsoleEventSink {
    /// Console sink writing to stdout
    pub fn stdout(verbosity: Verbosity, color: bool, unicode: bool) -> Self {
        Self::with_writer(io::stdout(), verbosity, color, unicode)
    }

    /// Console sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        verbosity: Verbosity,
        color: bool,
        unicode: bool,
    ) -> Self {
        Self {
            state: Mutex::new(ConsoleState {
                writer: Box::new(writer),
                line_open: false,
            }),
            verbosity,
            color,
            icons: Icons::new(unicode),
        }
    }

    fn step_header(step: AssembleStep) -> (&'static str, bool) {
        // (text, keeps the line open for progress markers)
        match step {
            AssembleStep::Clean => ("Cleaning previous builds...", false),
            AssembleStep::Build => ("Building projects...", false),
            AssembleStep::Layout => ("Setting up engine build directory.", false),
            AssembleStep::CopyGameFiles => ("Copying game files to engine build directory", true),
            AssembleStep::CopyNativeRuntimes => ("Copying native runtimes...", false),
        }
    }

    fn has_markers(step: AssembleStep) -> bool {
        matches!(step, AssembleStep::Layout | AssembleStep::CopyGameFiles)
    }

    /// Write inline text, leaving the line open
    fn inline(&self, text: &str) {
        if let Ok(mut state) = self.state.lock() {
            let _ = write!(state.writer, "{}", text);
            let _ = state.writer.flush();
            state.line_open = true;
        }
    }

    /// Write a full line, closing any open marker line first
    fn line(&self, text: &str) {
        if let Ok(mut state) = self.state.lock() {
            if state.line_open {
                let _ = writeln!(state.writer);
            }
            let _ = writeln!(state.writer, "{}", text);
            let _ = state.writer.flush();
            state.line_open = false;
        }
    }

    fn end_line(&self) {
        if let Ok(mut state) = self.state.lock() {
            if state.line_open {
                let _ = writeln!(state.writer);
                let _ = state.writer.flush();
            }
            state.line_open = false;
        }
    }

    fn detail(&self, icon: &str, text: String) {
        if self.verbosity >= Verbosity::Verbose {
            let rendered = ColoredText::dim(format!("  {} {}", icon, text)).render(self.color);
            self.line(&rendered);
        }
    }

    fn path_str(path: &Path) -> String {
        path.display().to_string()
    }
}

impl AssembleEventSink for ConsoleEventSink {
    fn on_event(&self, event: AssembleEvent) {
        if self.verbosity == Verbosity::Quiet {
            return;
        }

        match event {
            AssembleEvent::Started { root, platform } => {
                if self.verbosity >= Verbosity::Verbose {
                    let header = format!("Assembling {} for {}", root.display(), platform);
                    self.line(&ColoredText::info(header).bold().render(self.color));
                }
            }
            AssembleEvent::StepStarted { step } => {
                let (text, open) = Self::step_header(step);
                if open {
                    self.end_line();
                    self.inline(text);
                } else {
                    self.line(text);
                }
            }
            AssembleEvent::Progress { .. } => self.inline("."),
            AssembleEvent::StepFinished { step } => {
                if Self::has_markers(step) {
                    self.end_line();
                }
            }
            AssembleEvent::PathRemoved { path } => {
                self.detail(self.icons.trash, Self::path_str(&path));
            }
            AssembleEvent::BuildStarted { command } => {
                self.detail(self.icons.arrow, command);
            }
            AssembleEvent::BuildFinished { command, success } => {
                if success {
                    self.detail(self.icons.success, command);
                } else {
                    let text = format!("{} {}", self.icons.error, command);
                    self.line(&ColoredText::error(text).render(self.color));
                }
            }
            AssembleEvent::DirectoryCreated { path } => {
                self.detail("+", Self::path_str(&path));
            }
            AssembleEvent::FileCopied { from, to } => {
                self.detail(
                    self.icons.arrow,
                    format!("{} {} {}", from.display(), self.icons.arrow, to.display()),
                );
            }
            AssembleEvent::Skipped { path, reason } => {
                self.detail(self.icons.skip, format!("{} ({})", path.display(), reason));
            }
            AssembleEvent::Completed {
                binaries,
                native_libraries,
                asset_files,
                manifest,
            } => {
                self.line(&ColoredText::success("Done.").render(self.color));
                if self.verbosity >= Verbosity::Verbose {
                    let summary = format!(
                        "  {} {} binaries, {} native libraries, {} asset files, manifest {}",
                        self.icons.success,
                        binaries,
                        native_libraries,
                        asset_files,
                        if manifest { "copied" } else { "not found" }
                    );
                    self.line(&ColoredText::dim(summary).render(self.color));
                }
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}
