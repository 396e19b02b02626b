//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `process` - External build tool runner
//! - `events/` - Console and JSON event sinks

pub mod events;
pub mod fs;
pub mod process;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use process::{OutputMode, ProcessRunner};
