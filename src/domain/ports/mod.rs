//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod assemble_events;
pub mod build_runner;
pub mod file_system;

pub use assemble_events::{AssembleEvent, AssembleEventSink, AssembleStep, NoopEventSink};
pub use build_runner::{BuildRunner, CommandOutput};
pub use file_system::{DirEntry, EntryKind, FileSystem};
