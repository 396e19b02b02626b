//! rea - engine deployment assembler
//!
//! Rebuilds the engine and the test game with the .NET toolchain, then
//! lays out the engine build directory (scenes, managed assemblies, native
//! runtime libraries, assets and the project manifest) so the engine can
//! start the game straight from its build output.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{AssembleOptions, AssembleReport, AssembleUseCase};
pub use config::{Config, Verbosity};
pub use domain::ports::{AssembleEvent, AssembleEventSink, BuildRunner, FileSystem};
pub use domain::value_objects::{HostOs, PathPlan, Platform};
pub use error::{AssembleError, AssembleResult};
pub use infrastructure::{LocalFs, ProcessRunner};
