//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring the use case to its infrastructure
//! - Warning and error rendering (text/JSON)

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::Cli;
pub use factory::{create_assemble_use_case, create_event_sink, ConcreteAssembleUseCase};
