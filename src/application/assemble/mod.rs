//! Assemble Use Case Module
//!
//! Builds the engine and the game, then lays out a runnable engine directory.

mod options;
mod result;
mod use_case;


pub use options::AssembleOptions;
pub use result::AssembleReport;
pub use use_case::{is_managed_binary, AssembleUseCase};
