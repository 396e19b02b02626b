//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AssembleUseCase` - clean, build, and lay out the engine build directory

pub mod assemble;

pub use assemble::{AssembleOptions, AssembleReport, AssembleUseCase};
