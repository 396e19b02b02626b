//! Common test utilities for rea CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus a fake build tool
//! - Fixtures: the fake `dotnet` script

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
