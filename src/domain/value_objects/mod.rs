//! Domain Value Objects
//!
//! Immutable value types that describe a deployment.

mod build_command;
mod plan;
mod platform;

pub use build_command::{BuildCommand, BuildKind};
pub use plan::{
    PathError, PathPlan, PlanError, ResolvedPlan, ASSEMBLIES_DIR, ASSETS_DIR, MANIFEST_FILE, NATIVE_DIR, RUNTIMES_DIR,
    SCENES_DIR,
};
pub use platform::{HostOs, Platform};
