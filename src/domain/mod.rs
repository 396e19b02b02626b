//! Domain Layer
//!
//! Pure description of a deployment: what gets copied where, and the
//! interfaces the application layer drives.
//!
//! ## Structure
//!
//! - `value_objects/` - Platform, path plan, build commands
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod value_objects;
