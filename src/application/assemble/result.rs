//! Assemble Report
//!
//! What a successful deployment run did.

use std::path::PathBuf;

use crate::domain::value_objects::Platform;

/// Report of a finished deployment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleReport {
    pub platform: Platform,
    /// Destination root
    pub engine_build_dir: PathBuf,
    /// Stale paths removed during cleaning
    pub removed: Vec<PathBuf>,
    /// Build command lines that ran successfully, in order
    pub builds: Vec<String>,
    /// Whether `project.json` was found and copied
    pub manifest_copied: bool,
    /// Destination paths of copied `.dll` files
    pub binaries: Vec<PathBuf>,
    /// Files copied into `Assets`, `None` if the source tree was missing
    pub asset_files: Option<usize>,
    /// Destination paths of copied native runtime libraries
    pub native_libraries: Vec<PathBuf>,
}

impl AssembleReport {
    pub fn new(platform: Platform, engine_build_dir: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            engine_build_dir: engine_build_dir.into(),
            removed: Vec::new(),
            builds: Vec::new(),
            manifest_copied: false,
            binaries: Vec::new(),
            asset_files: None,
            native_libraries: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_report_is_empty() {
        let report = AssembleReport::new(Platform::LinuxX64, "engine");
        assert_eq!(report.engine_build_dir, PathBuf::from("engine"));
        assert!(report.removed.is_empty());
        assert!(report.builds.is_empty());
        assert!(!report.manifest_copied);
        assert!(report.binaries.is_empty());
        assert_eq!(report.asset_files, None);
        assert!(report.native_libraries.is_empty());
    }
}
