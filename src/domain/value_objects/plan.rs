//! Path plan - the fixed source/destination layout of a deployment
//!
//! All paths are relative to the project root until `PathPlan::resolve`
//! validates and anchors them. Layout names inside the engine build
//! directory are fixed because the engine looks them up at startup.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::platform::Platform;

pub const SCENES_DIR: &str = "Scenes";
pub const ASSEMBLIES_DIR: &str = "Assemblies";
pub const NATIVE_DIR: &str = "native";
pub const ASSETS_DIR: &str = "Assets";
pub const MANIFEST_FILE: &str = "project.json";
pub const RUNTIMES_DIR: &str = "runtimes";

/// Project-relative locations of build inputs and outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathPlan {
    /// Engine project descriptor handed to `dotnet build`
    pub engine_project: PathBuf,
    /// Game project descriptor handed to `dotnet publish`
    pub game_project: PathBuf,
    /// Where `dotnet publish` leaves the game
    pub game_publish_dir: PathBuf,
    /// Where `dotnet build` leaves the engine; the deployment destination
    pub engine_build_dir: PathBuf,
    /// Asset tree mirrored into the engine build directory
    pub game_assets_dir: PathBuf,
}

impl Default for PathPlan {
    fn default() -> Self {
        Self {
            engine_project: PathBuf::from("TheRealEngine").join("TheRealEngine.csproj"),
            game_project: PathBuf::from("TestGame").join("TestGame.csproj"),
            game_publish_dir: ["TestGame", "bin", "Release", "net8.0", "publish"]
                .iter()
                .collect(),
            engine_build_dir: ["TheRealEngine", "bin", "Debug", "net8.0"].iter().collect(),
            game_assets_dir: PathBuf::from("TestGame").join(ASSETS_DIR),
        }
    }
}

/// Why a configured path cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("absolute paths are not allowed")]
    AbsoluteNotAllowed,
    #[error("path contains traversal components (..)")]
    ContainsTraversal,
    #[error("path is the project root")]
    ProjectRoot,
    #[error("path overlaps paths.{0}")]
    Overlaps(&'static str),
}

/// A `[paths]` entry that was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("paths.{key} = {path:?}: {reason}")]
pub struct PlanError {
    pub key: &'static str,
    pub path: PathBuf,
    pub reason: PathError,
}

impl PathPlan {
    /// Check the plan can be executed without touching anything it shouldn't.
    ///
    /// Every path must be relative and free of `..`. The engine build dir and
    /// the publish dir are deleted wholesale, so neither may be the root or
    /// hold the project descriptors, the game assets, or each other. The
    /// asset tree must not contain the engine build dir it is copied into.
    pub fn validate(&self) -> Result<(), PlanError> {
        let engine_project = normalize("engine_project", &self.engine_project)?;
        let game_project = normalize("game_project", &self.game_project)?;
        let publish = normalize("game_publish_dir", &self.game_publish_dir)?;
        let engine = normalize("engine_build_dir", &self.engine_build_dir)?;
        let assets = normalize("game_assets_dir", &self.game_assets_dir)?;

        let removed = [
            ("engine_build_dir", &self.engine_build_dir, &engine),
            ("game_publish_dir", &self.game_publish_dir, &publish),
        ];
        let kept = [
            ("engine_project", &engine_project),
            ("game_project", &game_project),
            ("game_assets_dir", &assets),
        ];
        for (key, raw, dir) in removed {
            let reject = |reason| PlanError {
                key,
                path: raw.clone(),
                reason,
            };
            if dir.as_os_str().is_empty() {
                return Err(reject(PathError::ProjectRoot));
            }
            for (other, other_path) in kept {
                if other_path.starts_with(dir) {
                    return Err(reject(PathError::Overlaps(other)));
                }
            }
        }

        if engine.starts_with(&publish) || publish.starts_with(&engine) {
            return Err(PlanError {
                key: "engine_build_dir",
                path: self.engine_build_dir.clone(),
                reason: PathError::Overlaps("game_publish_dir"),
            });
        }
        if engine.starts_with(&assets) {
            return Err(PlanError {
                key: "game_assets_dir",
                path: self.game_assets_dir.clone(),
                reason: PathError::Overlaps("engine_build_dir"),
            });
        }

        Ok(())
    }

    /// Validate, then anchor every path at `root`
    pub fn resolve(&self, root: &Path) -> Result<ResolvedPlan, PlanError> {
        self.validate()?;
        Ok(ResolvedPlan {
            root: root.to_path_buf(),
            game_publish_dir: root.join(&self.game_publish_dir),
            engine_build_dir: root.join(&self.engine_build_dir),
            game_assets_dir: root.join(&self.game_assets_dir),
        })
    }
}

/// Relative form with `.` components dropped; rejects empty, absolute and `..` paths
fn normalize(key: &'static str, path: &Path) -> Result<PathBuf, PlanError> {
    let reject = |reason| PlanError {
        key,
        path: path.to_path_buf(),
        reason,
    };
    if path.as_os_str().is_empty() {
        return Err(reject(PathError::Empty));
    }

    let mut normal = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => normal.push(part),
            Component::CurDir => {}
            Component::ParentDir => return Err(reject(PathError::ContainsTraversal)),
            Component::RootDir | Component::Prefix(_) => {
                return Err(reject(PathError::AbsoluteNotAllowed))
            }
        }
    }
    Ok(normal)
}

/// A `PathPlan` anchored at a concrete project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlan {
    root: PathBuf,
    game_publish_dir: PathBuf,
    engine_build_dir: PathBuf,
    game_assets_dir: PathBuf,
}

impl ResolvedPlan {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn game_publish_dir(&self) -> &Path {
        &self.game_publish_dir
    }

    pub fn engine_build_dir(&self) -> &Path {
        &self.engine_build_dir
    }

    pub fn game_assets_dir(&self) -> &Path {
        &self.game_assets_dir
    }

    pub fn scenes_dir(&self) -> PathBuf {
        self.engine_build_dir.join(SCENES_DIR)
    }

    pub fn assemblies_dir(&self) -> PathBuf {
        self.engine_build_dir.join(ASSEMBLIES_DIR)
    }

    pub fn native_dir(&self) -> PathBuf {
        self.assemblies_dir().join(NATIVE_DIR)
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.engine_build_dir.join(ASSETS_DIR)
    }

    pub fn manifest_source(&self) -> PathBuf {
        self.game_publish_dir.join(MANIFEST_FILE)
    }

    pub fn manifest_destination(&self) -> PathBuf {
        self.engine_build_dir.join(MANIFEST_FILE)
    }

    /// `<publish>/runtimes/<rid>/native`
    pub fn native_runtimes_dir(&self, platform: Platform) -> PathBuf {
        self.game_publish_dir
            .join(RUNTIMES_DIR)
            .join(platform.runtime_identifier())
            .join(NATIVE_DIR)
    }
}
