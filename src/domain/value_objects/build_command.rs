//! Build command value object - one external build tool invocation

use std::path::PathBuf;

use super::plan::PathPlan;

/// Which of the two builds a command performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildKind {
    /// `dotnet build` of the engine
    Engine,
    /// `dotnet publish` of the game
    Game,
}

impl BuildKind {
    pub fn verb(&self) -> &'static str {
        match self {
            BuildKind::Engine => "build",
            BuildKind::Game => "publish",
        }
    }
}

/// An external build invocation: `<program> <verb> <project>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub kind: BuildKind,
    pub program: String,
    /// Project descriptor, relative to the working directory the runner uses
    pub project: PathBuf,
}

impl BuildCommand {
    pub fn new(kind: BuildKind, program: impl Into<String>, project: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            program: program.into(),
            project: project.into(),
        }
    }

    pub fn engine_build(program: &str, plan: &PathPlan) -> Self {
        Self::new(BuildKind::Engine, program, plan.engine_project.clone())
    }

    pub fn game_publish(program: &str, plan: &PathPlan) -> Self {
        Self::new(BuildKind::Game, program, plan.game_project.clone())
    }

    /// Arguments after the program name
    pub fn args(&self) -> Vec<String> {
        vec![
            self.kind.verb().to_string(),
            self.project.display().to_string(),
        ]
    }

    /// Human-readable command line
    pub fn display(&self) -> String {
        format!("{} {}", self.program, self.args().join(" "))
    }
}

impl std::fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
