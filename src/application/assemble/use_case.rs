//! Assemble Use Case
//!
//! Rebuilds the engine and the game, then lays out the engine build
//! directory so the engine can start the game from it.
//!
//! ## Flow
//!
//! 1. Detect platform and check the path plan (fails before anything is touched)
//! 2. Clean previous engine build and game publish output
//! 3. `dotnet build` the engine, then `dotnet publish` the game
//! 4. Create `Scenes/` and `Assemblies/native/`
//! 5. Copy `project.json`, top-level `*.dll`, and the `Assets/` tree
//! 6. Copy `runtimes/<rid>/native/*` into `Assemblies/`

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::ports::{
    AssembleEvent, AssembleEventSink, AssembleStep, BuildRunner, FileSystem, NoopEventSink,
};
use crate::domain::value_objects::{BuildCommand, PathPlan, Platform, ResolvedPlan};
use crate::error::{AssembleError, AssembleResult};

use super::options::AssembleOptions;
use super::result::AssembleReport;

/// Assemble use case - one full deployment run
pub struct AssembleUseCase<FS, BR>
where
    FS: FileSystem,
    BR: BuildRunner,
{
    fs: FS,
    runner: BR,
}

impl<FS, BR> AssembleUseCase<FS, BR>
where
    FS: FileSystem,
    BR: BuildRunner,
{
    pub fn new(fs: FS, runner: BR) -> Self {
        Self { fs, runner }
    }

    /// Run every step silently
    pub fn execute(&self, options: &AssembleOptions) -> AssembleResult<AssembleReport> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Run every step in order, reporting progress to `events`.
    ///
    /// Stops at the first error. Steps already done are not undone, so a
    /// failed build leaves the engine build directory removed.
    pub fn execute_with_events(
        &self,
        options: &AssembleOptions,
        events: Arc<dyn AssembleEventSink>,
    ) -> AssembleResult<AssembleReport> {
        let events = events.as_ref();

        let platform = Platform::from_host(&options.host)?;
        let plan = options
            .plan
            .resolve(&options.root)
            .map_err(|e| AssembleError::Config {
                file: options.root.clone(),
                message: e.to_string(),
            })?;
        events.on_event(AssembleEvent::Started {
            root: options.root.clone(),
            platform,
        });

        let mut report = AssembleReport::new(platform, plan.engine_build_dir());

        step(events, AssembleStep::Clean, || {
            report.removed = self.clean(&plan, options.skip_build, events)?;
            Ok(())
        })?;

        if options.skip_build {
            events.on_event(AssembleEvent::Skipped {
                path: plan.game_publish_dir().to_path_buf(),
                reason: "build skipped, reusing publish output".to_string(),
            });
        } else {
            step(events, AssembleStep::Build, || {
                report.builds =
                    self.build(&options.plan, plan.root(), &options.build_tool, events)?;
                Ok(())
            })?;
        }

        step(events, AssembleStep::Layout, || {
            self.prepare_layout(&plan, events)
        })?;

        step(events, AssembleStep::CopyGameFiles, || {
            report.manifest_copied = self.copy_manifest(&plan, events)?;
            events.on_event(AssembleEvent::Progress {
                step: AssembleStep::CopyGameFiles,
            });

            report.binaries = self.copy_binaries(&plan, events)?;
            events.on_event(AssembleEvent::Progress {
                step: AssembleStep::CopyGameFiles,
            });

            report.asset_files = self.copy_assets(&plan, events)?;
            events.on_event(AssembleEvent::Progress {
                step: AssembleStep::CopyGameFiles,
            });
            Ok(())
        })?;

        step(events, AssembleStep::CopyNativeRuntimes, || {
            report.native_libraries = self.copy_native_runtimes(&plan, platform, events)?;
            Ok(())
        })?;

        events.on_event(AssembleEvent::Completed {
            binaries: report.binaries.len(),
            native_libraries: report.native_libraries.len(),
            asset_files: report.asset_files.unwrap_or(0),
            manifest: report.manifest_copied,
        });

        Ok(report)
    }

    /// Remove the previous engine build and, unless kept, the publish output.
    ///
    /// Missing paths are fine. Returns what was actually removed.
    pub fn clean(
        &self,
        plan: &ResolvedPlan,
        keep_publish_output: bool,
        events: &dyn AssembleEventSink,
    ) -> AssembleResult<Vec<PathBuf>> {
        let mut targets = vec![plan.engine_build_dir()];
        if !keep_publish_output {
            targets.push(plan.game_publish_dir());
        }

        let mut removed = Vec::new();
        for target in targets {
            if self.fs.remove_all(target)? {
                events.on_event(AssembleEvent::PathRemoved {
                    path: target.to_path_buf(),
                });
                removed.push(target.to_path_buf());
            }
        }

        Ok(removed)
    }

    /// Build the engine, then publish the game.
    ///
    /// The publish never runs if the engine build fails.
    pub fn build(
        &self,
        paths: &PathPlan,
        root: &Path,
        tool: &str,
        events: &dyn AssembleEventSink,
    ) -> AssembleResult<Vec<String>> {
        let commands = [
            BuildCommand::engine_build(tool, paths),
            BuildCommand::game_publish(tool, paths),
        ];

        let mut ran = Vec::with_capacity(commands.len());
        for command in &commands {
            let line = command.display();
            events.on_event(AssembleEvent::BuildStarted {
                command: line.clone(),
            });

            let output = self.runner.run(command, root)?;
            events.on_event(AssembleEvent::BuildFinished {
                command: line.clone(),
                success: output.success,
            });

            if !output.success {
                return Err(AssembleError::BuildFailed {
                    command: line,
                    code: output.code,
                });
            }
            ran.push(line);
        }

        Ok(ran)
    }

    /// Ensure `Scenes/` and `Assemblies/native/` exist
    pub fn prepare_layout(
        &self,
        plan: &ResolvedPlan,
        events: &dyn AssembleEventSink,
    ) -> AssembleResult<()> {
        for dir in [plan.scenes_dir(), plan.native_dir()] {
            self.fs.create_dir_all(&dir)?;
            if events.wants_detailed_events() {
                events.on_event(AssembleEvent::DirectoryCreated { path: dir });
            }
            events.on_event(AssembleEvent::Progress {
                step: AssembleStep::Layout,
            });
        }
        Ok(())
    }

    /// Copy `project.json` to the engine build root if the publish produced one
    pub fn copy_manifest(
        &self,
        plan: &ResolvedPlan,
        events: &dyn AssembleEventSink,
    ) -> AssembleResult<bool> {
        let source = plan.manifest_source();
        if !self.fs.exists(&source) {
            skipped(events, source, "no project.json in publish output");
            return Ok(false);
        }

        self.fs.create_dir_all(plan.engine_build_dir())?;
        let destination = plan.manifest_destination();
        self.fs.copy_file(&source, &destination)?;
        copied(events, source, destination);
        Ok(true)
    }

    /// Copy every top-level `*.dll` (any case) from the publish output to `Assemblies/`
    pub fn copy_binaries(
        &self,
        plan: &ResolvedPlan,
        events: &dyn AssembleEventSink,
    ) -> AssembleResult<Vec<PathBuf>> {
        let publish = plan.game_publish_dir();
        if !self.fs.is_dir(publish) {
            skipped(events, publish.to_path_buf(), "publish output missing");
            return Ok(Vec::new());
        }

        let destination_dir = plan.assemblies_dir();
        self.fs.create_dir_all(&destination_dir)?;

        let mut copied_files = Vec::new();
        for entry in self.fs.read_dir(publish)? {
            if !entry.is_file() || !is_managed_binary(&entry.name) {
                continue;
            }
            let destination = destination_dir.join(&entry.file_name);
            self.fs.copy_file(&entry.path, &destination)?;
            copied(events, entry.path, destination.clone());
            copied_files.push(destination);
        }

        Ok(copied_files)
    }

    /// Replace the engine `Assets/` with a copy of the game's asset tree.
    ///
    /// Without a source tree the destination is left as it is.
    pub fn copy_assets(
        &self,
        plan: &ResolvedPlan,
        events: &dyn AssembleEventSink,
    ) -> AssembleResult<Option<usize>> {
        let source = plan.game_assets_dir();
        if !self.fs.exists(source) {
            skipped(events, source.to_path_buf(), "no game assets");
            return Ok(None);
        }

        let destination = plan.assets_dir();
        if self.fs.remove_all(&destination)? && events.wants_detailed_events() {
            events.on_event(AssembleEvent::PathRemoved {
                path: destination.clone(),
            });
        }

        let count = self.fs.copy_tree(source, &destination)?;
        copied(events, source.to_path_buf(), destination);
        Ok(Some(count))
    }

    /// Copy regular files from `runtimes/<rid>/native` into `Assemblies/`
    pub fn copy_native_runtimes(
        &self,
        plan: &ResolvedPlan,
        platform: Platform,
        events: &dyn AssembleEventSink,
    ) -> AssembleResult<Vec<PathBuf>> {
        let natives = plan.native_runtimes_dir(platform);
        if !self.fs.is_dir(&natives) {
            skipped(events, natives, "no native runtimes for platform");
            return Ok(Vec::new());
        }

        let destination_dir = plan.assemblies_dir();
        self.fs.create_dir_all(&destination_dir)?;

        let mut copied_files = Vec::new();
        for entry in self.fs.read_dir(&natives)? {
            if !entry.is_file() {
                continue;
            }
            let destination = destination_dir.join(&entry.file_name);
            self.fs.copy_file(&entry.path, &destination)?;
            copied(events, entry.path, destination.clone());
            copied_files.push(destination);
        }

        Ok(copied_files)
    }
}

/// Run `body` wrapped in step start/finish events
fn step<F>(events: &dyn AssembleEventSink, step: AssembleStep, body: F) -> AssembleResult<()>
where
    F: FnOnce() -> AssembleResult<()>,
{
    events.on_event(AssembleEvent::StepStarted { step });
    body()?;
    events.on_event(AssembleEvent::StepFinished { step });
    Ok(())
}

fn copied(events: &dyn AssembleEventSink, from: PathBuf, to: PathBuf) {
    if events.wants_detailed_events() {
        events.on_event(AssembleEvent::FileCopied { from, to });
    }
}

fn skipped(events: &dyn AssembleEventSink, path: PathBuf, reason: &str) {
    if events.wants_detailed_events() {
        events.on_event(AssembleEvent::Skipped {
            path,
            reason: reason.to_string(),
        });
    }
}

/// `.dll` suffix, ASCII case-insensitive
pub fn is_managed_binary(name: &str) -> bool {
    name.len() >= 4
        && name.is_char_boundary(name.len() - 4)
        && name[name.len() - 4..].eq_ignore_ascii_case(".dll")
}
