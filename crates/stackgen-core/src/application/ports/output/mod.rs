//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stackgen-adapters` crate provides implementations; the CLI crate
//! provides the terminal-backed [`ProgressReporter`].

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{Component, ProjectStructure, RenderContext};
use crate::error::StackgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stackgen_adapters::filesystem::LocalFilesystem` (production)
/// - `stackgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StackgenResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> StackgenResult<()>;

    /// Mark a file executable (no-op where unsupported).
    fn set_executable(&self, path: &Path) -> StackgenResult<()>;

    /// Check if anything exists at path.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove whatever is at path (file or directory tree).
    fn remove_all(&self, path: &Path) -> StackgenResult<()>;

    /// Recursively copy the directory `from` to the new path `to`.
    fn copy_dir_all(&self, from: &Path, to: &Path) -> StackgenResult<()>;

    /// Move `from` to `to`.
    fn rename(&self, from: &Path, to: &Path) -> StackgenResult<()>;
}

/// A command line to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Some(0)
    }

    /// Stdout, or stderr when stdout is empty (`java -version` prints there).
    pub fn text(&self) -> &str {
        if self.stdout.trim().is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }
}

/// Port for running external programs.
///
/// Implemented by:
/// - `stackgen_adapters::runner::SystemToolRunner` (production)
/// - `stackgen_adapters::runner::ScriptedToolRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ToolRunner: Send + Sync {
    /// Resolve a program on `PATH`; `None` if it cannot be found.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run to completion and capture output. `Err` only when the program
    /// could not be started; a non-zero exit is reported in the output.
    fn run(&self, invocation: &Invocation) -> StackgenResult<CommandOutput>;
}

/// Port for the generated documentation set (README, CONTRIBUTING, ...).
#[cfg_attr(test, mockall::automock)]
pub trait DocumentationSource: Send + Sync {
    fn render(&self, context: &RenderContext) -> StackgenResult<ProjectStructure>;
}

/// What a [`TemplateGenerator`] should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub component: Component,
    pub project_name: String,
    /// The project root, parent of `target_dir`.
    pub project_root: PathBuf,
    /// Directory the component is generated into (does not exist yet).
    pub target_dir: PathBuf,
}

/// Port for external starter generators (Vite, Spring Initializr).
#[cfg_attr(test, mockall::automock)]
pub trait TemplateGenerator: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> StackgenResult<()>;
}

/// Port for version-control setup of a fully populated project tree.
#[cfg_attr(test, mockall::automock)]
pub trait RepositoryInitializer: Send + Sync {
    fn initialize(&self, project_root: &Path) -> StackgenResult<()>;
}

/// How a progress indicator ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressOutcome {
    Succeeded(String),
    Failed(String),
    /// Stopped without a verdict (early `?` return).
    Abandoned,
}

/// A running progress indicator. Must stop rendering once `finish` is called.
pub trait ProgressHandle: Send {
    fn finish(&mut self, outcome: ProgressOutcome);
}

/// Port for cosmetic progress display around long-running steps.
pub trait ProgressReporter: Send + Sync {
    fn start(&self, message: &str) -> Box<dyn ProgressHandle>;
}

/// Reporter that shows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

struct NoProgressHandle;

impl ProgressHandle for NoProgressHandle {
    fn finish(&mut self, _outcome: ProgressOutcome) {}
}

impl ProgressReporter for NoProgress {
    fn start(&self, _message: &str) -> Box<dyn ProgressHandle> {
        Box::new(NoProgressHandle)
    }
}

/// Scoped progress indicator.
///
/// Finishing is explicit on the happy and failure paths. On an early `?`
/// return `Drop` abandons the indicator so it never keeps running. Release
/// builds abort on panic, so no destructor runs there.
pub struct ProgressScope {
    handle: Option<Box<dyn ProgressHandle>>,
}

impl ProgressScope {
    pub fn start(reporter: &dyn ProgressReporter, message: &str) -> Self {
        Self {
            handle: Some(reporter.start(message)),
        }
    }

    pub fn succeed(mut self, message: impl Into<String>) {
        if let Some(mut handle) = self.handle.take() {
            handle.finish(ProgressOutcome::Succeeded(message.into()));
        }
    }

    pub fn fail(mut self, message: impl Into<String>) {
        if let Some(mut handle) = self.handle.take() {
            handle.finish(ProgressOutcome::Failed(message.into()));
        }
    }
}

impl Drop for ProgressScope {
    fn drop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.finish(ProgressOutcome::Abandoned);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct Recorder(Arc<Mutex<Vec<ProgressOutcome>>>);

    struct RecordingHandle(Recorder);

    impl ProgressHandle for RecordingHandle {
        fn finish(&mut self, outcome: ProgressOutcome) {
            self.0.0.lock().unwrap().push(outcome);
        }
    }

    impl ProgressReporter for Recorder {
        fn start(&self, _message: &str) -> Box<dyn ProgressHandle> {
            Box::new(RecordingHandle(self.clone()))
        }
    }

    #[test]
    fn explicit_finish_is_recorded_once() {
        let recorder = Recorder::default();
        ProgressScope::start(&recorder, "working").succeed("done");
        assert_eq!(
            *recorder.0.lock().unwrap(),
            vec![ProgressOutcome::Succeeded("done".into())]
        );
    }

    #[test]
    fn drop_abandons_unfinished_scope() {
        let recorder = Recorder::default();
        let failing = || -> Result<(), ()> {
            let _scope = ProgressScope::start(&recorder, "working");
            Err(())
        };
        assert!(failing().is_err());
        assert_eq!(*recorder.0.lock().unwrap(), vec![ProgressOutcome::Abandoned]);
    }

    #[test]
    fn command_output_falls_back_to_stderr() {
        let out = CommandOutput {
            status: Some(0),
            stdout: String::new(),
            stderr: "openjdk version \"17.0.2\"".into(),
        };
        assert!(out.text().contains("17.0.2"));
    }

    #[test]
    fn invocation_display() {
        let inv = Invocation::new("git").args(["commit", "-m", "init"]);
        assert_eq!(inv.to_string(), "git commit -m init");
    }
}
