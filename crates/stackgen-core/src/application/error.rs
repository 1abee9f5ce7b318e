//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{CreationState, Tool, Version};
use crate::error::{ErrorCategory, StackgenError};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// One or more tools are missing or too old.
    #[error("Requirement check failed: {}", join_failures(.0))]
    Requirements(Vec<RequirementFailure>),

    /// Target directory already exists.
    #[error("Directory already exists: {path}")]
    DirectoryConflict { path: PathBuf },

    /// Snapshot could not be taken; nothing was modified.
    #[error(transparent)]
    Backup(#[from] BackupError),

    /// A mutating step failed; the target has been rolled back.
    #[error("Project creation failed while {stage}: {source}")]
    Mutation {
        stage: CreationState,
        #[source]
        source: Box<StackgenError>,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external command ran but reported failure.
    #[error("Command `{command}` failed{}: {stderr}", status_suffix(.status))]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    /// An external command could not be started at all.
    #[error("Could not run `{command}`: {reason}")]
    CommandUnavailable { command: String, reason: String },
}

fn join_failures(failures: &[RequirementFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn status_suffix(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

/// Why a single tool requirement was not met.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RequirementFailure {
    #[error("{tool} is not installed or not on PATH")]
    ToolNotFound { tool: Tool },

    #[error("{tool} {found} is older than the required {required}")]
    VersionTooLow {
        tool: Tool,
        found: Version,
        required: Version,
    },

    #[error("could not read a version from `{program}` output: {output}")]
    UnparsableVersion { tool: Tool, program: String, output: String },
}

impl RequirementFailure {
    pub fn tool(&self) -> Tool {
        match self {
            Self::ToolNotFound { tool }
            | Self::VersionTooLow { tool, .. }
            | Self::UnparsableVersion { tool, .. } => *tool,
        }
    }
}

/// Failures while snapshotting a directory.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BackupError {
    /// A backup from an earlier run is in the way. It is never overwritten.
    #[error("Backup path {backup} already exists (left over from an earlier run?)")]
    Collision { backup: PathBuf },

    #[error("Failed to back up {path}: {reason}")]
    CopyFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Requirements(failures) => {
                let mut out = Vec::new();
                for failure in failures {
                    let tool = failure.tool();
                    match failure {
                        RequirementFailure::VersionTooLow { required, .. } => out.push(format!(
                            "Upgrade {tool} to {required} or newer: {}",
                            tool.install_hint()
                        )),
                        _ => out.push(format!("Install {tool}: {}", tool.install_hint())),
                    }
                }
                out.push("Minimum versions can be changed in the [requirements] config section".into());
                out
            }
            Self::DirectoryConflict { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::Backup(BackupError::Collision { backup }) => vec![
                format!("Inspect and remove the stale backup: {}", backup.display()),
                "Backups are never overwritten automatically".into(),
            ],
            Self::Backup(BackupError::CopyFailed { .. }) | Self::FilesystemError { .. } => vec![
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::Mutation { source, .. } => {
                let mut out = vec!["All partial changes were rolled back".into()];
                out.extend(source.suggestions());
                out
            }
            Self::CommandFailed { command, .. } | Self::CommandUnavailable { command, .. } => vec![
                format!("Try running `{command}` manually to see the full output"),
                "Check your network connection for downloads and package installs".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Requirements(_) => ErrorCategory::Requirement,
            Self::DirectoryConflict { .. } => ErrorCategory::Conflict,
            Self::Backup(_) => ErrorCategory::Backup,
            Self::Mutation { .. } => ErrorCategory::Mutation,
            Self::FilesystemError { .. }
            | Self::CommandFailed { .. }
            | Self::CommandUnavailable { .. } => ErrorCategory::Internal,
        }
    }
}
