//! CLI error type.
//!
//! Wraps core errors and adds the failures only the CLI can produce
//! (missing flags, configuration, terminal I/O). Every variant carries
//! actionable suggestions and maps to exit code 1.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use stackgen_core::error::{ErrorCategory as CoreCategory, StackgenError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A flag required for project creation was not given.
    #[error("Missing required argument: {flag}")]
    MissingArgument { flag: &'static str },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `stackgen-core`.
    #[error(transparent)]
    Core(#[from] StackgenError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingArgument { flag } => vec![
                format!("Pass {flag}"),
                "Example: stackgen -t fullstack -n my-app".into(),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { .. } => vec![
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Check STACKGEN_* environment variables".into(),
                "Use 'stackgen init --force' to write a fresh default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingArgument { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::Requirement => ErrorCategory::Environment,
                CoreCategory::Backup | CoreCategory::Mutation | CoreCategory::Internal => {
                    ErrorCategory::Internal
                }
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS. Every failure is 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        if self.was_rolled_back() {
            output.push_str(&format!(
                "\n{} {}\n",
                "\u{26a0}".yellow().bold(), // ⚠
                "Partial changes were rolled back.".yellow()
            ));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        if self.was_rolled_back() {
            out.push_str("\nWarning: partial changes were rolled back.\n");
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Environment => tracing::warn!("Environment not ready: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }

    fn was_rolled_back(&self) -> bool {
        matches!(self, Self::Core(core) if core.was_rolled_back())
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments, name clashes).
    UserError,
    /// Missing or outdated external tools.
    Environment,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait converting I/O results into [`CliError`] with a
/// descriptive context message.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use stackgen_core::{
        application::ApplicationError,
        domain::{CreationState, DomainError},
    };

    fn mutation_error() -> CliError {
        CliError::Core(
            ApplicationError::Mutation {
                stage: CreationState::TemplateGenerating,
                source: Box::new(
                    ApplicationError::CommandFailed {
                        command: "npm install".into(),
                        status: Some(1),
                        stderr: "ERR!".into(),
                    }
                    .into(),
                ),
            }
            .into(),
        )
    }

    #[test]
    fn missing_argument_names_the_flag() {
        let err = CliError::MissingArgument { flag: "--name" };
        assert_eq!(err.to_string(), "Missing required argument: --name");
        assert!(err.suggestions().iter().any(|s| s.contains("--name")));
    }

    #[test]
    fn every_error_exits_with_one() {
        let errors = [
            CliError::MissingArgument { flag: "--type" },
            CliError::ConfigError {
                message: "x".into(),
                source: None,
            },
            CliError::Core(DomainError::UnknownProjectType("mobile".into()).into()),
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            },
            mutation_error(),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn core_categories_map_to_cli_categories() {
        let conflict = CliError::Core(
            ApplicationError::DirectoryConflict {
                path: PathBuf::from("/tmp/demo-app"),
            }
            .into(),
        );
        assert_eq!(conflict.category(), ErrorCategory::UserError);
        assert_eq!(mutation_error().category(), ErrorCategory::Internal);
    }

    #[test]
    fn core_suggestions_pass_through() {
        let err = CliError::Core(
            ApplicationError::DirectoryConflict {
                path: PathBuf::from("/tmp/demo-app"),
            }
            .into(),
        );
        assert!(err.suggestions().iter().any(|s| s.contains("different project name")));
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::MissingArgument { flag: "--type" };
        let s = err.format_plain(false);
        assert!(s.contains("Error: Missing required argument: --type"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_reports_rollback() {
        let s = mutation_error().format_plain(true);
        assert!(s.contains("rolled back"));
        assert!(s.contains("Caused by:"));
        assert!(!s.contains("Use -v"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
