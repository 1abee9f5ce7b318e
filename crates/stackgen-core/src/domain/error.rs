// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::project_name::NameViolation;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside application errors)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid project name '{name}': {}", format_violations(.violations))]
    InvalidProjectName {
        name: String,
        violations: Vec<NameViolation>,
    },

    #[error("unknown project type '{0}'")]
    UnknownProjectType(String),

    #[error("invalid version string '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("duplicate path in project structure: {path}")]
    DuplicatePath { path: String },
}

fn format_violations(violations: &[NameViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { violations, .. } => {
                let mut out: Vec<String> = violations.iter().map(|v| v.hint().into()).collect();
                out.push("Examples: my-project, project123, my-cool-project".into());
                out
            }
            Self::UnknownProjectType(_) => vec![
                "Supported types:".into(),
                "  • frontend   - Vite + React + TypeScript + Tailwind".into(),
                "  • backend    - Spring Boot (Spring Initializr)".into(),
                "  • fullstack  - both of the above".into(),
            ],
            Self::InvalidVersion { .. } => vec![
                "Versions must look like 18, 18.2 or v18.2.0".into(),
                "Check the requirements section of your configuration".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::UnknownProjectType(_)
            | Self::InvalidVersion { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
