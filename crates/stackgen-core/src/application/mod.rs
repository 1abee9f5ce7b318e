//! Application layer for stackgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CreationOrchestrator, RequirementChecker,
//!   BackupManager, RollbackManager)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BackupManager, CreationOrchestrator, CreationOutcome, CreationPlan, CreationPorts,
    CreationRequest, PlannedEntry, RequirementChecker, RollbackManager, RollbackOutcome,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    DocumentationSource, Filesystem, ProgressReporter, RepositoryInitializer, TemplateGenerator,
    ToolRunner,
};

pub use error::{ApplicationError, BackupError, RequirementFailure};
