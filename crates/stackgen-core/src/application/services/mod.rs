//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a fullstack project" or
//! "restore a directory after a failed run".

pub mod backup_service;
pub mod creation_service;
pub mod requirement_service;
pub mod rollback_service;

pub use backup_service::{BACKUP_SUFFIX, BackupManager, backup_path};
pub use creation_service::{
    CreationOrchestrator, CreationOutcome, CreationPlan, CreationPorts, CreationRequest,
    PlannedEntry,
};
pub use requirement_service::{RequirementChecker, extract_version};
pub use rollback_service::{RollbackManager, RollbackOutcome};
