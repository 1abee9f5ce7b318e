// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for stackgen.
//!
//! This module contains pure business logic: version comparison, project
//! name rules, tool requirements and the creation state machine.
//! All I/O (filesystem, processes, network) is reached through ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: All domain objects are Clone + PartialEq
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod project_name;
pub mod requirements;
pub mod state;
pub mod value_objects;
pub mod version;

mod validation;

// Re-exports for convenience
pub use entities::{
    common::{Permissions, RelativePath},
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    render_context::RenderContext,
};

pub use error::{DomainError, ErrorCategory};
pub use project_name::{NameValidator, NameViolation, ProjectName, ValidationReport};
pub use requirements::{RequiredVersions, ToolRequirement};
pub use state::CreationState;
pub use value_objects::{Component, ProjectType, Tool};
pub use version::{Version, VersionOrdering, compare, compare_str};

pub use validation::DomainValidator;
