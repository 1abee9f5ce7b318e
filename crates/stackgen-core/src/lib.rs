//! stackgen core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the stackgen
//! project bootstrapper, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stackgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (CreationOrchestrator, Requirement-    │
//! │   Checker, BackupManager, Rollback)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ToolRunner, Generators...) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   stackgen-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Version, ProjectName, CreationState)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stackgen_core::prelude::*;
//!
//! let orchestrator = CreationOrchestrator::new(ports, RequiredVersions::default());
//! let outcome = orchestrator.create(&CreationRequest::new(
//!     ProjectType::Fullstack,
//!     "demo-app",
//!     ".",
//! ))?;
//! println!("created {}", outcome.path.display());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BackupManager, CreationOrchestrator, CreationOutcome, CreationPlan, CreationPorts,
        CreationRequest, RequirementChecker, RollbackManager, RollbackOutcome,
        ports::{
            DocumentationSource, Filesystem, GenerationRequest, ProgressReporter,
            RepositoryInitializer, TemplateGenerator, ToolRunner,
        },
    };
    pub use crate::domain::{
        Component, CreationState, NameValidator, ProjectName, ProjectType, RequiredVersions,
        Tool, Version, VersionOrdering,
    };
    pub use crate::error::{StackgenError, StackgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
