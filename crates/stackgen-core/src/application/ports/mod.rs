//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stackgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations, snapshots and restores
//!   - `ToolRunner`: Locating and running external programs
//!   - `DocumentationSource`: Generated README / CONTRIBUTING / .gitignore
//!   - `TemplateGenerator`: Frontend and backend starters
//!   - `RepositoryInitializer`: git init + hooks + first commit
//!   - `ProgressReporter`: Cosmetic progress display

pub mod output;

pub use output::{
    CommandOutput, DocumentationSource, Filesystem, GenerationRequest, Invocation, NoProgress,
    ProgressHandle, ProgressOutcome, ProgressReporter, ProgressScope, RepositoryInitializer,
    TemplateGenerator, ToolRunner,
};
