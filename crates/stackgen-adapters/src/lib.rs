//! Infrastructure adapters for stackgen.
//!
//! This crate implements the ports defined in `stackgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod documentation;
pub mod filesystem;
pub mod generators;
pub mod git;
pub mod runner;

// Re-export commonly used adapters
pub use documentation::BuiltinDocumentation;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generators::{
    BackendSettings, ComponentGenerators, FrontendSettings, SpringInitializrGenerator,
    ViteGenerator,
};
pub use git::GitInitializer;
pub use runner::{CallLog, ScriptedToolRunner, SystemToolRunner};
