//! Creation Service - main application orchestrator.
//!
//! This service coordinates the entire creation workflow:
//! 1. Validate the name and check installed tools
//! 2. Refuse to touch an existing directory, snapshot anything in the way
//! 3. Scaffold docs, generate components, initialize git
//! 4. Roll back on any failure in step 3, discard the snapshot on success
//!
//! Nothing in steps 1 and 2 touches the filesystem.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, BackupError,
        ports::{
            DocumentationSource, Filesystem, GenerationRequest, ProgressReporter, ProgressScope,
            RepositoryInitializer, TemplateGenerator, ToolRunner,
        },
        services::{BackupManager, RequirementChecker, RollbackManager, backup_path},
    },
    domain::{
        CreationState, DomainValidator as validator, FsEntry, ProjectName, ProjectStructure,
        ProjectType, RenderContext, RequiredVersions,
    },
    error::{StackgenError, StackgenResult},
};

/// Input of a creation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationRequest {
    pub project_type: ProjectType,
    pub name: String,
    /// Directory the project is created in.
    pub parent_dir: PathBuf,
}

impl CreationRequest {
    pub fn new(
        project_type: ProjectType,
        name: impl Into<String>,
        parent_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_type,
            name: name.into(),
            parent_dir: parent_dir.into(),
        }
    }
}

/// The adapters a [`CreationOrchestrator`] drives.
#[derive(Clone)]
pub struct CreationPorts {
    pub filesystem: Arc<dyn Filesystem>,
    pub runner: Arc<dyn ToolRunner>,
    pub documentation: Arc<dyn DocumentationSource>,
    pub generator: Arc<dyn TemplateGenerator>,
    pub repository: Arc<dyn RepositoryInitializer>,
    pub progress: Arc<dyn ProgressReporter>,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationOutcome {
    /// Absolute project root.
    pub path: PathBuf,
    pub project_type: ProjectType,
    /// Absolute component directories, in generation order.
    pub components: Vec<PathBuf>,
    pub state: CreationState,
}

/// What a run would create, computed without touching anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationPlan {
    pub target: PathBuf,
    pub project_type: ProjectType,
    /// Relative paths, directories end with `/`.
    pub entries: Vec<PlannedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub path: String,
    pub depth: usize,
    /// Who produces the entry when it is not written directly.
    pub note: Option<String>,
}

impl CreationPlan {
    /// Indented tree, one line per entry, rooted at the project name.
    pub fn tree_lines(&self) -> Vec<String> {
        let root = self
            .target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut lines = vec![format!("{root}/")];
        for entry in &self.entries {
            let indent = "  ".repeat(entry.depth);
            let leaf = entry
                .path
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or_default();
            let slash = if entry.path.ends_with('/') { "/" } else { "" };
            match &entry.note {
                Some(note) => lines.push(format!("{indent}{leaf}{slash}  ({note})")),
                None => lines.push(format!("{indent}{leaf}{slash}")),
            }
        }
        lines
    }
}

/// Tracks the state machine of one run and logs every transition.
struct CreationRun {
    state: CreationState,
}

impl CreationRun {
    fn start() -> Self {
        debug!(state = %CreationState::Validating, "creation started");
        Self {
            state: CreationState::Validating,
        }
    }

    fn state(&self) -> CreationState {
        self.state
    }

    fn advance(&mut self, next: CreationState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} -> {}",
            self.state,
            next
        );
        if !self.state.can_transition_to(next) {
            warn!(from = %self.state, to = %next, "unexpected state transition");
        }
        debug!(from = %self.state, to = %next, "state transition");
        self.state = next;
    }
}

/// Main creation service.
pub struct CreationOrchestrator {
    ports: CreationPorts,
    checker: RequirementChecker,
    backups: BackupManager,
    rollback: RollbackManager,
    required: RequiredVersions,
}

impl CreationOrchestrator {
    pub fn new(ports: CreationPorts, required: RequiredVersions) -> Self {
        Self {
            checker: RequirementChecker::new(ports.runner.clone()),
            backups: BackupManager::new(ports.filesystem.clone()),
            rollback: RollbackManager::new(ports.filesystem.clone()),
            ports,
            required,
        }
    }

    /// Create a project. On failure after the first write, the target is
    /// rolled back before the error is returned.
    #[instrument(
        skip_all,
        fields(
            project_type = %request.project_type,
            name = %request.name,
            parent = %request.parent_dir.display()
        )
    )]
    pub fn create(&self, request: &CreationRequest) -> StackgenResult<CreationOutcome> {
        info!("Creating {} project", request.project_type);
        let mut run = CreationRun::start();

        let (name, target) = match self.prepare(request) {
            Ok(prepared) => prepared,
            Err(e) => {
                run.advance(CreationState::Failed);
                return Err(e);
            }
        };

        run.advance(CreationState::BackingUp);
        if let Err(e) = self.backups.create_backup(&target) {
            run.advance(CreationState::Failed);
            return Err(ApplicationError::from(e).into());
        }

        match self.mutate(&mut run, &name, request.project_type, &target) {
            Ok(components) => {
                if let Err(e) = self.backups.discard_backup(&target) {
                    warn!(error = %e, "could not discard backup");
                }
                run.advance(CreationState::Succeeded);
                info!(path = %target.display(), "Project created successfully");
                Ok(CreationOutcome {
                    path: target,
                    project_type: request.project_type,
                    components,
                    state: run.state(),
                })
            }
            Err(e) => {
                let stage = run.state();
                error!(%stage, error = %e, "creation failed, rolling back");
                run.advance(CreationState::Failed);
                let outcome = self.rollback.rollback(&target);
                run.advance(CreationState::RolledBack);
                info!(%outcome, "rollback finished");
                Err(ApplicationError::Mutation {
                    stage,
                    source: Box::new(e),
                }
                .into())
            }
        }
    }

    /// Validate and compute what `create` would produce. Tool versions are
    /// not probed.
    pub fn plan(&self, request: &CreationRequest) -> StackgenResult<CreationPlan> {
        let name = validator::project_name(&request.name)?;
        let target = self.target_for(&name, &request.parent_dir)?;
        self.ensure_free(&target)?;
        if self.backups.has_backup(&target) {
            return Err(ApplicationError::from(BackupError::Collision {
                backup: backup_path(&target),
            })
            .into());
        }

        let context = RenderContext::new(&name, request.project_type);
        let structure = self.ports.documentation.render(&context)?;

        let mut entries: Vec<PlannedEntry> = structure
            .entries()
            .iter()
            .map(|entry| {
                let path = entry.path().to_string();
                PlannedEntry {
                    depth: entry.path().depth(),
                    path: match entry {
                        FsEntry::Directory(_) => format!("{path}/"),
                        FsEntry::File(_) => path,
                    },
                    note: None,
                }
            })
            .collect();

        for component in request.project_type.components() {
            entries.push(PlannedEntry {
                path: format!("{}/", component.dir_name(name.as_str())),
                depth: 1,
                note: Some(format!("{component} template")),
            });
        }
        entries.push(PlannedEntry {
            path: ".git/".into(),
            depth: 1,
            note: Some("git repository with pre-commit hook".into()),
        });

        Ok(CreationPlan {
            target,
            project_type: request.project_type,
            entries,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Validating: name, tools, free target. No filesystem writes.
    fn prepare(&self, request: &CreationRequest) -> StackgenResult<(ProjectName, PathBuf)> {
        let name = validator::project_name(&request.name)?;

        let scope = ProgressScope::start(self.ports.progress.as_ref(), "Checking requirements");
        match self.checker.check_for(request.project_type, &self.required) {
            Ok(found) => {
                let summary = found
                    .iter()
                    .map(|(tool, version)| format!("{tool} {version}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                scope.succeed(format!("Requirements met: {summary}"));
            }
            Err(e) => {
                scope.fail("Requirements not met");
                return Err(e);
            }
        }

        let target = self.target_for(&name, &request.parent_dir)?;
        self.ensure_free(&target)?;
        Ok((name, target))
    }

    fn target_for(&self, name: &ProjectName, parent: &Path) -> StackgenResult<PathBuf> {
        let target = parent.join(name.as_str());
        std::path::absolute(&target).map_err(|e| {
            ApplicationError::FilesystemError {
                path: target,
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn ensure_free(&self, target: &Path) -> StackgenResult<()> {
        if self.ports.filesystem.exists(target) {
            return Err(ApplicationError::DirectoryConflict {
                path: target.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    /// Every step that writes. The caller rolls back on `Err`.
    fn mutate(
        &self,
        run: &mut CreationRun,
        name: &ProjectName,
        project_type: ProjectType,
        target: &Path,
    ) -> StackgenResult<Vec<PathBuf>> {
        run.advance(CreationState::Scaffolding);
        let context = RenderContext::new(name, project_type);
        let structure = self.ports.documentation.render(&context)?;
        self.write_structure(target, &structure)?;
        info!(entries = structure.entry_count(), "Scaffolding written");

        run.advance(CreationState::TemplateGenerating);
        let mut components = Vec::new();
        for component in project_type.components() {
            let dir = target.join(component.dir_name(name.as_str()));
            let request = GenerationRequest {
                component: *component,
                project_name: name.to_string(),
                project_root: target.to_path_buf(),
                target_dir: dir.clone(),
            };

            let scope = ProgressScope::start(
                self.ports.progress.as_ref(),
                &format!("Generating {component} template"),
            );
            if let Err(e) = self.ports.generator.generate(&request) {
                scope.fail(format!("{component} template failed"));
                return Err(e);
            }
            scope.succeed(format!("{component} template ready"));
            components.push(dir);
        }

        run.advance(CreationState::GitInitializing);
        let scope = ProgressScope::start(self.ports.progress.as_ref(), "Initializing git repository");
        if let Err(e) = self.ports.repository.initialize(target) {
            scope.fail("git setup failed");
            return Err(e);
        }
        scope.succeed("git repository initialized");

        Ok(components)
    }

    /// Write project structure under `root`, creating `root` first.
    fn write_structure(&self, root: &Path, structure: &ProjectStructure) -> StackgenResult<()> {
        validator::validate_project_structure(structure).map_err(StackgenError::Domain)?;

        self.ports.filesystem.create_dir_all(root)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.ports.filesystem.create_dir_all(&root.join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.ports.filesystem.create_dir_all(parent)?;
                    }

                    self.ports.filesystem.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.ports.filesystem.set_executable(&path)?;
                    }
                }
            }
        }

        Ok(())
    }
}
