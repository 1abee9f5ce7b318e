//! End-to-end creation runs against a real temporary directory.
//!
//! External programs are scripted; everything else (filesystem, backup,
//! rollback, generators, git hook) is the production code path.

use std::path::Path;
use std::sync::Arc;

use stackgen_adapters::{
    BackendSettings, BuiltinDocumentation, CallLog, ComponentGenerators, FrontendSettings,
    GitInitializer, LocalFilesystem, ScriptedToolRunner, SpringInitializrGenerator, ViteGenerator,
};
use stackgen_core::{
    application::{ApplicationError, ports::NoProgress},
    domain::DomainError,
    prelude::*,
};
use tempfile::TempDir;

fn orchestrator(runner: ScriptedToolRunner) -> (CreationOrchestrator, CallLog) {
    let log = runner.log();
    let runner: Arc<dyn ToolRunner> = Arc::new(runner);
    let filesystem: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());

    let generator = ComponentGenerators::new(
        Box::new(ViteGenerator::new(
            runner.clone(),
            filesystem.clone(),
            FrontendSettings::default(),
        )),
        Box::new(SpringInitializrGenerator::new(
            runner.clone(),
            filesystem.clone(),
            BackendSettings::default(),
        )),
    );

    let ports = CreationPorts {
        filesystem: filesystem.clone(),
        runner: runner.clone(),
        documentation: Arc::new(BuiltinDocumentation::new()),
        generator: Arc::new(generator),
        repository: Arc::new(GitInitializer::new(runner, filesystem)),
        progress: Arc::new(NoProgress),
    };
    (
        CreationOrchestrator::new(ports, RequiredVersions::default()),
        log,
    )
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn fullstack_project_has_expected_layout() {
    let tmp = TempDir::new().unwrap();
    let (orchestrator, log) =
        orchestrator(ScriptedToolRunner::all_tools_installed().simulating_side_effects());

    let outcome = orchestrator
        .create(&CreationRequest::new(
            ProjectType::Fullstack,
            "demo-app",
            tmp.path(),
        ))
        .unwrap();

    let root = tmp.path().join("demo-app");
    assert_eq!(outcome.path, root);
    assert_eq!(outcome.state, CreationState::Succeeded);
    assert!(root.join("demo-app-frontend").is_dir());
    assert!(root.join("demo-app-backend").is_dir());
    assert!(root.join(".git").is_dir());
    assert!(root.join("README.md").is_file());
    assert!(root.join("docs/CONTRIBUTING.md").is_file());
    assert!(root.join(".gitignore").is_file());
    assert!(root.join("demo-app-frontend/tailwind.config.js").is_file());
    assert!(root.join("demo-app-backend/pom.xml").is_file());
    assert!(!root.join("demo-app-backend.tgz").exists());
    assert_eq!(entries(tmp.path()), vec!["demo-app"]);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(root.join(".git/hooks/pre-commit"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    let commands = log.commands();
    let git_init = commands.iter().position(|c| c == "git init").unwrap();
    let npm_create = commands
        .iter()
        .position(|c| c.starts_with("npm create"))
        .unwrap();
    let curl = commands.iter().position(|c| c.starts_with("curl")).unwrap();
    assert!(npm_create < curl && curl < git_init);
    assert_eq!(commands.last().unwrap(), "git commit -m Initial commit");
}

#[test]
fn failure_after_first_write_leaves_nothing_behind() {
    let tmp = TempDir::new().unwrap();
    let (orchestrator, _) = orchestrator(
        ScriptedToolRunner::all_tools_installed()
            .simulating_side_effects()
            .failing("npm", &["install"], "npm ERR! code ECONNRESET"),
    );

    let err = orchestrator
        .create(&CreationRequest::new(
            ProjectType::Frontend,
            "demo-app",
            tmp.path(),
        ))
        .unwrap_err();

    assert!(err.was_rolled_back());
    assert!(matches!(
        err,
        StackgenError::Application(ApplicationError::Mutation {
            stage: CreationState::TemplateGenerating,
            ..
        })
    ));
    assert!(entries(tmp.path()).is_empty());
}

#[test]
fn invalid_name_runs_nothing_and_creates_nothing() {
    let tmp = TempDir::new().unwrap();
    let (orchestrator, log) = orchestrator(ScriptedToolRunner::all_tools_installed());

    let err = orchestrator
        .create(&CreationRequest::new(ProjectType::Frontend, "ab", tmp.path()))
        .unwrap_err();

    assert!(matches!(
        err,
        StackgenError::Domain(DomainError::InvalidProjectName { .. })
    ));
    assert!(log.commands().is_empty());
    assert!(entries(tmp.path()).is_empty());
}

#[test]
fn old_node_is_rejected_before_any_write() {
    let tmp = TempDir::new().unwrap();
    let (orchestrator, _) = orchestrator(
        ScriptedToolRunner::all_tools_installed().with_version("node", "v16.20.2"),
    );

    let err = orchestrator
        .create(&CreationRequest::new(
            ProjectType::Frontend,
            "demo-app",
            tmp.path(),
        ))
        .unwrap_err();

    assert!(matches!(
        err,
        StackgenError::Application(ApplicationError::Requirements(_))
    ));
    assert!(entries(tmp.path()).is_empty());
}

#[test]
fn existing_directory_is_left_untouched() {
    let tmp = TempDir::new().unwrap();
    let existing = tmp.path().join("demo-app");
    std::fs::create_dir(&existing).unwrap();
    std::fs::write(existing.join("keep.txt"), "mine").unwrap();

    let (orchestrator, _) =
        orchestrator(ScriptedToolRunner::all_tools_installed().simulating_side_effects());
    let err = orchestrator
        .create(&CreationRequest::new(
            ProjectType::Frontend,
            "demo-app",
            tmp.path(),
        ))
        .unwrap_err();

    assert!(matches!(
        err,
        StackgenError::Application(ApplicationError::DirectoryConflict { .. })
    ));
    assert_eq!(
        std::fs::read_to_string(existing.join("keep.txt")).unwrap(),
        "mine"
    );
}
