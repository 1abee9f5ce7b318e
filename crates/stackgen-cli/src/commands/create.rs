//! Project creation, the default command.
//!
//! Responsibility: turn flags into a `CreationRequest`, wire the production
//! adapters, call the orchestrator and display results.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use stackgen_adapters::{
    BuiltinDocumentation, ComponentGenerators, GitInitializer, LocalFilesystem,
    SpringInitializrGenerator, SystemToolRunner, ViteGenerator,
};
use stackgen_core::{
    application::{
        CreationOrchestrator, CreationOutcome, CreationPlan, CreationPorts, CreationRequest,
        ports::{Filesystem, ToolRunner},
    },
    domain::ProjectType,
};

use crate::{
    cli::{CreateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::SpinnerReporter,
};

/// Execute project creation (or its dry-run preview).
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: CreateArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let request = build_request(args.project_type, args.name, args.output_dir)?;
    debug!(
        project_type = %request.project_type,
        name = %request.name,
        parent = %request.parent_dir.display(),
        "Request resolved"
    );

    let show_progress = !output.is_quiet() && output.format() != OutputFormat::Json;
    let orchestrator = wire(config, SpinnerReporter::new(show_progress, output.supports_color()));

    if args.dry_run {
        let plan = orchestrator.plan(&request)?;
        return show_plan(&plan, output);
    }

    output.header(&format!(
        "Creating {} project '{}'",
        request.project_type, request.name
    ))?;
    let outcome = orchestrator.create(&request)?;
    info!(path = %outcome.path.display(), "Project created");
    show_outcome(&outcome, output)
}

/// Both flags are required for creation; the type is parsed
/// case-insensitively by the core.
fn build_request(
    project_type: Option<String>,
    name: Option<String>,
    output_dir: Option<PathBuf>,
) -> CliResult<CreationRequest> {
    let project_type = project_type.ok_or(CliError::MissingArgument { flag: "-t/--type" })?;
    let name = name.ok_or(CliError::MissingArgument { flag: "-n/--name" })?;
    let project_type = ProjectType::from_str(&project_type)
        .map_err(|e| CliError::Core(e.into()))?;

    Ok(CreationRequest::new(
        project_type,
        name,
        output_dir.unwrap_or_else(|| PathBuf::from(".")),
    ))
}

/// Production adapters around one filesystem and one process runner.
fn wire(config: AppConfig, progress: SpinnerReporter) -> CreationOrchestrator {
    let filesystem: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
    let runner: Arc<dyn ToolRunner> = Arc::new(SystemToolRunner::new());

    let generator = ComponentGenerators::new(
        Box::new(ViteGenerator::new(
            runner.clone(),
            filesystem.clone(),
            config.frontend,
        )),
        Box::new(SpringInitializrGenerator::new(
            runner.clone(),
            filesystem.clone(),
            config.backend,
        )),
    );

    let ports = CreationPorts {
        filesystem: filesystem.clone(),
        runner: runner.clone(),
        documentation: Arc::new(BuiltinDocumentation::new()),
        generator: Arc::new(generator),
        repository: Arc::new(GitInitializer::new(runner, filesystem)),
        progress: Arc::new(progress),
    };
    CreationOrchestrator::new(ports, config.requirements)
}

// ── Rendering ────────────────────────────────────────────────────────────────

fn show_plan(plan: &CreationPlan, output: &OutputManager) -> CliResult<()> {
    output.info(&format!(
        "Dry run: would create {} project at {}",
        plan.project_type,
        plan.target.display()
    ))?;
    output.print("")?;
    for line in plan.tree_lines() {
        output.print(&line)?;
    }
    output.print("")?;
    output.info("No files were written.")?;

    output.json(&serde_json::json!({
        "status": "planned",
        "path": plan.target,
        "type": plan.project_type,
        "entries": plan
            .entries
            .iter()
            .map(|e| serde_json::json!({ "path": e.path, "note": e.note }))
            .collect::<Vec<_>>(),
    }))?;
    Ok(())
}

fn show_outcome(outcome: &CreationOutcome, output: &OutputManager) -> CliResult<()> {
    let name = outcome
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    output.success(&format!(
        "Project '{name}' created at {}",
        outcome.path.display()
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", outcome.path.display()))?;
    for component in &outcome.components {
        if let Some(dir) = component.file_name() {
            output.print(&format!("  # {}", dir.to_string_lossy()))?;
        }
    }
    output.print("  git log --oneline")?;

    output.json(&serde_json::json!({
        "status": "created",
        "path": outcome.path,
        "type": outcome.project_type,
        "components": outcome.components,
    }))?;
    Ok(())
}
