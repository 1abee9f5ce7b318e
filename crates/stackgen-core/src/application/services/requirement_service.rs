//! Requirement Service - gates project creation on installed tool versions.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ApplicationError, RequirementFailure,
        ports::{Invocation, ToolRunner},
    },
    domain::{
        DomainValidator as validator, ProjectType, RequiredVersions, Tool, ToolRequirement,
        Version,
    },
    error::StackgenResult,
};

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("valid ANSI regex"));

static NODE_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*v?(\d+\.\d+(?:\.\d+)*)").expect("valid node version regex")
});

static JAVA_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*(?:openjdk|java) (?:version )?"?(\d+(?:\.\d+)*)"#)
        .expect("valid java version regex")
});

static MAVEN_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Apache Maven (\d+(?:\.\d+)*)").expect("valid maven version regex")
});

/// JVM launchers echo `JAVA_TOOL_OPTIONS` and `_JAVA_OPTIONS` before the
/// real output.
const JVM_BANNER: &str = "Picked up ";

fn version_pattern(tool: Tool) -> &'static Regex {
    match tool {
        Tool::Node => &*NODE_VERSION_RE,
        Tool::Java => &*JAVA_VERSION_RE,
        Tool::Maven => &*MAVEN_VERSION_RE,
    }
}

/// Drop ANSI escapes and JVM option banners from probe output.
fn clean_output(text: &str) -> String {
    ANSI_RE
        .replace_all(text, "")
        .lines()
        .filter(|line| !line.trim_start().starts_with(JVM_BANNER))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pull the version of `tool` out of its `--version` output.
///
/// ```text
/// node   v18.17.0                              -> 18.17.0
/// java   openjdk version "17.0.2" 2022-01-18   -> 17.0.2
/// mvn    Apache Maven 3.9.5 (57804ffe...)      -> 3.9.5
/// ```
pub fn extract_version(tool: Tool, text: &str) -> Option<String> {
    version_pattern(tool)
        .captures(&clean_output(text))
        .map(|caps| caps[1].to_string())
}

/// Checks installed tools against minimum versions.
pub struct RequirementChecker {
    runner: Arc<dyn ToolRunner>,
}

impl RequirementChecker {
    pub fn new(runner: Arc<dyn ToolRunner>) -> Self {
        Self { runner }
    }

    /// Report the installed version of `tool`.
    pub fn probe(&self, tool: Tool) -> Result<Version, RequirementFailure> {
        let program = tool.program();

        if self.runner.locate(program).is_none() {
            debug!(%tool, program, "tool not found on PATH");
            return Err(RequirementFailure::ToolNotFound { tool });
        }

        let invocation = Invocation::new(program).args(tool.version_args().iter().copied());
        let output = self.runner.run(&invocation).map_err(|e| {
            debug!(%tool, error = %e, "version probe could not be executed");
            RequirementFailure::ToolNotFound { tool }
        })?;

        let text = clean_output(output.text().trim());
        extract_version(tool, &text)
            .and_then(|raw| validator::version(&raw).ok())
            .ok_or_else(|| RequirementFailure::UnparsableVersion {
                tool,
                program: invocation.to_string(),
                output: text.lines().next().unwrap_or_default().to_string(),
            })
    }

    /// Check a single requirement; returns the installed version on success.
    #[instrument(skip_all, fields(tool = %requirement.tool, required = %requirement.minimum))]
    pub fn check_requirement(
        &self,
        requirement: &ToolRequirement,
    ) -> Result<Version, RequirementFailure> {
        let found = self.probe(requirement.tool)?;

        if found.satisfies(&requirement.minimum) {
            debug!(%found, "requirement satisfied");
            Ok(found)
        } else {
            Err(RequirementFailure::VersionTooLow {
                tool: requirement.tool,
                found,
                required: requirement.minimum.clone(),
            })
        }
    }

    /// Run every check, collecting all failures instead of stopping at the
    /// first one.
    pub fn check_all(&self, requirements: &[ToolRequirement]) -> StackgenResult<Vec<(Tool, Version)>> {
        let mut satisfied = Vec::new();
        let mut failures = Vec::new();

        for requirement in requirements {
            match self.check_requirement(requirement) {
                Ok(version) => satisfied.push((requirement.tool, version)),
                Err(failure) => {
                    warn!(%failure, "requirement not met");
                    failures.push(failure);
                }
            }
        }

        if failures.is_empty() {
            Ok(satisfied)
        } else {
            Err(ApplicationError::Requirements(failures).into())
        }
    }

    /// Check every tool needed by `project_type`.
    #[instrument(skip(self, required))]
    pub fn check_for(
        &self,
        project_type: ProjectType,
        required: &RequiredVersions,
    ) -> StackgenResult<Vec<(Tool, Version)>> {
        self.check_all(&required.for_type(project_type))
    }
}
