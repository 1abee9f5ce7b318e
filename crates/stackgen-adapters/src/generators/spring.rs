//! Spring Boot backend via Spring Initializr.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use stackgen_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, GenerationRequest, Invocation, TemplateGenerator, ToolRunner},
    },
    error::StackgenResult,
};
use tracing::{debug, info, instrument};
use url::Url;

use crate::runner::run_checked;

/// `[backend]` configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    pub initializr_url: String,
    /// `None` lets Initializr pick its current default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_version: Option<String>,
    pub group_id: String,
    pub java_version: String,
    pub dependencies: Vec<String>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            initializr_url: "https://start.spring.io".into(),
            boot_version: None,
            group_id: "com.example".into(),
            java_version: "17".into(),
            dependencies: ["web", "data-jpa", "validation", "devtools", "lombok"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl BackendSettings {
    /// Full `starter.tgz` download URL for `artifact_id`.
    pub fn starter_url(&self, artifact_id: &str) -> StackgenResult<Url> {
        let mut params = vec![
            ("type", "maven-project".to_string()),
            ("language", "java".to_string()),
        ];
        if let Some(boot) = &self.boot_version {
            params.push(("bootVersion", boot.clone()));
        }
        params.extend([
            ("groupId", self.group_id.clone()),
            ("artifactId", artifact_id.to_string()),
            ("name", artifact_id.to_string()),
            ("javaVersion", self.java_version.clone()),
            ("dependencies", self.dependencies.join(",")),
        ]);

        let base = format!("{}/starter.tgz", self.initializr_url.trim_end_matches('/'));
        Url::parse_with_params(&base, &params).map_err(|e| {
            ApplicationError::CommandUnavailable {
                command: "curl".into(),
                reason: format!("invalid Initializr URL `{}`: {e}", self.initializr_url),
            }
            .into()
        })
    }
}

pub struct SpringInitializrGenerator {
    runner: Arc<dyn ToolRunner>,
    filesystem: Arc<dyn Filesystem>,
    settings: BackendSettings,
}

impl SpringInitializrGenerator {
    pub fn new(
        runner: Arc<dyn ToolRunner>,
        filesystem: Arc<dyn Filesystem>,
        settings: BackendSettings,
    ) -> Self {
        Self {
            runner,
            filesystem,
            settings,
        }
    }
}

impl TemplateGenerator for SpringInitializrGenerator {
    #[instrument(skip_all, fields(target = %request.target_dir.display()))]
    fn generate(&self, request: &GenerationRequest) -> StackgenResult<()> {
        let runner = self.runner.as_ref();
        let artifact_id = request.component.dir_name(&request.project_name);
        let archive: PathBuf = request.project_root.join(format!("{artifact_id}.tgz"));
        let url = self.settings.starter_url(&artifact_id)?;
        debug!(%url, "downloading starter");

        run_checked(
            runner,
            &Invocation::new("curl")
                .args(["-fsSL", url.as_str(), "-o"])
                .arg(archive.display().to_string())
                .current_dir(&request.project_root),
        )?;

        self.filesystem.create_dir_all(&request.target_dir)?;
        run_checked(
            runner,
            &Invocation::new("tar")
                .arg("-xzf")
                .arg(archive.display().to_string())
                .arg("-C")
                .arg(request.target_dir.display().to_string())
                .current_dir(&request.project_root),
        )?;

        self.filesystem.remove_all(&archive)?;

        info!("backend generated");
        Ok(())
    }
}
