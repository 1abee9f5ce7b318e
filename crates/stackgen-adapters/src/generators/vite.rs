//! Vite + React + TypeScript + Tailwind frontend.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use stackgen_core::{
    application::ports::{Filesystem, GenerationRequest, Invocation, TemplateGenerator, ToolRunner},
    error::StackgenResult,
};
use tracing::{info, instrument};

use crate::runner::run_checked;

const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
export default {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

const TAILWIND_DIRECTIVES: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

/// `[frontend]` configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendSettings {
    /// `create-vite` template name.
    pub vite_template: String,
    /// Major version passed as `tailwindcss@<n>`.
    pub tailwind_version: String,
}

impl Default for FrontendSettings {
    fn default() -> Self {
        Self {
            vite_template: "react-ts".into(),
            tailwind_version: "3".into(),
        }
    }
}

pub struct ViteGenerator {
    runner: Arc<dyn ToolRunner>,
    filesystem: Arc<dyn Filesystem>,
    settings: FrontendSettings,
}

impl ViteGenerator {
    pub fn new(
        runner: Arc<dyn ToolRunner>,
        filesystem: Arc<dyn Filesystem>,
        settings: FrontendSettings,
    ) -> Self {
        Self {
            runner,
            filesystem,
            settings,
        }
    }
}

impl TemplateGenerator for ViteGenerator {
    #[instrument(skip_all, fields(target = %request.target_dir.display()))]
    fn generate(&self, request: &GenerationRequest) -> StackgenResult<()> {
        let runner = self.runner.as_ref();
        let dir_name = request.component.dir_name(&request.project_name);
        let target = &request.target_dir;

        run_checked(
            runner,
            &Invocation::new("npm")
                .args(["create", "vite@latest", dir_name.as_str(), "--", "--template"])
                .arg(&self.settings.vite_template)
                .current_dir(&request.project_root),
        )?;
        run_checked(runner, &Invocation::new("npm").arg("install").current_dir(target))?;
        run_checked(
            runner,
            &Invocation::new("npm")
                .args(["install", "-D"])
                .arg(format!("tailwindcss@{}", self.settings.tailwind_version))
                .args(["postcss", "autoprefixer"])
                .current_dir(target),
        )?;
        run_checked(
            runner,
            &Invocation::new("npx")
                .args(["tailwindcss", "init", "-p"])
                .current_dir(target),
        )?;

        self.filesystem
            .write_file(&target.join("tailwind.config.js"), TAILWIND_CONFIG)?;
        self.filesystem.create_dir_all(&target.join("src"))?;
        self.filesystem
            .write_file(&target.join("src/index.css"), TAILWIND_DIRECTIVES)?;

        info!("frontend generated");
        Ok(())
    }
}
