//! Built-in documentation set: README, CONTRIBUTING guide and .gitignore.
//!
//! Templates use `{{VARIABLE}}` placeholders rendered by
//! [`RenderContext`]; per-component sections are appended for the
//! components the project type includes.

use stackgen_core::{
    application::ports::DocumentationSource,
    domain::{Component, DomainValidator, Permissions, ProjectStructure, RenderContext},
    error::{StackgenError, StackgenResult},
};
use tracing::instrument;

const README: &str = "# {{PROJECT_NAME}}

A {{PROJECT_TYPE}} project.

## Layout

{{LAYOUT}}
## Getting started

{{GETTING_STARTED}}
## License

Copyright (c) {{YEAR}} The {{PROJECT_NAME_PASCAL}} authors.
";

const CONTRIBUTING: &str = "# Contributing to {{PROJECT_NAME}}

1. Create a branch from `main`.
2. Keep commits small and focused; describe *what* changed in the subject line.
3. Run the checks for every part you touched before opening a pull request.
4. Never commit credentials. A pre-commit hook scans staged changes for
   common secret patterns; fix the finding instead of bypassing the hook.
";

const GITIGNORE_COMMON: &str = "# Editors and OS
.idea/
.vscode/
*.swp
.DS_Store

# Environment
.env
.env.*
!.env.example
";

const GITIGNORE_FRONTEND: &str = "
# Frontend
node_modules/
dist/
coverage/
*.log
";

const GITIGNORE_BACKEND: &str = "
# Backend
target/
*.class
*.jar
.mvn/wrapper/maven-wrapper.jar
";

fn layout_line(component: Component) -> &'static str {
    match component {
        Component::Frontend => {
            "- `{{PROJECT_NAME}}-frontend/` - Vite + React + TypeScript + Tailwind CSS\n"
        }
        Component::Backend => "- `{{PROJECT_NAME}}-backend/` - Spring Boot (Maven, Java)\n",
    }
}

fn getting_started(component: Component) -> &'static str {
    match component {
        Component::Frontend => {
            "```sh\ncd {{PROJECT_NAME}}-frontend\nnpm install\nnpm run dev\n```\n"
        }
        Component::Backend => "```sh\ncd {{PROJECT_NAME}}-backend\n./mvnw spring-boot:run\n```\n",
    }
}

/// Documentation compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDocumentation;

impl BuiltinDocumentation {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentationSource for BuiltinDocumentation {
    #[instrument(skip_all, fields(project = context.project_name()))]
    fn render(&self, context: &RenderContext) -> StackgenResult<ProjectStructure> {
        let components = context.project_type().components();

        let layout: String = components.iter().map(|c| layout_line(*c)).collect();
        let started: String = components.iter().map(|c| getting_started(*c)).collect();
        let mut gitignore = GITIGNORE_COMMON.to_string();
        for component in components {
            gitignore.push_str(match component {
                Component::Frontend => GITIGNORE_FRONTEND,
                Component::Backend => GITIGNORE_BACKEND,
            });
        }

        // Section text contains placeholders itself, so render it first.
        let context = context
            .clone()
            .with_variable("LAYOUT", context.render(&layout))
            .with_variable("GETTING_STARTED", context.render(&started));

        let structure = ProjectStructure::new()
            .with_file("README.md", context.render(README), Permissions::read_write())?
            .with_directory("docs")?
            .with_file(
                "docs/CONTRIBUTING.md",
                context.render(CONTRIBUTING),
                Permissions::read_write(),
            )?
            .with_file(".gitignore", gitignore, Permissions::read_write())?;

        DomainValidator::validate_project_structure(&structure).map_err(StackgenError::Domain)?;
        Ok(structure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackgen_core::domain::{ProjectName, ProjectType};

    fn render(project_type: ProjectType) -> ProjectStructure {
        let name = ProjectName::parse("demo-app").unwrap();
        BuiltinDocumentation::new()
            .render(&RenderContext::new(&name, project_type))
            .unwrap()
    }

    fn file<'a>(structure: &'a ProjectStructure, path: &str) -> &'a str {
        structure
            .files()
            .find(|f| f.path.to_string() == path)
            .map(|f| f.content.as_str())
            .unwrap()
    }

    #[test]
    fn produces_readme_contributing_and_gitignore() {
        let structure = render(ProjectType::Fullstack);
        let paths: Vec<String> = structure.files().map(|f| f.path.to_string()).collect();
        assert_eq!(paths, vec!["README.md", "docs/CONTRIBUTING.md", ".gitignore"]);
    }

    #[test]
    fn readme_mentions_each_component() {
        let readme = file(&render(ProjectType::Fullstack), "README.md").to_string();
        assert!(readme.starts_with("# demo-app"));
        assert!(readme.contains("`demo-app-frontend/`"));
        assert!(readme.contains("`demo-app-backend/`"));
        assert!(readme.contains("cd demo-app-backend"));
        assert!(!readme.contains("{{"));
    }

    #[test]
    fn gitignore_matches_project_type() {
        let frontend = render(ProjectType::Frontend);
        let gitignore = file(&frontend, ".gitignore");
        assert!(gitignore.contains("node_modules/"));
        assert!(!gitignore.contains("target/"));

        let backend = render(ProjectType::Backend);
        assert!(file(&backend, ".gitignore").contains("target/"));
    }
}
