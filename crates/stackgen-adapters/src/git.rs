//! Git repository setup: init, secret-scanning pre-commit hook, first commit.

use std::path::Path;
use std::sync::Arc;

use stackgen_core::{
    application::ports::{Filesystem, Invocation, RepositoryInitializer, ToolRunner},
    error::StackgenResult,
};
use tracing::{info, instrument};

use crate::runner::run_checked;

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Rejects commits whose staged additions look like credentials.
pub const PRE_COMMIT_HOOK: &str = r#"#!/bin/sh
# Installed by stackgen: refuse to commit things that look like secrets.

patterns='(AKIA[0-9A-Z]{16}|-----BEGIN [A-Z ]*PRIVATE KEY-----|(api[_-]?key|secret|passw(or)?d|token)[[:space:]]*[:=][[:space:]]*["'"'"'][^"'"'"']{8,}["'"'"']|gh[pousr]_[A-Za-z0-9]{36}|xox[baprs]-[A-Za-z0-9-]{10,})'

matches=$(git diff --cached -U0 --no-color | grep -E '^\+' | grep -v '^+++' | grep -En "$patterns")

if [ -n "$matches" ]; then
    echo "pre-commit: possible secret in staged changes:" >&2
    echo "$matches" >&2
    echo "Remove it, or commit with --no-verify if this is a false positive." >&2
    exit 1
fi

exit 0
"#;

pub struct GitInitializer {
    runner: Arc<dyn ToolRunner>,
    filesystem: Arc<dyn Filesystem>,
}

impl GitInitializer {
    pub fn new(runner: Arc<dyn ToolRunner>, filesystem: Arc<dyn Filesystem>) -> Self {
        Self { runner, filesystem }
    }

    fn git(&self, root: &Path, args: &[&str]) -> StackgenResult<()> {
        run_checked(
            self.runner.as_ref(),
            &Invocation::new("git").args(args.iter().copied()).current_dir(root),
        )
        .map(|_| ())
    }
}

impl RepositoryInitializer for GitInitializer {
    #[instrument(skip_all, fields(root = %project_root.display()))]
    fn initialize(&self, project_root: &Path) -> StackgenResult<()> {
        self.git(project_root, &["init"])?;

        let hooks = project_root.join(".git").join("hooks");
        let hook = hooks.join("pre-commit");
        self.filesystem.create_dir_all(&hooks)?;
        self.filesystem.write_file(&hook, PRE_COMMIT_HOOK)?;
        self.filesystem.set_executable(&hook)?;

        self.git(project_root, &["add", "."])?;
        self.git(project_root, &["commit", "-m", INITIAL_COMMIT_MESSAGE])?;

        info!("git repository initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryFilesystem, ScriptedToolRunner};

    #[test]
    fn init_hook_add_commit_in_order() {
        let runner = ScriptedToolRunner::all_tools_installed();
        let log = runner.log();
        let fs = MemoryFilesystem::new();

        GitInitializer::new(Arc::new(runner), Arc::new(fs.clone()))
            .initialize(Path::new("/w/app"))
            .unwrap();

        assert_eq!(
            log.commands(),
            vec!["git init", "git add .", "git commit -m Initial commit"]
        );
        let hook = Path::new("/w/app/.git/hooks/pre-commit");
        assert!(fs.is_executable(hook));
        assert!(fs.read_file(hook).unwrap().starts_with("#!/bin/sh"));
    }

    #[test]
    fn failed_commit_is_an_error() {
        let runner = ScriptedToolRunner::all_tools_installed().failing(
            "git",
            &["commit"],
            "Please tell me who you are.",
        );
        let err = GitInitializer::new(Arc::new(runner), Arc::new(MemoryFilesystem::new()))
            .initialize(Path::new("/w/app"))
            .unwrap_err();
        assert!(err.to_string().contains("who you are"));
    }
}
