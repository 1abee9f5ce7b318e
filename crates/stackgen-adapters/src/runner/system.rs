//! Runs real programs with `std::process`.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use stackgen_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, Invocation, ToolRunner},
    },
    error::StackgenResult,
};
use tracing::{instrument, trace};

/// Production runner: `which` for lookup, blocking `Command::output` for runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolRunner;

impl SystemToolRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for SystemToolRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    #[instrument(skip_all, fields(command = %invocation))]
    fn run(&self, invocation: &Invocation) -> StackgenResult<CommandOutput> {
        // Resolve through PATH ourselves so `npm.cmd` and friends work on Windows.
        let program = self
            .locate(&invocation.program)
            .unwrap_or_else(|| PathBuf::from(&invocation.program));

        let mut command = Command::new(program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &invocation.cwd {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .map_err(|e| ApplicationError::CommandUnavailable {
                command: invocation.to_string(),
                reason: e.to_string(),
            })?;

        trace!(status = ?output.status.code(), "finished");
        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
