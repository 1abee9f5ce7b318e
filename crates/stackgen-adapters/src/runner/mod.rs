//! Tool runner adapters.

mod scripted;
mod system;

pub use scripted::{CallLog, ScriptedToolRunner};
pub use system::SystemToolRunner;

use stackgen_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, Invocation, ToolRunner},
    },
    error::StackgenResult,
};
use tracing::debug;

/// Run `invocation` and turn a non-zero exit into `CommandFailed`.
pub fn run_checked(runner: &dyn ToolRunner, invocation: &Invocation) -> StackgenResult<CommandOutput> {
    debug!(command = %invocation, "running");
    let output = runner.run(invocation)?;
    if output.is_success() {
        Ok(output)
    } else {
        Err(ApplicationError::CommandFailed {
            command: invocation.to_string(),
            status: output.status,
            stderr: last_lines(&output.stderr, 5),
        }
        .into())
    }
}

/// The tail of a (possibly long) stderr, enough to show what went wrong.
fn last_lines(text: &str, n: usize) -> String {
    let lines: Vec<&str> = text.trim_end().lines().collect();
    lines[lines.len().saturating_sub(n)..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_zero_exit_is_command_failed() {
        let runner = ScriptedToolRunner::new().on("git", &["commit"], |_| {
            Ok(CommandOutput {
                status: Some(128),
                stdout: String::new(),
                stderr: "fatal: empty ident name".into(),
            })
        });

        let err = run_checked(&runner, &Invocation::new("git").args(["commit", "-m", "x"]))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("git commit -m x"), "{message}");
        assert!(message.contains("128"), "{message}");
    }

    #[test]
    fn last_lines_keeps_the_tail() {
        assert_eq!(last_lines("a\nb\nc\n", 2), "b\nc");
        assert_eq!(last_lines("only", 5), "only");
    }
}
