//! Scripted tool runner for tests and demos.
//!
//! Nothing is executed. Each invocation is recorded, then answered by the
//! first rule whose program and leading arguments match. Rules may touch the
//! real filesystem to mimic what the external program would have left behind
//! (`git init` creating `.git/`, `tar` extracting a tree, ...).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use stackgen_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, Invocation, ToolRunner},
    },
    error::StackgenResult,
};

type Handler = Box<dyn Fn(&Invocation) -> StackgenResult<CommandOutput> + Send + Sync>;

struct Rule {
    program: String,
    args_prefix: Vec<String>,
    handler: Handler,
}

impl Rule {
    fn matches(&self, invocation: &Invocation) -> bool {
        invocation.program == self.program
            && invocation.args.len() >= self.args_prefix.len()
            && self
                .args_prefix
                .iter()
                .zip(&invocation.args)
                .all(|(want, got)| want == got)
    }
}

/// Shared record of every invocation, in order.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Invocation>>>);

impl CallLog {
    pub fn invocations(&self) -> Vec<Invocation> {
        self.0.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Rendered command lines, e.g. `git commit -m Initial commit`.
    pub fn commands(&self) -> Vec<String> {
        self.invocations().iter().map(ToString::to_string).collect()
    }

    fn push(&self, invocation: &Invocation) {
        if let Ok(mut calls) = self.0.lock() {
            calls.push(invocation.clone());
        }
    }
}

#[derive(Default)]
pub struct ScriptedToolRunner {
    programs: HashSet<String>,
    rules: Vec<Rule>,
    log: CallLog,
}

impl ScriptedToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` locatable. Unmatched runs of it succeed silently.
    pub fn with_program(mut self, program: &str) -> Self {
        self.programs.insert(program.to_string());
        self
    }

    /// Make `program` locatable and answer every run with `output` on stdout.
    pub fn with_version(self, program: &str, output: &str) -> Self {
        let output = output.to_string();
        self.with_program(program)
            .on(program, &[], move |_| Ok(CommandOutput::success(output.clone())))
    }

    /// Answer runs of `program` starting with `args_prefix`. Rules added
    /// later take precedence.
    pub fn on<F>(mut self, program: &str, args_prefix: &[&str], handler: F) -> Self
    where
        F: Fn(&Invocation) -> StackgenResult<CommandOutput> + Send + Sync + 'static,
    {
        self.programs.insert(program.to_string());
        self.rules.insert(
            0,
            Rule {
                program: program.to_string(),
                args_prefix: args_prefix.iter().map(|s| s.to_string()).collect(),
                handler: Box::new(handler),
            },
        );
        self
    }

    /// Make `program ... args_prefix` exit non-zero.
    pub fn failing(self, program: &str, args_prefix: &[&str], stderr: &str) -> Self {
        let stderr = stderr.to_string();
        self.on(program, args_prefix, move |_| {
            Ok(CommandOutput {
                status: Some(1),
                stdout: String::new(),
                stderr: stderr.clone(),
            })
        })
    }

    /// Every tool a fullstack project needs, at comfortable versions.
    pub fn all_tools_installed() -> Self {
        Self::new()
            .with_version("node", "v20.11.0")
            .with_version("java", "openjdk version \"21.0.2\" 2024-01-16")
            .with_version("mvn", "Apache Maven 3.9.6")
            .with_program("npm")
            .with_program("npx")
            .with_program("curl")
            .with_program("tar")
            .with_program("git")
    }

    /// Leave behind on disk roughly what the real generators and git would.
    pub fn simulating_side_effects(self) -> Self {
        self.on("npm", &["create"], |inv| {
            let dir = cwd(inv).join(arg(inv, 2)?);
            mkdirs(&dir.join("src"))?;
            touch(&dir.join("package.json"), "{}\n")?;
            touch(&dir.join("src/index.css"), ":root {}\n")?;
            Ok(CommandOutput::success(""))
        })
        .on("curl", &[], |inv| {
            let archive = value_after(inv, "-o")?;
            touch(&cwd(inv).join(archive), "tgz")?;
            Ok(CommandOutput::success(""))
        })
        .on("tar", &[], |inv| {
            let dest = value_after(inv, "-C")?;
            touch(&PathBuf::from(dest).join("pom.xml"), "<project/>\n")?;
            Ok(CommandOutput::success(""))
        })
        .on("git", &["init"], |inv| {
            mkdirs(&cwd(inv).join(".git/hooks"))?;
            Ok(CommandOutput::success(""))
        })
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl ToolRunner for ScriptedToolRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.programs
            .contains(program)
            .then(|| PathBuf::from("/scripted/bin").join(program))
    }

    fn run(&self, invocation: &Invocation) -> StackgenResult<CommandOutput> {
        self.log.push(invocation);

        if !self.programs.contains(&invocation.program) {
            return Err(ApplicationError::CommandUnavailable {
                command: invocation.to_string(),
                reason: "program not found".into(),
            }
            .into());
        }

        match self.rules.iter().find(|rule| rule.matches(invocation)) {
            Some(rule) => (rule.handler)(invocation),
            None => Ok(CommandOutput::success("")),
        }
    }
}

fn cwd(inv: &Invocation) -> PathBuf {
    inv.cwd.clone().unwrap_or_else(|| PathBuf::from("."))
}

fn arg(inv: &Invocation, index: usize) -> StackgenResult<&str> {
    inv.args
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| simulation_error(inv, &format!("missing argument #{index}")))
}

fn value_after<'a>(inv: &'a Invocation, flag: &str) -> StackgenResult<&'a str> {
    inv.args
        .iter()
        .position(|a| a == flag)
        .and_then(|i| inv.args.get(i + 1))
        .map(String::as_str)
        .ok_or_else(|| simulation_error(inv, &format!("missing {flag} value")))
}

fn mkdirs(path: &Path) -> StackgenResult<()> {
    std::fs::create_dir_all(path).map_err(|e| io_error(path, e))
}

fn touch(path: &Path, content: &str) -> StackgenResult<()> {
    if let Some(parent) = path.parent() {
        mkdirs(parent)?;
    }
    std::fs::write(path, content).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, e: std::io::Error) -> stackgen_core::error::StackgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn simulation_error(inv: &Invocation, reason: &str) -> stackgen_core::error::StackgenError {
    ApplicationError::CommandFailed {
        command: inv.to_string(),
        status: None,
        stderr: reason.to_string(),
    }
    .into()
}
