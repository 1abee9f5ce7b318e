//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Project creation is driven by top-level flags; the subcommands are
/// housekeeping only.
#[derive(Debug, Parser)]
#[command(
    name     = "stackgen",
    bin_name = "stackgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Full-stack project bootstrapper",
    long_about = "stackgen creates a project directory with a Vite + React + TypeScript + \
                  Tailwind frontend and/or a Spring Boot backend, documentation, and a git \
                  repository guarded by a secret-scanning pre-commit hook.",
    after_help = "EXAMPLES:\n\
        \x20 stackgen -t fullstack -n my-app\n\
        \x20 stackgen -t frontend  -n my-ui  -o ~/src\n\
        \x20 stackgen -t backend   -n my-api --dry-run\n\
        \x20 stackgen completions bash > ~/.local/share/bash-completion/completions/stackgen",
    arg_required_else_help = true,
    args_conflicts_with_subcommands = true,
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub create: CreateArgs,

    /// Housekeeping subcommand; omit to create a project.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── creation ─────────────────────────────────────────────────────────────────

/// Arguments for project creation.
///
/// `--type` and `--name` are optional at parse time so the subcommands can
/// run without them; the create command reports them as missing.
#[derive(Debug, Default, Args)]
pub struct CreateArgs {
    /// Project type. Parsed case-insensitively by the core.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Project type: frontend, backend or fullstack"
    )]
    pub project_type: Option<String>,

    /// Project name; also the directory name.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Project name (3-50 chars, starts with a letter)"
    )]
    pub name: Option<String>,

    /// Preview what would be created without touching anything.
    #[arg(
        short = 'd',
        long = "dry-run",
        help = "Show what would be created without creating"
    )]
    pub dry_run: bool,

    /// Directory the project is created in.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub output_dir: Option<PathBuf>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a configuration file with the default settings.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stackgen init                 # platform config dir\n\
            \x20 stackgen init -c ./stackgen.toml\n\
            \x20 stackgen init --force         # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stackgen completions bash > ~/.local/share/bash-completion/completions/stackgen\n\
            \x20 stackgen completions zsh  > ~/.zfunc/_stackgen\n\
            \x20 stackgen completions fish > ~/.config/fish/completions/stackgen.fish"
    )]
    Completions(CompletionsArgs),
}

/// Arguments for `stackgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

/// Arguments for `stackgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_creation_flags() {
        let cli = Cli::parse_from([
            "stackgen", "-t", "fullstack", "-n", "demo-app", "-d", "-o", "/tmp",
        ]);
        assert!(cli.command.is_none());
        assert_eq!(cli.create.project_type.as_deref(), Some("fullstack"));
        assert_eq!(cli.create.name.as_deref(), Some("demo-app"));
        assert!(cli.create.dry_run);
        assert_eq!(cli.create.output_dir, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn long_flags() {
        let cli = Cli::parse_from(["stackgen", "--type", "Backend", "--name", "api-svc", "--dry-run"]);
        assert_eq!(cli.create.project_type.as_deref(), Some("Backend"));
        assert!(cli.create.dry_run);
    }

    #[test]
    fn subcommand_with_global_flags() {
        let cli = Cli::parse_from(["stackgen", "init", "--force", "-c", "x.toml"]);
        assert!(matches!(cli.command, Some(Commands::Init(InitArgs { force: true }))));
        assert_eq!(cli.global.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn creation_flags_conflict_with_subcommands() {
        let result = Cli::try_parse_from(["stackgen", "-n", "demo-app", "completions", "bash"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["stackgen", "--quiet", "--verbose", "-t", "frontend"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_color_flag_is_a_switch() {
        let cli = Cli::try_parse_from(["stackgen", "--no-color", "-t", "frontend"]).unwrap();
        assert!(cli.global.no_color);
    }
}
