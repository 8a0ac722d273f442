//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No scaffolding logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Layered Go service scaffolding",
    long_about = "Strata generates a layered Go service skeleton and appends \
                  bounded-context modules to it, each with domain, application, \
                  infrastructure, and interfaces layers.",
    after_help = "EXAMPLES:\n\
        \x20 strata init shop\n\
        \x20 strata init shop --module example.com/shop --contexts user,billing\n\
        \x20 strata init-ddd inventory,shipping\n\
        \x20 strata completions bash > /usr/share/bash-completion/completions/strata",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project skeleton.
    #[command(
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 strata init shop\n\
            \x20 strata init shop --module example.com/shop\n\
            \x20 strata init shop --contexts user,billing --framework ../go-framework\n\
            \x20 strata init shop --output ~/src"
    )]
    Init(InitArgs),

    /// Append bounded contexts to an existing project.
    #[command(
        name = "init-ddd",
        visible_alias = "add",
        about = "Append bounded contexts to a project",
        after_help = "EXAMPLES:\n\
            \x20 strata init-ddd user\n\
            \x20 strata init-ddd user,billing,order_line\n\
            \x20 strata init-ddd inventory --project-dir ./shop"
    )]
    InitDdd(InitDddArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or create the Strata configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config get toolchain.program\n\
            \x20 strata config list\n\
            \x20 strata config init --force"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name; also the name of the directory that is created.
    #[arg(value_name = "PROJECT", help = "Project name")]
    pub project: String,

    /// Go module path written to `go.mod`. Defaults to the project name.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "PATH",
        help = "Go module path (default: project name)"
    )]
    pub module: Option<String>,

    /// Comma-separated bounded contexts to append after the skeleton.
    #[arg(
        long = "contexts",
        value_name = "LIST",
        help = "Comma-separated contexts to create (e.g. user,billing)"
    )]
    pub contexts: Option<String>,

    /// Local checkout of the framework module.
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "PATH",
        help = "Local framework checkout to link with a replace directive"
    )]
    pub framework: Option<String>,

    /// Directory the project directory is created in.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory for the project"
    )]
    pub output: PathBuf,
}

// ── init-ddd ──────────────────────────────────────────────────────────────────

/// Arguments for `strata init-ddd`.
#[derive(Debug, Args)]
pub struct InitDddArgs {
    /// Comma-separated context names.
    #[arg(value_name = "CONTEXTS", help = "Comma-separated contexts (e.g. user,billing)")]
    pub contexts: String,

    /// Root of the project to extend.
    #[arg(
        short = 'p',
        long = "project-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Project root containing go.mod"
    )]
    pub project_dir: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `strata config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `toolchain.program`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print the path of the configuration file.
    Path,
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn init_defaults() {
        let cli = Cli::parse_from(["strata", "init", "shop"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.project, "shop");
                assert!(args.module.is_none());
                assert!(args.contexts.is_none());
                assert!(args.framework.is_none());
                assert_eq!(args.output, PathBuf::from("."));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn init_all_flags() {
        let cli = Cli::parse_from([
            "strata",
            "init",
            "shop",
            "--module",
            "example.com/shop",
            "--contexts",
            "user,billing",
            "--framework",
            "../fw",
            "--output",
            "/tmp/out",
        ]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.module.as_deref(), Some("example.com/shop"));
                assert_eq!(args.contexts.as_deref(), Some("user,billing"));
                assert_eq!(args.framework.as_deref(), Some("../fw"));
                assert_eq!(args.output, PathBuf::from("/tmp/out"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn init_ddd_takes_a_list_and_project_dir() {
        let cli = Cli::parse_from(["strata", "init-ddd", "user,billing", "-p", "shop"]);
        match cli.command {
            Commands::InitDdd(args) => {
                assert_eq!(args.contexts, "user,billing");
                assert_eq!(args.project_dir, PathBuf::from("shop"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn init_ddd_alias() {
        let cli = Cli::parse_from(["strata", "add", "user"]);
        assert!(matches!(cli.command, Commands::InitDdd(_)));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["strata", "init", "shop", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["strata", "-q", "-v", "init", "shop"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_init_force() {
        let cli = Cli::parse_from(["strata", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Init { force: true })
        ));
    }

    #[test]
    fn output_format_json() {
        let cli = Cli::parse_from(["strata", "--output-format", "json", "config", "list"]);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }
}
