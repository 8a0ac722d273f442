//! `go mod` toolchain adapter.
//!
//! Commands run synchronously with the working directory set to the project
//! and both output streams captured. A non-zero exit becomes
//! [`ApplicationError::ToolchainFailed`] carrying the combined output.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::{debug, instrument};

use strata_core::{
    application::{ApplicationError, ports::Toolchain},
    error::StrataResult,
};

/// Default program name, looked up on `PATH`.
pub const DEFAULT_PROGRAM: &str = "go";

/// Runs the real Go toolchain.
#[derive(Debug, Clone)]
pub struct GoToolchain {
    program: String,
}

impl GoToolchain {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Use a specific binary instead of `go` from `PATH`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, dir: &Path) -> GoCommand<'_> {
        GoCommand {
            program: &self.program,
            dir: dir.to_path_buf(),
            args: Vec::new(),
        }
    }
}

impl Default for GoToolchain {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolchain for GoToolchain {
    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    fn init(&self, dir: &Path, module: &str) -> StrataResult<()> {
        self.command(dir).args(["mod", "init", module]).run()
    }

    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    fn tidy(&self, dir: &Path) -> StrataResult<()> {
        self.command(dir).args(["mod", "tidy"]).run()
    }

    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    fn require(&self, dir: &Path, coordinate: &str) -> StrataResult<()> {
        self.command(dir)
            .args(["mod", "edit"])
            .arg(format!("-require={coordinate}"))
            .run()
    }

    #[instrument(skip(self, dir, local_path), fields(dir = %dir.display(), local = %local_path.display()))]
    fn replace(&self, dir: &Path, module: &str, local_path: &Path) -> StrataResult<()> {
        // go resolves relative replace targets against the module directory,
        // not the directory strata was started from
        let local = absolute_path(local_path)?;
        self.command(dir)
            .args(["mod", "edit"])
            .arg(format!("-replace={module}={}", local.display()))
            .run()
    }
}

/// Resolve `path` against the current directory without touching the disk.
fn absolute_path(path: &Path) -> StrataResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::path::absolute(path).map_err(|e| {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: format!("Failed to resolve path: {e}"),
        }
        .into()
    })
}

/// A single toolchain invocation.
struct GoCommand<'a> {
    program: &'a str,
    dir: PathBuf,
    args: Vec<String>,
}

impl GoCommand<'_> {
    fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn display(&self) -> String {
        std::iter::once(self.program)
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run(self) -> StrataResult<()> {
        let command_line = self.display();
        debug!(command = %command_line, dir = %self.dir.display(), "Running toolchain command");

        let output = Command::new(self.program)
            .args(&self.args)
            .current_dir(&self.dir)
            .output()
            .map_err(|e| self.spawn_error(e))?;

        let combined = combined_output(&output);
        if !combined.is_empty() {
            debug!(command = %command_line, "{}", combined);
        }

        if output.status.success() {
            Ok(())
        } else {
            Err(ApplicationError::ToolchainFailed {
                command: command_line,
                output: if combined.is_empty() {
                    format!("exited with {}", output.status)
                } else {
                    combined
                },
            }
            .into())
        }
    }

    fn spawn_error(&self, e: io::Error) -> strata_core::error::StrataError {
        match e.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                ApplicationError::ToolchainUnavailable {
                    program: self.program.to_string(),
                    reason: e.to_string(),
                }
                .into()
            }
            _ => ApplicationError::ToolchainFailed {
                command: self.display(),
                output: e.to_string(),
            }
            .into(),
        }
    }
}

/// stdout followed by stderr, trimmed.
fn combined_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    [stdout.trim(), stderr.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
