//! Application layer errors.
//!
//! These errors represent failures at the ports: reading templates, writing
//! files, rendering, and running the external toolchain. Pure-logic errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A template source entry could not be listed or read.
    #[error("Template source error at '{path}': {reason}")]
    TemplateSource { path: String, reason: String },

    /// Template parsing or rendering failed.
    #[error("Template '{template}' failed to render: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A toolchain command exited unsuccessfully.
    #[error("`{command}` failed: {output}")]
    ToolchainFailed { command: String, output: String },

    /// The toolchain program could not be started.
    #[error("Toolchain program '{program}' could not be started: {reason}")]
    ToolchainUnavailable { program: String, reason: String },

    /// In-memory adapter state was poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateSource { path, .. } => vec![
                format!("Could not read template entry: {}", path),
                "If templates.local_path is set, check the directory is readable".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Check the template syntax in {}", template),
                "Available fields: Project, Module, Context, ContextP".into(),
                "Available helper: Pascal".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure are left in place".into(),
            ],
            Self::ToolchainFailed { command, .. } => vec![
                format!("Command failed: {}", command),
                "Check the command output above for details".into(),
                "Re-run it by hand inside the project directory".into(),
            ],
            Self::ToolchainUnavailable { program, .. } => vec![
                format!("'{}' was not found or is not executable", program),
                "Install Go from https://go.dev/dl/ and make sure it is in your PATH".into(),
                "Or point toolchain.program at the binary in your configuration".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateSource { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::ToolchainFailed { .. } => ErrorCategory::Internal,
            Self::ToolchainUnavailable { .. } => ErrorCategory::Configuration,
        }
    }
}
