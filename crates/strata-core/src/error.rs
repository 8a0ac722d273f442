//! Unified error handling for Strata Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, adds the pipeline stage a failure happened in, and exposes
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Strata Core operations.
#[derive(Debug, Error, Clone)]
pub enum StrataError {
    /// Errors from the domain layer (template-tree invariants).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (ports and orchestration).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// An error annotated with the stage that produced it.
    #[error("{stage}: {source}")]
    Stage {
        stage: String,
        #[source]
        source: Box<StrataError>,
    },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StrataError {
    /// The innermost error, with all stage annotations removed.
    pub fn root_cause(&self) -> &StrataError {
        match self {
            Self::Stage { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Stage names from outermost to innermost.
    pub fn stages(&self) -> Vec<&str> {
        let mut stages = Vec::new();
        let mut current = self;
        while let Self::Stage { stage, source } = current {
            stages.push(stage.as_str());
            current = source.as_ref();
        }
        stages
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self.root_cause() {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Strata".into(),
                "Please report this issue at: https://github.com/strata-go/strata/issues".into(),
            ],
            Self::Stage { .. } => Vec::new(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self.root_cause() {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } | Self::Stage { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StrataResult<T> = Result<T, StrataError>;

/// Extension trait for annotating errors with the stage that produced them.
pub trait StageContext<T> {
    /// Wrap the error in a [`StrataError::Stage`].
    fn stage(self, stage: impl Into<String>) -> StrataResult<T>;
}

impl<T, E> StageContext<T> for Result<T, E>
where
    E: Into<StrataError>,
{
    fn stage(self, stage: impl Into<String>) -> StrataResult<T> {
        self.map_err(|e| StrataError::Stage {
            stage: stage.into(),
            source: Box::new(e.into()),
        })
    }
}
