// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// The domain layer is almost entirely infallible (normalization and path
/// substitution never fail). What remains are template-tree invariants that
/// a source adapter or the materializer can violate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("Template '{path}' is not valid UTF-8")]
    NonUtf8Template { path: String },

    #[error("Invalid template path '{path}': {reason}")]
    InvalidTemplatePath { path: String, reason: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Template root '{root}' does not exist")]
    MissingTemplateRoot { root: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NonUtf8Template { path } => vec![
                format!("'{}' is marked as a template but is not text", path),
                "Drop the .tmpl suffix to copy the file verbatim".into(),
            ],
            Self::InvalidTemplatePath { path, .. } => vec![
                format!("Template paths are slash-separated and relative: {}", path),
                "Remove absolute prefixes and '..' segments from the template tree".into(),
            ],
            Self::MissingTemplateRoot { root } => vec![
                format!("The template tree has no '{}' directory", root),
                "Check templates.local_path in your configuration".into(),
                "Unset it to fall back to the built-in templates".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NonUtf8Template { .. } | Self::InvalidTemplatePath { .. } => {
                ErrorCategory::Validation
            }
            Self::MissingTemplateRoot { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
