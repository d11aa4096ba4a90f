//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the adapters
//! behind the ports, not violations of domain rules. Domain errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while assembling, packaging or writing a project.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Template text could not be parsed (malformed syntax, not UTF-8).
    #[error("Failed to parse template {template}: {reason}")]
    TemplateParse { template: String, reason: String },

    /// Template parsed but failed while rendering (unknown field, bad filter).
    #[error("Failed to render template {template}: {reason}")]
    TemplateRender { template: String, reason: String },

    /// The backing template store failed (I/O, not "missing").
    #[error("Template store failed reading {template}: {reason}")]
    TemplateStore { template: String, reason: String },

    /// Packaging the bundle into an archive failed.
    #[error("Failed to build archive: {reason}")]
    ArchiveFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Store access failed (lock poisoned).
    #[error("Template store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateParse { template, .. } => vec![
                format!("Template '{}' has invalid syntax", template),
                "If you use a custom templates directory, check that file".into(),
                "Unset GOINIT_TEMPLATES_DIR to fall back to the built-in templates".into(),
            ],
            Self::TemplateRender { template, reason } => vec![
                format!("Template '{}' could not be rendered: {}", template, reason),
                "Templates may only reference configuration fields".into(),
                "See `goinit list` for the templates each layout uses".into(),
            ],
            Self::TemplateStore { template, .. } => vec![
                format!("Could not read '{}'", template),
                "Check permissions on your templates directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Remove it or extract into a different directory".into(),
                "Choose a different project name".into(),
            ],
            Self::ArchiveFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateParse { .. } | Self::TemplateRender { .. } => ErrorCategory::Template,
            Self::TemplateStore { .. } | Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::ArchiveFailed { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }

    /// Id of the template involved, for template failures.
    pub fn template_id(&self) -> Option<&str> {
        match self {
            Self::TemplateParse { template, .. }
            | Self::TemplateRender { template, .. }
            | Self::TemplateStore { template, .. } => Some(template),
            _ => None,
        }
    }
}
