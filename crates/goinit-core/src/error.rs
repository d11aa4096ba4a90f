//! Unified error handling for goinit core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for goinit core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GoinitError {
    /// Errors from the domain layer (invalid selectors, bad bundle paths).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (templates, archive, disk).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl GoinitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in goinit".into(),
                "Please report this issue at: https://github.com/goinit/goinit/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The template a parse/render/store failure is about.
    pub fn template_id(&self) -> Option<&str> {
        match self {
            Self::Application(e) => e.template_id(),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    Io,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type GoinitResult<T> = Result<T, GoinitError>;

/// Extension trait for turning foreign errors into [`GoinitError::Internal`].
pub trait Context<T> {
    fn context(self, msg: impl Into<String>) -> GoinitResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> GoinitResult<T> {
        self.map_err(|e| GoinitError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_validation() {
        let err: GoinitError = DomainError::MissingRequiredField { field: "module" }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.template_id(), None);
    }

    #[test]
    fn template_id_is_forwarded() {
        let err: GoinitError = ApplicationError::TemplateParse {
            template: "flat/main.go.tmpl".into(),
            reason: "unexpected end".into(),
        }
        .into();

        assert_eq!(err.template_id(), Some("flat/main.go.tmpl"));
        assert!(err.to_string().contains("flat/main.go.tmpl"));
    }

    #[test]
    fn context_wraps_as_internal() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = result.context("writing archive").unwrap_err();

        assert!(matches!(err, GoinitError::Internal { .. }));
        assert!(err.to_string().contains("writing archive: boom"));
    }
}
