//! Errors raised by the pure domain: bad selectors, missing identity and
//! bundle path collisions.

use thiserror::Error;

use super::value_objects::{Logger, ProjectKind, Router, Structure};

/// A rule of the domain was broken.  `Clone` so a single failure can be
/// reported per template without re-deriving it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown {field} '{value}'")]
    UnknownSelector { field: &'static str, value: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid project name '{name}': must be a single directory name")]
    InvalidProjectName { name: String },

    #[error("Duplicate path in project bundle: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Hints shown under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownSelector { field, value } => {
                let known = match *field {
                    "structure" => join(Structure::ALL.iter().map(Structure::as_str)),
                    "project type" => join(ProjectKind::ALL.iter().map(ProjectKind::as_str)),
                    "router" => join(Router::ALL.iter().map(Router::as_str)),
                    "logger" => join(Logger::ALL.iter().map(Logger::as_str)),
                    _ => return vec![format!("'{value}' is not a known {field}")],
                };
                vec![
                    format!("'{value}' is not a known {field}"),
                    format!("Expected one of: {known}"),
                ]
            }
            Self::MissingRequiredField { field } => vec![
                format!("'{field}' must not be empty"),
                "Pass it explicitly or set it in your request file".into(),
            ],
            Self::InvalidProjectName { name } => vec![
                format!("'{name}' would place files outside the output directory"),
                "Use a plain name without '/', '\\', '.' or '..'".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two layout entries resolved to '{path}'"),
                "This is a bug in the layout table; please report it".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => {
                vec![format!("Output paths are relative to the project root, got '{path}'")]
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownSelector { .. }
            | Self::MissingRequiredField { .. }
            | Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

fn join<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
