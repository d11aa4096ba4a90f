//! Errors surfaced by the `goinit` binary, their hints and exit codes.

use std::error::Error;
use std::fmt::Write as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use goinit_core::error::{ErrorCategory as CoreCategory, GoinitError};

use crate::config::AppConfig;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// The request file is not valid JSON of the expected shape.
    #[error("Invalid request file {path}: {message}")]
    InvalidRequest { path: PathBuf, message: String },

    /// The request file does not exist.
    #[error("Request file not found: {path}")]
    RequestNotFound { path: PathBuf },

    /// The configured template directory does not exist.
    #[error("Template directory not found: {path}")]
    TemplatesNotFound { path: PathBuf },

    /// The archive destination exists and `--force` was not given.
    #[error("Output file already exists: {path}")]
    OutputExists { path: PathBuf },

    /// `config get` with a key that does not exist.
    #[error("Unknown config key '{key}'")]
    UnknownConfigKey { key: String },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `goinit-core`.
    #[error(transparent)]
    Core(#[from] GoinitError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidRequest { .. } => vec![
                "The request file must be a JSON object".into(),
                "Required for new: \"project_name\" and \"module\"".into(),
                "\"dependencies\" items are strings or objects with a \"pkg\" field".into(),
            ],

            Self::RequestNotFound { path } => vec![
                format!("No file at '{}'", path.display()),
                "Pass flags instead: goinit new <NAME> --module <PATH>".into(),
            ],

            Self::TemplatesNotFound { path } => vec![
                format!("'{}' is not a directory", path.display()),
                "Fix templates.local_path or GOINIT_TEMPLATES_DIR".into(),
                "Unset both to use the built-in templates".into(),
            ],

            Self::OutputExists { path } => vec![
                format!("The file '{}' already exists", path.display()),
                "Use --force to overwrite it".into(),
                "Or choose another destination with --output".into(),
            ],

            Self::UnknownConfigKey { key } => {
                let mut suggestions = vec![
                    format!("'{}' is not a configuration key", key),
                    "Known keys:".into(),
                ];
                suggestions.extend(AppConfig::KEYS.iter().map(|k| format!("  • {k}")));
                suggestions
            }

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                format!("Check your config file at {}", AppConfig::config_path().display()),
                "Use 'goinit init --force' to write a fresh default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
                "Check available disk space".into(),
            ],

            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRequest { .. }
            | Self::OutputExists { .. }
            | Self::UnknownConfigKey { .. }
            | Self::Cancelled => ErrorCategory::UserError,
            Self::RequestNotFound { .. } | Self::TemplatesNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                // Only a user-supplied template directory can hold a broken template.
                CoreCategory::Template | CoreCategory::Configuration => {
                    ErrorCategory::Configuration
                }
                CoreCategory::Io | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Report for stderr: the message, the cause chain when `verbose`, and
    /// suggestions.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let mut out = String::new();

        let headline = format!("error: {self}");
        if color {
            let _ = writeln!(out, "{}", headline.red().bold());
        } else {
            let _ = writeln!(out, "{headline}");
        }

        if verbose {
            for cause in self.causes() {
                let line = format!("  caused by: {cause}");
                if color {
                    let _ = writeln!(out, "{}", line.dimmed());
                } else {
                    let _ = writeln!(out, "{line}");
                }
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let title = "Suggestions:";
            if color {
                let _ = writeln!(out, "\n{}", title.yellow().bold());
            } else {
                let _ = writeln!(out, "\n{title}");
            }
            for suggestion in suggestions {
                let _ = writeln!(out, "  {suggestion}");
            }
        }

        if !verbose && self.causes().next().is_some() {
            let _ = writeln!(out, "\nRun with -v to see the underlying cause.");
        }

        out
    }

    fn causes(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(self.source(), |&e: &&(dyn Error + 'static)| e.source())
    }

    /// Template named by a core render failure.
    pub fn template_id(&self) -> Option<&str> {
        match self {
            Self::Core(core) => core.template_id(),
            _ => None,
        }
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(template) = self.template_id() {
            tracing::debug!(template, "Failing template");
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goinit_core::{application::ApplicationError, domain::DomainError};
    use std::io;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn output_exists_suggests_force() {
        let err = CliError::OutputExists {
            path: PathBuf::from("/tmp/myapi.zip"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn unknown_key_lists_known_keys() {
        let err = CliError::UnknownConfigKey {
            key: "defaults.lang".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("defaults.router")));
    }

    #[test]
    fn core_suggestions_pass_through() {
        let err = CliError::Core(
            DomainError::MissingRequiredField { field: "module" }.into(),
        );
        assert!(err.suggestions().iter().any(|s| s.contains("module")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidRequest {
                path: PathBuf::from("req.json"),
                message: "x".into()
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_missing_identity_is_user_error() {
        let err = CliError::Core(
            DomainError::MissingRequiredField {
                field: "project name",
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        assert_eq!(
            CliError::RequestNotFound {
                path: PathBuf::from("req.json")
            }
            .exit_code(),
            3
        );
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn broken_template_is_configuration_error() {
        let err = CliError::Core(
            ApplicationError::TemplateParse {
                template: "flat/main.go.tmpl".into(),
                reason: "unexpected end".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("flat/main.go.tmpl"));
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn render_lists_suggestions() {
        let err = CliError::OutputExists {
            path: PathBuf::from("/tmp/x.zip"),
        };
        let s = err.render(false, false);
        assert!(s.starts_with("error: Output file already exists: /tmp/x.zip\n"));
        assert!(s.contains("Suggestions:"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn render_hides_causes_unless_verbose() {
        let err = CliError::IoError {
            message: "writing archive".into(),
            source: io::Error::other("disk full"),
        };
        assert!(!err.render(false, false).contains("disk full"));
        assert!(err.render(false, false).contains("-v"));
        assert!(err.render(true, false).contains("caused by: disk full"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
