//! Domain value objects: Structure, ProjectKind, Router, Logger.
//!
//! # Design
//!
//! These are plain `Copy` value types compared by value.
//! This file's only job is to define the selectors a [`Configuration`]
//! carries, their string representations, and their parsers.
//!
//! # Strict vs lenient parsing
//!
//! Every selector implements `FromStr`, which rejects unknown input with a
//! [`DomainError::UnknownSelector`]. The boundary layer uses it for values a
//! user typed explicitly.
//!
//! Structure, router and logger also expose `from_selector`, which never
//! fails:
//!
//! - an unknown structure falls back to [`Structure::Standard`];
//! - an unknown router or logger falls back to `Stdlib`, which pins no
//!   dependency.
//!
//! A project kind has no lenient form: the layouts branch on it, so an
//! unknown kind must be rejected rather than guessed.
//!
//! Callers that forward unvalidated input rely on these fallbacks.
//!
//! [`Configuration`]: crate::domain::Configuration

use crate::domain::error::DomainError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ── Structure ────────────────────────────────────────────────────────────────

/// Architectural layout of the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Structure {
    /// `cmd/`, `internal/` and `pkg/`: the community "standard layout".
    #[default]
    Standard,
    /// Single `main.go` at the module root.
    Flat,
    /// Packages grouped by feature (`internal/user/...`).
    Feature,
    /// Ports and adapters around a core domain.
    Hexagonal,
}

impl Structure {
    pub const ALL: [Structure; 4] = [
        Structure::Standard,
        Structure::Flat,
        Structure::Feature,
        Structure::Hexagonal,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Flat => "flat",
            Self::Feature => "feature",
            Self::Hexagonal => "hexagonal",
        }
    }

    /// Lenient parse: anything unrecognized selects [`Structure::Standard`].
    pub fn from_selector(selector: &str) -> Self {
        selector.parse().unwrap_or_default()
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Structure {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "std" => Ok(Self::Standard),
            "flat" => Ok(Self::Flat),
            "feature" | "feature-based" => Ok(Self::Feature),
            "hexagonal" | "hex" | "ports-and-adapters" => Ok(Self::Hexagonal),
            other => Err(DomainError::UnknownSelector {
                field: "structure",
                value: other.to_string(),
            }),
        }
    }
}

// ── ProjectKind ──────────────────────────────────────────────────────────────

/// The kind of service being scaffolded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    #[default]
    RestApi,
    Cli,
    Grpc,
    Library,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 4] = [
        ProjectKind::RestApi,
        ProjectKind::Cli,
        ProjectKind::Grpc,
        ProjectKind::Library,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RestApi => "rest-api",
            Self::Cli => "cli",
            Self::Grpc => "grpc",
            Self::Library => "library",
        }
    }

}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rest-api" | "rest" | "api" | "http" => Ok(Self::RestApi),
            "cli" => Ok(Self::Cli),
            "grpc" | "rpc" | "rpc-service" => Ok(Self::Grpc),
            "library" | "lib" => Ok(Self::Library),
            other => Err(DomainError::UnknownSelector {
                field: "project type",
                value: other.to_string(),
            }),
        }
    }
}

// ── Router ───────────────────────────────────────────────────────────────────

/// HTTP router wired into the generated entry point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Router {
    Chi,
    Gin,
    Echo,
    Fiber,
    /// `net/http` only.
    #[default]
    Stdlib,
}

impl Router {
    pub const ALL: [Router; 5] = [
        Router::Chi,
        Router::Gin,
        Router::Echo,
        Router::Fiber,
        Router::Stdlib,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chi => "chi",
            Self::Gin => "gin",
            Self::Echo => "echo",
            Self::Fiber => "fiber",
            Self::Stdlib => "stdlib",
        }
    }

    /// Lenient parse: anything unrecognized selects [`Router::Stdlib`].
    pub fn from_selector(selector: &str) -> Self {
        selector.parse().unwrap_or_default()
    }
}

impl fmt::Display for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Router {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chi" => Ok(Self::Chi),
            "gin" => Ok(Self::Gin),
            "echo" => Ok(Self::Echo),
            "fiber" => Ok(Self::Fiber),
            "stdlib" | "net/http" | "none" => Ok(Self::Stdlib),
            other => Err(DomainError::UnknownSelector {
                field: "router",
                value: other.to_string(),
            }),
        }
    }
}

// ── Logger ───────────────────────────────────────────────────────────────────

/// Logging library used by the generated logger package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Logger {
    Zerolog,
    Zap,
    /// `log/slog` ships with the Go toolchain; it pins nothing.
    Slog,
    Logrus,
    #[default]
    Stdlib,
}

impl Logger {
    pub const ALL: [Logger; 5] = [
        Logger::Zerolog,
        Logger::Zap,
        Logger::Slog,
        Logger::Logrus,
        Logger::Stdlib,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Zerolog => "zerolog",
            Self::Zap => "zap",
            Self::Slog => "slog",
            Self::Logrus => "logrus",
            Self::Stdlib => "stdlib",
        }
    }

    /// Lenient parse: anything unrecognized selects [`Logger::Stdlib`].
    pub fn from_selector(selector: &str) -> Self {
        selector.parse().unwrap_or_default()
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Logger {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zerolog" => Ok(Self::Zerolog),
            "zap" => Ok(Self::Zap),
            "slog" => Ok(Self::Slog),
            "logrus" => Ok(Self::Logrus),
            "stdlib" | "log" | "none" => Ok(Self::Stdlib),
            other => Err(DomainError::UnknownSelector {
                field: "logger",
                value: other.to_string(),
            }),
        }
    }
}
