//! Project requests: flags and JSON request files turned into a
//! [`Configuration`].
//!
//! A request file uses the wire shape of the generation API:
//!
//! ```json
//! {
//!   "project_name": "myapi",
//!   "module": "github.com/acme/myapi",
//!   "structure": "hexagonal",
//!   "router": "gin",
//!   "use_docker": true,
//!   "dependencies": ["Zap Logger", { "name": "Viper", "pkg": "github.com/spf13/viper" }]
//! }
//! ```
//!
//! Structure, router and logger strings from a file are read leniently
//! (unknown values fall back to the built-in default, as the API did).  An
//! unknown project type is rejected, since no layout could honour it.  Blank
//! fields take the `[defaults]` from [`AppConfig`], which must themselves be
//! valid.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use goinit_core::{
    domain::{Configuration, DomainError, Feature, Logger, ProjectKind, Router, Structure},
    error::GoinitError,
};

use crate::{
    cli::{self, FeatureFlag, ProjectArgs},
    config::Defaults,
    error::{CliError, CliResult},
};

/// One project description, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectRequest {
    pub project_name: String,
    pub module: String,
    pub description: String,
    pub go_version: String,
    pub structure: String,
    pub project_type: String,
    pub router: String,
    pub logger: String,
    pub use_docker: bool,
    pub use_github: bool,
    pub use_config: bool,
    pub use_logger: bool,
    pub use_database: bool,
    pub use_redis: bool,
    pub use_jwt: bool,
    pub use_air: bool,
    pub dependencies: Vec<DependencySpec>,
}

/// A dependency item: a bare name, or a catalog object whose `pkg` is used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DependencySpec {
    Name(String),
    Library {
        #[serde(default)]
        name: String,
        #[serde(default)]
        pkg: String,
    },
}

impl DependencySpec {
    /// The name handed to the dependency resolver.
    pub fn resolved_name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Library { pkg, .. } if !pkg.is_empty() => pkg,
            Self::Library { name, .. } => name,
        }
    }
}

impl ProjectRequest {
    /// Parse a request file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CliError::RequestNotFound {
                path: path.to_path_buf(),
            },
            _ => CliError::IoError {
                message: format!("Failed to read request file '{}'", path.display()),
                source: e,
            },
        })?;

        Self::from_json(&text).map_err(|e| CliError::InvalidRequest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Read `--from` (if any) and lay the flags over it.
    pub fn from_args(args: &ProjectArgs) -> CliResult<Self> {
        let mut request = match &args.from {
            Some(path) => {
                debug!(path = %path.display(), "Reading request file");
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        request.apply(args);
        Ok(request)
    }

    /// Overwrite fields with every flag that was given.
    pub fn apply(&mut self, args: &ProjectArgs) {
        let text_flags = [
            (&mut self.project_name, &args.name),
            (&mut self.module, &args.module),
            (&mut self.description, &args.description),
            (&mut self.go_version, &args.go_version),
        ];
        for (field, flag) in text_flags {
            if let Some(value) = flag {
                field.clone_from(value);
            }
        }

        if let Some(structure) = args.structure {
            self.structure = Structure::from(structure).as_str().into();
        }
        if let Some(kind) = args.kind {
            self.project_type = ProjectKind::from(kind).as_str().into();
        }
        if let Some(router) = args.router {
            self.router = Router::from(router).as_str().into();
        }
        if let Some(logger) = args.logger {
            self.logger = Logger::from(logger).as_str().into();
        }

        let flags: Vec<FeatureFlag> = if args.all_features {
            FEATURE_FLAGS.to_vec()
        } else {
            args.features.clone()
        };
        for flag in flags {
            *self.toggle_mut(Feature::from(flag)) = true;
        }

        self.dependencies
            .extend(args.deps.iter().cloned().map(DependencySpec::Name));
    }

    fn toggle_mut(&mut self, feature: Feature) -> &mut bool {
        match feature {
            Feature::Docker => &mut self.use_docker,
            Feature::GitHubCi => &mut self.use_github,
            Feature::ConfigLoader => &mut self.use_config,
            Feature::StructuredLogging => &mut self.use_logger,
            Feature::Database => &mut self.use_database,
            Feature::Redis => &mut self.use_redis,
            Feature::Jwt => &mut self.use_jwt,
            Feature::HotReload => &mut self.use_air,
        }
    }

    fn toggle(&self, feature: Feature) -> bool {
        match feature {
            Feature::Docker => self.use_docker,
            Feature::GitHubCi => self.use_github,
            Feature::ConfigLoader => self.use_config,
            Feature::StructuredLogging => self.use_logger,
            Feature::Database => self.use_database,
            Feature::Redis => self.use_redis,
            Feature::Jwt => self.use_jwt,
            Feature::HotReload => self.use_air,
        }
    }

    /// Fill blanks from `defaults` and build the core configuration.
    pub fn into_configuration(self, defaults: &Defaults) -> CliResult<Configuration> {
        let structure = selector(&self.structure, &defaults.structure, Structure::from_selector)?;
        let kind: ProjectKind = if self.project_type.trim().is_empty() {
            configured(&defaults.project_type)?
        } else {
            self.project_type.parse().map_err(GoinitError::from)?
        };
        let router = selector(&self.router, &defaults.router, Router::from_selector)?;
        let logger = selector(&self.logger, &defaults.logger, Logger::from_selector)?;

        let go_version = if self.go_version.trim().is_empty() {
            defaults.go_version.clone()
        } else {
            self.go_version.clone()
        };

        let mut builder = Configuration::builder(self.project_name.clone(), self.module.clone())
            .description(self.description.clone())
            .go_version(go_version)
            .structure(structure)
            .project_type(kind)
            .router(router)
            .logger(logger)
            .dependencies(self.dependencies.iter().map(DependencySpec::resolved_name));

        for feature in Feature::ALL {
            builder = builder.feature(feature, self.toggle(feature));
        }

        Ok(builder.build())
    }
}

const FEATURE_FLAGS: [FeatureFlag; 8] = [
    FeatureFlag::Docker,
    FeatureFlag::Github,
    FeatureFlag::Config,
    FeatureFlag::Logger,
    FeatureFlag::Database,
    FeatureFlag::Redis,
    FeatureFlag::Jwt,
    FeatureFlag::Air,
];

/// Lenient for request values, strict for configured defaults.
fn selector<T>(value: &str, default: &str, lenient: fn(&str) -> T) -> CliResult<T>
where
    T: FromStr<Err = DomainError>,
{
    if value.trim().is_empty() {
        configured(default)
    } else {
        Ok(lenient(value))
    }
}

fn configured<T>(default: &str) -> CliResult<T>
where
    T: FromStr<Err = DomainError>,
{
    default.parse().map_err(|e: DomainError| CliError::ConfigError {
        message: format!("invalid default: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── CLI → core conversions ────────────────────────────────────────────────────

impl From<cli::Structure> for Structure {
    fn from(value: cli::Structure) -> Self {
        match value {
            cli::Structure::Standard => Self::Standard,
            cli::Structure::Flat => Self::Flat,
            cli::Structure::Feature => Self::Feature,
            cli::Structure::Hexagonal => Self::Hexagonal,
        }
    }
}

impl From<cli::ProjectKind> for ProjectKind {
    fn from(value: cli::ProjectKind) -> Self {
        match value {
            cli::ProjectKind::RestApi => Self::RestApi,
            cli::ProjectKind::Cli => Self::Cli,
            cli::ProjectKind::Grpc => Self::Grpc,
            cli::ProjectKind::Library => Self::Library,
        }
    }
}

impl From<cli::Router> for Router {
    fn from(value: cli::Router) -> Self {
        match value {
            cli::Router::Chi => Self::Chi,
            cli::Router::Gin => Self::Gin,
            cli::Router::Echo => Self::Echo,
            cli::Router::Fiber => Self::Fiber,
            cli::Router::Stdlib => Self::Stdlib,
        }
    }
}

impl From<cli::Logger> for Logger {
    fn from(value: cli::Logger) -> Self {
        match value {
            cli::Logger::Zerolog => Self::Zerolog,
            cli::Logger::Zap => Self::Zap,
            cli::Logger::Slog => Self::Slog,
            cli::Logger::Logrus => Self::Logrus,
            cli::Logger::Stdlib => Self::Stdlib,
        }
    }
}

impl From<FeatureFlag> for Feature {
    fn from(value: FeatureFlag) -> Self {
        match value {
            FeatureFlag::Docker => Self::Docker,
            FeatureFlag::Github => Self::GitHubCi,
            FeatureFlag::Config => Self::ConfigLoader,
            FeatureFlag::Logger => Self::StructuredLogging,
            FeatureFlag::Database => Self::Database,
            FeatureFlag::Redis => Self::Redis,
            FeatureFlag::Jwt => Self::Jwt,
            FeatureFlag::Air => Self::HotReload,
        }
    }
}
