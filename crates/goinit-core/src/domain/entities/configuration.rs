//! The `Configuration` value object and its builder.
//!
//! A `Configuration` describes one generation request. It is constructed once
//! by the boundary layer and then only read: the layout predicates, the
//! dependency rules and the template renderer all borrow it.
//!
//! # Render context
//!
//! `Configuration` derives `Serialize` so the whole value can be handed to a
//! template engine as its data context. Field names are the contract with
//! template authors (`project_name`, `go_version`, `use_docker`, ...); renaming
//! a field breaks every template that mentions it.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Required-field checks (non-empty
//! name and module) belong to the boundary layer; the builder accepts any
//! input.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::{Logger, ProjectKind, Router, Structure};

// ── Feature toggles ──────────────────────────────────────────────────────────

/// Independent boolean switches of a [`Configuration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Dockerfile and docker-compose.
    Docker,
    /// GitHub Actions workflow.
    GitHubCi,
    /// Config loader package.
    ConfigLoader,
    /// Structured logging package and middleware.
    StructuredLogging,
    /// Database driver.
    Database,
    /// Redis cache client.
    Redis,
    /// JWT token handling.
    Jwt,
    /// Air hot-reload.
    HotReload,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::Docker,
        Feature::GitHubCi,
        Feature::ConfigLoader,
        Feature::StructuredLogging,
        Feature::Database,
        Feature::Redis,
        Feature::Jwt,
        Feature::HotReload,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Docker => "docker",
            Self::GitHubCi => "github",
            Self::ConfigLoader => "config",
            Self::StructuredLogging => "logger",
            Self::Database => "database",
            Self::Redis => "redis",
            Self::Jwt => "jwt",
            Self::HotReload => "air",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Value object ─────────────────────────────────────────────────────────────

/// Immutable description of the project to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    project_name: String,
    module: String,
    description: String,
    go_version: String,

    structure: Structure,
    project_type: ProjectKind,

    router: Router,
    logger: Logger,

    use_docker: bool,
    use_github: bool,
    use_config: bool,
    use_logger: bool,
    use_database: bool,
    use_redis: bool,
    use_jwt: bool,
    use_air: bool,

    /// Free-form library names in caller order.
    dependencies: Vec<String>,
}

impl Configuration {
    /// Start building a configuration for `project_name` / `module`.
    pub fn builder(
        project_name: impl Into<String>,
        module: impl Into<String>,
    ) -> ConfigurationBuilder {
        ConfigurationBuilder::new(project_name, module)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }
    pub fn module(&self) -> &str {
        &self.module
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn go_version(&self) -> &str {
        &self.go_version
    }
    pub const fn structure(&self) -> Structure {
        self.structure
    }
    pub const fn project_type(&self) -> ProjectKind {
        self.project_type
    }
    pub const fn router(&self) -> Router {
        self.router
    }
    pub const fn logger(&self) -> Logger {
        self.logger
    }
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub const fn use_docker(&self) -> bool {
        self.use_docker
    }
    pub const fn use_github(&self) -> bool {
        self.use_github
    }
    pub const fn use_config(&self) -> bool {
        self.use_config
    }
    pub const fn use_logger(&self) -> bool {
        self.use_logger
    }
    pub const fn use_database(&self) -> bool {
        self.use_database
    }
    pub const fn use_redis(&self) -> bool {
        self.use_redis
    }
    pub const fn use_jwt(&self) -> bool {
        self.use_jwt
    }
    pub const fn use_air(&self) -> bool {
        self.use_air
    }

    /// Whether a feature toggle is switched on.
    pub const fn has(&self, feature: Feature) -> bool {
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

    /// Enabled toggles, in [`Feature::ALL`] order.
    pub fn enabled_features(&self) -> Vec<Feature> {
        Feature::ALL.into_iter().filter(|f| self.has(*f)).collect()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} {}, router={}, logger={})",
            self.project_name,
            self.module,
            self.structure,
            self.project_type,
            self.router,
            self.logger
        )
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Fluent builder for [`Configuration`].
///
/// Every optional field starts at its type's default: empty strings,
/// `standard` structure, `rest-api` kind, `stdlib` router and logger, all
/// toggles off and no dependencies.
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    inner: Configuration,
}

impl ConfigurationBuilder {
    fn new(project_name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            inner: Configuration {
                project_name: project_name.into(),
                module: module.into(),
                description: String::new(),
                go_version: String::new(),
                structure: Structure::default(),
                project_type: ProjectKind::default(),
                router: Router::default(),
                logger: Logger::default(),
                use_docker: false,
                use_github: false,
                use_config: false,
                use_logger: false,
                use_database: false,
                use_redis: false,
                use_jwt: false,
                use_air: false,
                dependencies: Vec::new(),
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = description.into();
        self
    }

    pub fn go_version(mut self, version: impl Into<String>) -> Self {
        self.inner.go_version = version.into();
        self
    }

    pub fn structure(mut self, structure: Structure) -> Self {
        self.inner.structure = structure;
        self
    }

    pub fn project_type(mut self, kind: ProjectKind) -> Self {
        self.inner.project_type = kind;
        self
    }

    pub fn router(mut self, router: Router) -> Self {
        self.inner.router = router;
        self
    }

    pub fn logger(mut self, logger: Logger) -> Self {
        self.inner.logger = logger;
        self
    }

    /// Switch a single toggle on or off.
    pub fn feature(mut self, feature: Feature, enabled: bool) -> Self {
        let slot = match feature {
            Feature::Docker => &mut self.inner.use_docker,
            Feature::GitHubCi => &mut self.inner.use_github,
            Feature::ConfigLoader => &mut self.inner.use_config,
            Feature::StructuredLogging => &mut self.inner.use_logger,
            Feature::Database => &mut self.inner.use_database,
            Feature::Redis => &mut self.inner.use_redis,
            Feature::Jwt => &mut self.inner.use_jwt,
            Feature::HotReload => &mut self.inner.use_air,
        };
        *slot = enabled;
        self
    }

    /// Switch on every feature in `features`.
    pub fn features(self, features: impl IntoIterator<Item = Feature>) -> Self {
        features
            .into_iter()
            .fold(self, |builder, feature| builder.feature(feature, true))
    }

    /// Append one free-form dependency name.
    pub fn dependency(mut self, name: impl Into<String>) -> Self {
        self.inner.dependencies.push(name.into());
        self
    }

    /// Append free-form dependency names, keeping their order.
    pub fn dependencies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner
            .dependencies
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Configuration {
        self.inner
    }
}
