//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `GOINIT_<SECTION>__<KEY>`
//!    (e.g. `GOINIT_DEFAULTS__ROUTER=gin`)
//! 3. `--config FILE`, or `.goinit.toml` in the current directory over the
//!    platform config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// File name of a project-local configuration.
pub const LOCAL_CONFIG_FILE: &str = ".goinit.toml";

const ENV_PREFIX: &str = "GOINIT";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

/// Values applied when a request leaves a field unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub go_version: String,
    pub structure: String,
    pub project_type: String,
    pub router: String,
    pub logger: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory to read templates from instead of the built-in set.
    pub local_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                go_version: "1.26.0".into(),
                structure: "standard".into(),
                project_type: "rest-api".into(),
                router: "chi".into(),
                logger: "stdlib".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            templates: TemplateConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering files and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to seed configuration defaults")?;

        let mut builder = config::Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            ),
            None => builder
                .add_source(
                    config::File::from(Self::config_path())
                        .format(config::FileFormat::Toml)
                        .required(false),
                )
                .add_source(
                    config::File::from(Path::new(LOCAL_CONFIG_FILE))
                        .format(config::FileFormat::Toml)
                        .required(false),
                ),
        };

        builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.goinit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "goinit", "goinit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file whose values win: explicit, then local, then platform.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        match config_file {
            Some(path) => path.to_path_buf(),
            None if Path::new(LOCAL_CONFIG_FILE).exists() => PathBuf::from(LOCAL_CONFIG_FILE),
            None => Self::config_path(),
        }
    }

    /// Look up a dotted key such as `defaults.router`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.go_version" => self.defaults.go_version.clone(),
            "defaults.structure" => self.defaults.structure.clone(),
            "defaults.project_type" => self.defaults.project_type.clone(),
            "defaults.router" => self.defaults.router.clone(),
            "defaults.logger" => self.defaults.logger.clone(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "templates.local_path" => self
                .templates
                .local_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key accepted by [`Self::get`].
    pub const KEYS: [&'static str; 8] = [
        "defaults.go_version",
        "defaults.structure",
        "defaults.project_type",
        "defaults.router",
        "defaults.logger",
        "output.no_color",
        "output.format",
        "templates.local_path",
    ];
}
