//! Command handlers.
//!
//! Each handler converts its arguments, calls a core service and prints the
//! result through the [`OutputManager`](crate::output::OutputManager).  The
//! adapter wiring they share lives here.

pub mod completions;
pub mod config;
pub mod deps;
pub mod init;
pub mod list;
pub mod new;
pub mod preview;

use tracing::debug;

use goinit_adapters::{
    EmbeddedTemplateStore, FilesystemTemplateStore, LocalFilesystem, MiniJinjaRenderer,
    ZipArchiveWriter,
};
use goinit_core::{
    application::{ScaffoldService, ports::TemplateStore},
    domain::Configuration,
};

use crate::{
    cli::ProjectArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    request::ProjectRequest,
};

/// Pick the template source.
///
/// `templates.local_path` must name a directory.  Without it, a discovered
/// templates directory wins over the built-in set.
pub(crate) fn template_store(config: &AppConfig) -> CliResult<Box<dyn TemplateStore>> {
    if let Some(path) = &config.templates.local_path {
        if !path.is_dir() {
            return Err(CliError::TemplatesNotFound { path: path.clone() });
        }
        debug!(path = %path.display(), "Using configured templates directory");
        return Ok(Box::new(FilesystemTemplateStore::new(path.clone())));
    }

    match FilesystemTemplateStore::discover() {
        Some(store) => {
            debug!(path = %store.root().display(), "Using discovered templates directory");
            Ok(Box::new(store))
        }
        None => Ok(Box::new(EmbeddedTemplateStore::new())),
    }
}

pub(crate) fn scaffold_service(config: &AppConfig) -> CliResult<ScaffoldService> {
    Ok(ScaffoldService::new(
        template_store(config)?,
        Box::new(MiniJinjaRenderer::new()),
        Box::new(ZipArchiveWriter::new()),
        Box::new(LocalFilesystem::new()),
    ))
}

/// Flags and `--from` file resolved against the configured defaults.
pub(crate) fn configuration(args: &ProjectArgs, config: &AppConfig) -> CliResult<Configuration> {
    let configuration = ProjectRequest::from_args(args)?.into_configuration(&config.defaults)?;
    debug!(%configuration, "Configuration resolved");
    Ok(configuration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_local_template_dir_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.templates.local_path = Some(dir.path().join("absent"));

        assert!(matches!(
            template_store(&config),
            Err(CliError::TemplatesNotFound { .. })
        ));
    }

    #[test]
    fn configured_template_dir_is_used() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("README.md.tmpl"), "# custom\n").unwrap();
        let mut config = AppConfig::default();
        config.templates.local_path = Some(dir.path().to_path_buf());

        let store = template_store(&config).unwrap();
        let source = store.fetch(&"README.md.tmpl".into()).unwrap();

        assert_eq!(source.as_deref(), Some(&b"# custom\n"[..]));
    }
}
