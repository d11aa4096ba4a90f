//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Resolve the manifest for a configuration
//! 2. Fetch and render each template into a project bundle
//! 3. Append `go.mod` and an empty `go.sum`
//! 4. Package the bundle (archive) or write it to disk (materialize)
//!
//! Preview and generation share step 1, so they always agree on the files a
//! configuration produces.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ArchiveWriter, Filesystem, TemplateRenderer, TemplateStore},
    },
    domain::{
        Configuration, DependencySet, DomainValidator as validator, GO_MOD, GO_SUM, Manifest,
        ProjectBundle, dependencies, go_mod,
    },
    error::GoinitResult,
};

/// Main scaffolding service.
///
/// Stateless between calls: every operation derives everything it needs from
/// the configuration it is given.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    archive: Box<dyn ArchiveWriter>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use goinit_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     archive,    // impl ArchiveWriter
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        archive: Box<dyn ArchiveWriter>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            archive,
            filesystem,
        }
    }

    /// Ordered list of files `generate` would produce, `go.mod` and `go.sum`
    /// included. Paths are relative to the project root.
    pub fn preview(&self, config: &Configuration) -> Vec<String> {
        Manifest::for_config(config).preview_paths()
    }

    /// Pinned Go modules for `config`.
    pub fn dependencies(&self, config: &Configuration) -> DependencySet {
        dependencies::resolve(config)
    }

    /// Render every applicable template into an in-memory bundle.
    ///
    /// Templates the store does not have are skipped. Any parse or render
    /// failure aborts the whole call.
    #[instrument(
        skip_all,
        fields(
            project = %config.project_name(),
            structure = %config.structure()
        )
    )]
    pub fn bundle(&self, config: &Configuration) -> GoinitResult<ProjectBundle> {
        let manifest = Manifest::for_config(config);
        debug!(entries = manifest.len(), "Manifest resolved");

        let mut bundle = ProjectBundle::new(config.project_name());

        for entry in &manifest {
            let Some(source) = self.store.fetch(&entry.template)? else {
                debug!(template = %entry.template, path = %entry.path, "Template not found, skipping");
                continue;
            };

            let rendered = self.renderer.render(&entry.template, &source, config)?;
            bundle.add_file(entry.path.as_str(), rendered)?;
        }

        let deps = self.dependencies(config);
        debug!(dependencies = deps.len(), "Dependencies resolved");

        bundle.add_file(
            GO_MOD,
            go_mod::render(config.module(), config.go_version(), &deps),
        )?;
        bundle.add_file(GO_SUM, Vec::new())?;

        validator::validate_bundle(&bundle)?;
        Ok(bundle)
    }

    /// Generate the project archive.
    #[instrument(skip_all, fields(project = %config.project_name()))]
    pub fn generate(&self, config: &Configuration) -> GoinitResult<Vec<u8>> {
        info!("Generating {} {} project", config.structure(), config.project_type());

        let bundle = self.bundle(config)?;
        let bytes = self.archive.write(&bundle)?;

        info!(
            files = bundle.file_count(),
            bytes = bytes.len(),
            "Archive generated"
        );
        Ok(bytes)
    }

    /// Write the project below `output_dir`, returning the project root.
    ///
    /// Refuses to touch an existing root. If any write fails the root is
    /// removed again (best effort) and the original error is returned.
    #[instrument(
        skip_all,
        fields(
            project = %config.project_name(),
            output_dir = %output_dir.display()
        )
    )]
    pub fn materialize(&self, config: &Configuration, output_dir: &Path) -> GoinitResult<PathBuf> {
        let bundle = self.bundle(config)?;
        let root = output_dir.join(bundle.root());

        if self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }

        match self.write_all(&root, &bundle) {
            Ok(()) => {
                info!(files = bundle.file_count(), "Project written");
                Ok(root)
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(&root);
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_all(&self, root: &Path, bundle: &ProjectBundle) -> GoinitResult<()> {
        self.filesystem.create_dir_all(root)?;

        for file in bundle.files() {
            let path = root.join(&file.path);

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            self.filesystem.write_file(&path, &file.contents)?;
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
