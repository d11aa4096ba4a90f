//! Template store reading from a directory on disk.
//!
//! Lets users override the built-in templates without rebuilding. A
//! template id maps to `<root>/<id>`; a file that is not there is reported
//! as "not found", which the scaffold service turns into a skipped file.
//!
//! # Directory discovery
//!
//! [`FilesystemTemplateStore::discover`] probes, in order, stopping at the
//! first directory that exists:
//!
//! 1. **`$GOINIT_TEMPLATES_DIR`**, the environment override.
//! 2. **`./templates`**, relative to the current working directory.
//! 3. **`<executable-dir>/templates`**, sibling to the `goinit` binary.
//!
//! When nothing is found the caller falls back to the embedded store.

use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use goinit_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateId,
    error::{Context, GoinitResult},
};

/// Environment variable naming a templates directory.
pub const TEMPLATES_DIR_ENV: &str = "GOINIT_TEMPLATES_DIR";

/// Templates read from `root` on every fetch.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateStore {
    root: PathBuf,
}

impl FilesystemTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Probe the candidate directories described in the module docs.
    #[instrument]
    pub fn discover() -> Option<Self> {
        for candidate in candidate_paths() {
            debug!(path = %candidate.display(), "checking candidate templates path");

            if candidate.is_dir() {
                debug!(path = %candidate.display(), "using templates directory");
                return Some(Self::new(candidate));
            }
        }
        None
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every file below the root, as template ids, sorted.
    pub fn template_ids(&self) -> GoinitResult<Vec<TemplateId>> {
        let mut ids = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.context(format!("listing {}", self.root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                ids.push(TemplateId::new(
                    relative.to_string_lossy().replace('\\', "/"),
                ));
            }
        }

        ids.sort();
        Ok(ids)
    }
}

impl TemplateStore for FilesystemTemplateStore {
    fn fetch(&self, id: &TemplateId) -> GoinitResult<Option<Vec<u8>>> {
        let relative = Path::new(id.as_str());

        // Ids never climb out of the templates directory.
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Ok(None);
        }

        match std::fs::read(self.root.join(relative)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApplicationError::TemplateStore {
                template: id.to_string(),
                reason: e.to_string(),
            }
            .into()),
        }
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);

    if let Ok(env_dir) = std::env::var(TEMPLATES_DIR_ENV) {
        paths.push(PathBuf::from(env_dir));
    }

    paths.push(PathBuf::from("templates"));

    if let Some(exe_sibling) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("templates")))
    {
        paths.push(exe_sibling);
    }

    paths
}
