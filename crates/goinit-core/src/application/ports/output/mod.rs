//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `goinit-adapters` crate provides implementations. All ports are
//! synchronous and `Send + Sync`; one request never shares mutable state
//! with another.

use std::path::Path;

use crate::domain::{Configuration, ProjectBundle, TemplateId};
use crate::error::GoinitResult;

/// Port for template lookup.
///
/// Implemented by:
/// - `goinit_adapters::template_store::EmbeddedTemplateStore` (built-in)
/// - `goinit_adapters::template_store::FilesystemTemplateStore` (user directory)
/// - `goinit_adapters::template_store::InMemoryTemplateStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Raw template bytes.
    ///
    /// `Ok(None)` means "no such template" and is not an error; `Err` is
    /// reserved for a backing store that could not be read.
    fn fetch(&self, id: &TemplateId) -> GoinitResult<Option<Vec<u8>>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `goinit_adapters::renderer::MiniJinjaRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` with the whole configuration as data context.
    ///
    /// Fails with `TemplateParse` for malformed or non-UTF-8 text and with
    /// `TemplateRender` for execution failures; both carry `id`.
    fn render(
        &self,
        id: &TemplateId,
        source: &[u8],
        config: &Configuration,
    ) -> GoinitResult<String>;
}

/// Port for packaging a bundle.
///
/// Implemented by:
/// - `goinit_adapters::archive::ZipArchiveWriter`
#[cfg_attr(test, mockall::automock)]
pub trait ArchiveWriter: Send + Sync {
    /// Write every file as `<root>/<path>`, in bundle order.
    fn write(&self, bundle: &ProjectBundle) -> GoinitResult<Vec<u8>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `goinit_adapters::filesystem::LocalFilesystem` (production)
/// - `goinit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GoinitResult<()>;

    /// Write bytes to a file, replacing it.
    fn write_file(&self, path: &Path, contents: &[u8]) -> GoinitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> GoinitResult<()>;
}
