//! Infrastructure adapters for goinit.
//!
//! This crate implements the ports defined in `goinit-core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the
//! built-in template set under `templates/`.

pub mod archive;
pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use archive::ZipArchiveWriter;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::MiniJinjaRenderer;
pub use template_store::{EmbeddedTemplateStore, FilesystemTemplateStore, InMemoryTemplateStore};
