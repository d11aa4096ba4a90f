//! Traits the services call out through.
//!
//! Only driven ports exist: the CLI calls the services directly.  Their
//! implementations live in `goinit-adapters`; tests use the generated
//! `mockall` doubles.

pub mod output;

pub use output::{ArchiveWriter, Filesystem, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::{MockArchiveWriter, MockFilesystem, MockTemplateRenderer, MockTemplateStore};
