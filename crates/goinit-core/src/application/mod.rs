//! Use cases over the domain: preview, dependency listing, archive and
//! directory generation, and the layout catalog.
//!
//! Services own no scaffolding rules.  They resolve templates through the
//! [`TemplateStore`] and [`TemplateRenderer`] ports and deliver bytes through
//! [`ArchiveWriter`] or [`Filesystem`].

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{ArchiveWriter, Filesystem, TemplateRenderer, TemplateStore};
pub use services::{CatalogService, CoverageReport, EntryInfo, LayoutInfo, ScaffoldService};
