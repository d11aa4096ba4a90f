//! `ScaffoldService` builds projects; `CatalogService` describes layouts.

pub mod catalog_service;
pub mod scaffold_service;

pub use catalog_service::{CatalogService, CoverageReport, EntryInfo, LayoutInfo};
pub use scaffold_service::ScaffoldService;
