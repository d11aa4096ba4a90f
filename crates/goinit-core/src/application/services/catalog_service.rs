//! Catalog Service - read-only view of the layout registry.
//!
//! Answers "which files does each layout declare" and "which of the
//! referenced templates can the active store actually provide". A template
//! the store lacks is skipped silently at generation time; the coverage
//! report is where that becomes visible.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::TemplateStore,
    domain::{Structure, TemplateId, layout},
    error::GoinitResult,
};

/// One declared file of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryInfo {
    pub template: TemplateId,
    pub output: String,
    pub conditional: bool,
}

/// A layout variant and its declared files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutInfo {
    pub structure: Structure,
    pub entries: Vec<EntryInfo>,
}

/// Which referenced templates the store can serve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub available: Vec<TemplateId>,
    pub missing: Vec<TemplateId>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Service for layout and template inspection.
pub struct CatalogService {
    store: Box<dyn TemplateStore>,
}

impl CatalogService {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Every layout variant with its declared entries.
    pub fn layouts(&self) -> Vec<LayoutInfo> {
        Structure::ALL.iter().map(|s| Self::layout(*s)).collect()
    }

    /// A single layout variant.
    pub fn layout(structure: Structure) -> LayoutInfo {
        LayoutInfo {
            structure,
            entries: layout::entries(structure)
                .iter()
                .map(|e| EntryInfo {
                    template: e.template().clone(),
                    output: e.output_pattern().to_string(),
                    conditional: e.is_conditional(),
                })
                .collect(),
        }
    }

    /// Probe the store for every referenced template id.
    #[instrument(skip_all)]
    pub fn coverage(&self) -> GoinitResult<CoverageReport> {
        let mut report = CoverageReport::default();

        for id in layout::referenced_templates() {
            if self.store.fetch(&id)?.is_some() {
                report.available.push(id);
            } else {
                debug!(template = %id, "Template missing from store");
                report.missing.push(id);
            }
        }

        Ok(report)
    }
}
