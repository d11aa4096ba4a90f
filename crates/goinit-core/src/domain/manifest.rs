//! Manifest resolution: layout table + configuration → ordered file list.
//!
//! Preview and generate both go through [`Manifest::resolve`]; nothing else
//! decides which files a configuration produces.

use serde::Serialize;

use crate::domain::entities::{configuration::Configuration, file_entry::TemplateId};
use crate::domain::layout;
use crate::domain::value_objects::Structure;

/// Name of the generated module manifest.
pub const GO_MOD: &str = "go.mod";
/// Name of the (always empty) checksum placeholder.
pub const GO_SUM: &str = "go.sum";

/// One applicable entry with its placeholder substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub path: String,
    pub template: TemplateId,
}

/// Ordered list of files a configuration produces, bookkeeping excluded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Filter the `structure` table by `config`, preserving declaration order.
    pub fn resolve(structure: Structure, config: &Configuration) -> Self {
        let entries = layout::entries(structure)
            .iter()
            .filter(|entry| entry.applies_to(config))
            .map(|entry| ManifestEntry {
                path: entry.output_path(config.project_name()),
                template: entry.template().clone(),
            })
            .collect();

        Self { entries }
    }

    /// Resolve against the structure the configuration itself selects.
    pub fn for_config(config: &Configuration) -> Self {
        Self::resolve(config.structure(), config)
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Relative output paths followed by `go.mod` and `go.sum`, which is
    /// exactly the order generation writes them.
    pub fn preview_paths(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.path.clone())
            .chain([GO_MOD.to_string(), GO_SUM.to_string()])
            .collect()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ManifestEntry;
    type IntoIter = std::slice::Iter<'a, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
