//! Template store backed by the templates compiled into the binary.

use include_dir::{Dir, DirEntry, include_dir};

use goinit_core::{application::ports::TemplateStore, domain::TemplateId, error::GoinitResult};

static TEMPLATES: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// The built-in template set.
///
/// Ids are paths relative to the `templates/` directory of this crate, e.g.
/// `standard/Makefile.tmpl`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }

    /// Every embedded template id, sorted.
    pub fn template_ids(&self) -> Vec<TemplateId> {
        let mut ids = Vec::new();
        collect_ids(&TEMPLATES, &mut ids);
        ids.sort();
        ids
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn fetch(&self, id: &TemplateId) -> GoinitResult<Option<Vec<u8>>> {
        Ok(TEMPLATES
            .get_file(id.as_str())
            .map(|file| file.contents().to_vec()))
    }
}

fn collect_ids(dir: &'static Dir, ids: &mut Vec<TemplateId>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let path = file.path().to_string_lossy().replace('\\', "/");
                ids.push(TemplateId::new(path));
            }
            DirEntry::Dir(subdir) => collect_ids(subdir, ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goinit_core::domain::layout;

    #[test]
    fn serves_every_referenced_template() {
        let store = EmbeddedTemplateStore::new();

        for id in layout::referenced_templates() {
            assert!(store.fetch(&id).unwrap().is_some(), "missing {id}");
        }
    }

    #[test]
    fn embeds_nothing_unreferenced() {
        let referenced = layout::referenced_templates();
        for id in EmbeddedTemplateStore::new().template_ids() {
            assert!(referenced.contains(&id), "unreferenced template {id}");
        }
    }

    #[test]
    fn unknown_id_is_none() {
        let store = EmbeddedTemplateStore::new();
        let id = TemplateId::from_static("standard/nope.tmpl");

        assert_eq!(store.fetch(&id).unwrap(), None);
    }
}
