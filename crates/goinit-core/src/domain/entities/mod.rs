pub mod common;
pub mod configuration;
pub mod file_entry;
pub mod project_bundle;

pub use crate::domain::DomainError;
pub use configuration::{Configuration, ConfigurationBuilder, Feature};
pub use file_entry::{FileEntry, TemplateId};
pub use project_bundle::{BundleFile, ProjectBundle};
