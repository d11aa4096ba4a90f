//! Template store adapters.

mod embedded;
mod filesystem;
mod memory;

pub use embedded::EmbeddedTemplateStore;
pub use filesystem::{FilesystemTemplateStore, TEMPLATES_DIR_ENV};
pub use memory::InMemoryTemplateStore;
