//! In-memory template store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use goinit_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateId,
    error::GoinitResult,
};

/// Thread-safe in-memory template store.
///
/// Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateStore {
    inner: Arc<RwLock<HashMap<TemplateId, Vec<u8>>>>,
}

impl InMemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_template(self, id: impl Into<TemplateId>, source: impl Into<Vec<u8>>) -> GoinitResult<Self> {
        self.insert(id, source)?;
        Ok(self)
    }

    /// Insert or replace a template.
    pub fn insert(&self, id: impl Into<TemplateId>, source: impl Into<Vec<u8>>) -> GoinitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(id.into(), source.into());
        Ok(())
    }

    /// Remove a template; returns whether it was present.
    pub fn remove(&self, id: &TemplateId) -> GoinitResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.remove(id).is_some())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn fetch(&self, id: &TemplateId) -> GoinitResult<Option<Vec<u8>>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.get(id).cloned())
    }
}
