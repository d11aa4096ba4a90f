use std::collections::HashSet;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Assembled project, ready to be packaged or written to disk.
///
/// This is the output of the assembly step. It contains no business logic,
/// only data: a root folder name and the files below it, in the order they
/// were produced.
///
/// The root is the project name taken verbatim.  It is not checked or
/// sanitized here; file paths below it come from the layout tables and must
/// be relative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBundle {
    root: String,
    files: Vec<BundleFile>,
}

/// One file of a [`ProjectBundle`]. `path` is relative to the bundle root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFile {
    pub path: RelativePath,
    pub contents: Vec<u8>,
}

impl BundleFile {
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl ProjectBundle {
    /// An empty root means files are placed without a prefix.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(
        &mut self,
        path: impl Into<String>,
        contents: impl Into<Vec<u8>>,
    ) -> Result<(), DomainError> {
        self.files.push(BundleFile {
            path: RelativePath::try_new(path)?,
            contents: contents.into(),
        });
        Ok(())
    }

    pub fn with_file(
        mut self,
        path: impl Into<String>,
        contents: impl Into<Vec<u8>>,
    ) -> Result<Self, DomainError> {
        self.add_file(path, contents)?;
        Ok(self)
    }

    /// Reject duplicate paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(&file.path) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn files(&self) -> &[BundleFile] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Look a file up by its root-relative path.
    pub fn get(&self, path: &str) -> Option<&BundleFile> {
        self.files.iter().find(|f| f.path.as_str() == path)
    }

    /// `(root/path, contents)` pairs in production order.
    pub fn rooted_files(&self) -> impl Iterator<Item = (String, &[u8])> {
        self.files.iter().map(|f| {
            let path = if self.root.is_empty() {
                f.path.to_string()
            } else {
                format!("{}/{}", self.root, f.path)
            };
            (path, f.contents.as_slice())
        })
    }

    /// Root-relative paths in production order.
    pub fn paths(&self) -> Vec<String> {
        self.files.iter().map(|f| f.path.to_string()).collect()
    }
}
