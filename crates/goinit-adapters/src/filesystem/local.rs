//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use goinit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GoinitError, GoinitResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GoinitResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> GoinitResult<()> {
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> GoinitResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GoinitError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_removes() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let root = dir.path().join("svc");

        fs.create_dir_all(&root.join("cmd/svc")).unwrap();
        fs.write_file(&root.join("cmd/svc/main.go"), b"package main\n")
            .unwrap();

        assert!(fs.exists(&root.join("cmd/svc/main.go")));
        assert_eq!(
            std::fs::read(root.join("cmd/svc/main.go")).unwrap(),
            b"package main\n"
        );

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&dir.path().join("missing/file.txt"), b"x")
            .unwrap_err();

        assert!(matches!(
            err,
            GoinitError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
