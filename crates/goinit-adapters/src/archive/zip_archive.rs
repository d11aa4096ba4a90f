//! Zip packaging of a project bundle.
//!
//! Entries are written in bundle order as `<root>/<path>`, deflate
//! compressed, with a fixed timestamp and mode. Two calls with the same
//! bundle produce byte-identical archives.

use std::io::{Cursor, Write};

use tracing::{debug, instrument};
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

use goinit_core::{
    application::{ApplicationError, ports::ArchiveWriter},
    domain::ProjectBundle,
    error::GoinitResult,
};

/// [`ArchiveWriter`] producing a zip byte stream.
#[derive(Debug, Clone, Copy)]
pub struct ZipArchiveWriter {
    compression: CompressionMethod,
}

impl ZipArchiveWriter {
    pub fn new() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }

    /// Store entries uncompressed.
    pub fn stored() -> Self {
        Self {
            compression: CompressionMethod::Stored,
        }
    }

    fn options(&self) -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(self.compression)
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644)
    }
}

impl Default for ZipArchiveWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveWriter for ZipArchiveWriter {
    #[instrument(skip_all, fields(root = %bundle.root(), files = bundle.file_count()))]
    fn write(&self, bundle: &ProjectBundle) -> GoinitResult<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        for (path, contents) in bundle.rooted_files() {
            zip.start_file(path.as_str(), self.options())
                .map_err(|e| archive_error(format!("create entry {path}: {e}")))?;
            zip.write_all(contents)
                .map_err(|e| archive_error(format!("write entry {path}: {e}")))?;
        }

        let bytes = zip
            .finish()
            .map_err(|e| archive_error(format!("finish archive: {e}")))?
            .into_inner();

        debug!(bytes = bytes.len(), "Archive written");
        Ok(bytes)
    }
}

fn archive_error(reason: String) -> ApplicationError {
    ApplicationError::ArchiveFailed { reason }
}
