//! Archive writer adapters.

mod zip_archive;

pub use zip_archive::ZipArchiveWriter;
