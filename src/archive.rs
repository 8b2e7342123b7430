//! Bundling of uploaded files into a ZIP archive.
//!
//! Each request gets its own temporary archive inside the upload directory.
//! The file is owned by a [`NamedTempFile`] and is removed from disk as soon
//! as it is dropped, whichever way the request ends.

use std::{
    fs,
    io::{Seek, Write},
    path::Path,
};

use anyhow::{Context, Result};
use log::warn;
use tempfile::NamedTempFile;
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

use crate::{error::UploadError, models::UploadedFile};

/// Filename suggested to the client for the downloaded archive.
pub const ARCHIVE_NAME: &str = "archive.zip";

/// Write `files` into a fresh temporary archive under `upload_dir` and return
/// the finished archive bytes.
///
/// Extensions are checked while entries are written, so a disallowed file
/// after valid ones aborts with the partial archive thrown away.
pub fn bundle(upload_dir: &Path, files: &[UploadedFile]) -> Result<Vec<u8>, UploadError> {
    let mut archive = tempfile::Builder::new()
        .prefix("archive-")
        .suffix(".zip")
        .tempfile_in(upload_dir)
        .with_context(|| format!("Failed to create ZIP archive in {:?}", upload_dir))?;

    write_entries(archive.as_file_mut(), files)?;

    read_back(&archive)
}

/// Stream every file into `writer` as a Deflate-compressed entry, in order.
pub fn write_entries<W: Write + Seek>(writer: W, files: &[UploadedFile]) -> Result<W, UploadError> {
    let mut zip = ZipWriter::new(writer);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        if !file.has_allowed_extension() {
            warn!("Rejecting {}: disallowed type", file.file_name);
            return Err(UploadError::DisallowedType(file.file_name.clone()));
        }

        zip.start_file(file.file_name.as_str(), options)
            .with_context(|| format!("Failed to create ZIP entry {}", file.file_name))?;
        zip.write_all(&file.contents)
            .with_context(|| format!("Failed to write {} to ZIP", file.file_name))?;
    }

    let writer = zip.finish().context("Failed to finalize ZIP archive")?;
    Ok(writer)
}

fn read_back(archive: &NamedTempFile) -> Result<Vec<u8>, UploadError> {
    let bytes = fs::read(archive.path())
        .with_context(|| format!("Failed to read archive {:?}", archive.path()))?;
    Ok(bytes)
}
