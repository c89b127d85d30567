//! Persisting generated sources.

use crate::error::CodegenError;
use std::path::{Path, PathBuf};

/// A generated source file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name, relative to the destination directory.
    pub file_name: String,
    /// Complete file contents.
    pub contents: String,
}

impl GeneratedFile {
    /// Creates a new generated file.
    #[must_use]
    pub fn new(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    /// Writes the file into `destination`, see [`write_file`].
    ///
    /// # Errors
    /// Returns `CodegenError::Write` with the offending path.
    pub fn write_to(&self, destination: &Path) -> Result<PathBuf, CodegenError> {
        write_file(destination, &self.file_name, &self.contents)
    }
}

/// Writes `contents` to `destination/file_name`.
///
/// The destination directory and its parents are created when missing. An
/// existing file is overwritten without merge or backup. Concurrent writers
/// to the same path are not coordinated; the last one wins.
///
/// # Errors
/// Returns `CodegenError::Write` with the directory or file that failed.
pub fn write_file(
    destination: &Path,
    file_name: &str,
    contents: &str,
) -> Result<PathBuf, CodegenError> {
    std::fs::create_dir_all(destination)
        .map_err(|e| CodegenError::write(destination, e))?;

    let path = destination.join(file_name);
    std::fs::write(&path, contents).map_err(|e| CodegenError::write(&path, e))?;

    tracing::info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(path)
}
