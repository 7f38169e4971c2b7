//! Input path resolution
//!
//! The converter accepts either a single export file or a directory of them.
//! Directory entries are processed in file-name order so repeated runs over
//! the same directory produce identical tables.

use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while resolving input paths
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input path does not exist
    #[error("Input does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// The input path is neither a regular file nor a directory
    #[error("Input is not a file or directory: {}", .0.display())]
    Unsupported(PathBuf),

    /// I/O error while listing a directory
    #[error("Failed to list {}: {source}", .path.display())]
    IoError {
        /// Directory being listed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Resolved input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSet {
    /// A single export file; a parse failure aborts the run
    File(PathBuf),
    /// Every regular file of a directory; a parse failure skips the file
    Directory {
        /// The directory
        root: PathBuf,
        /// Files in name order
        files: Vec<PathBuf>,
    },
}

impl InputSet {
    /// Files to process, in order
    pub fn files(&self) -> &[PathBuf] {
        match self {
            InputSet::File(path) => std::slice::from_ref(path),
            InputSet::Directory { files, .. } => files,
        }
    }

    /// Whether a file that fails to parse is skipped rather than fatal
    pub fn skips_failed_files(&self) -> bool {
        matches!(self, InputSet::Directory { .. })
    }
}

/// Resolve an input path into the ordered list of files to convert
pub fn resolve_inputs(path: &Path) -> Result<InputSet, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }
    if path.is_file() {
        return Ok(InputSet::File(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(InputError::Unsupported(path.to_path_buf()));
    }

    let io_error = |source| InputError::IoError {
        path: path.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let entry_path = entry.path();
        if entry_path.is_file() {
            files.push(entry_path);
        }
    }
    files.sort();

    Ok(InputSet::Directory {
        root: path.to_path_buf(),
        files,
    })
}

/// Base name of a file, used in the `FILENAME` column
pub fn file_base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
