//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;

use textstamp_core::{
    application::{
        FileSystemError, FileSystemErrorKind,
        ports::{TextFileSystemReader, TextFileSystemWriter},
    },
    error::AppResult,
};

/// Production filesystem implementation using `std::fs`.
///
/// Every call opens and closes its own file handle.
#[derive(Debug, Clone, Copy)]
pub struct LocalTextFileSystem;

impl LocalTextFileSystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent_directory(path: &Path) -> AppResult<()> {
        let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };
        std::fs::create_dir_all(parent).map_err(|e| {
            let kind = match e.kind() {
                io::ErrorKind::PermissionDenied => FileSystemErrorKind::PermissionDenied,
                _ => FileSystemErrorKind::DirectoryCreation,
            };
            FileSystemError::new(kind, parent, e).into()
        })
    }
}

impl Default for LocalTextFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFileSystemReader for LocalTextFileSystem {
    fn read(&self, path: &Path) -> AppResult<String> {
        let bytes = std::fs::read(path).map_err(|e| map_read_error(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "Read file");
        String::from_utf8(bytes)
            .map_err(|e| FileSystemError::new(FileSystemErrorKind::Decoding, path, e).into())
    }
}

impl TextFileSystemWriter for LocalTextFileSystem {
    fn write(&self, text: &str, path: &Path) -> AppResult<()> {
        Self::ensure_parent_directory(path)?;
        std::fs::write(path, text).map_err(|e| map_write_error(path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "Wrote file");
        Ok(())
    }
}

fn map_read_error(path: &Path, e: io::Error) -> textstamp_core::error::ApplicationError {
    let kind = match e.kind() {
        io::ErrorKind::NotFound => FileSystemErrorKind::NotFound,
        io::ErrorKind::PermissionDenied => FileSystemErrorKind::PermissionDenied,
        io::ErrorKind::IsADirectory => FileSystemErrorKind::IsADirectory,
        io::ErrorKind::InvalidData => FileSystemErrorKind::Decoding,
        _ => FileSystemErrorKind::Read,
    };
    FileSystemError::new(kind, path, e).into()
}

fn map_write_error(path: &Path, e: io::Error) -> textstamp_core::error::ApplicationError {
    // Some platforms report a directory target as a generic error.
    let kind = match e.kind() {
        io::ErrorKind::PermissionDenied if path.is_dir() => FileSystemErrorKind::IsADirectory,
        io::ErrorKind::PermissionDenied => FileSystemErrorKind::PermissionDenied,
        io::ErrorKind::IsADirectory => FileSystemErrorKind::IsADirectory,
        _ if path.is_dir() => FileSystemErrorKind::IsADirectory,
        _ => FileSystemErrorKind::Write,
    };
    FileSystemError::new(kind, path, e).into()
}
