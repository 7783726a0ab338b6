//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the file system.
//! The `textstamp-adapters` crate provides implementations.

use std::path::Path;

use crate::error::AppResult;

/// Port for reading a whole text file.
///
/// Implemented by:
/// - `textstamp_adapters::filesystem::LocalTextFileSystem` (production)
/// - `textstamp_adapters::filesystem::MemoryTextFileSystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait TextFileSystemReader: Send + Sync {
    /// Read the file at `path` as UTF-8 text, including line separators.
    fn read(&self, path: &Path) -> AppResult<String>;
}

/// Port for writing a whole text file.
///
/// Implementations create missing parent directories before writing.
#[cfg_attr(test, mockall::automock)]
pub trait TextFileSystemWriter: Send + Sync {
    /// Write `text` to `path` as UTF-8, replacing any existing file.
    fn write(&self, text: &str, path: &Path) -> AppResult<()>;
}
