//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use textstamp_core::{
    application::{
        FileSystemError, FileSystemErrorKind,
        ports::{TextFileSystemReader, TextFileSystemWriter},
    },
    error::{AppResult, ApplicationError},
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can hand one clone to the
/// orchestrator and inspect the other afterwards.
#[derive(Debug, Clone)]
pub struct MemoryTextFileSystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryTextFileSystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file (and its parent directories).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.add_dir_all(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Seed a directory (and its parents).
    pub fn with_directory(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_dir_all(path.as_ref());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check if a directory exists.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryTextFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFileSystemReader for MemoryTextFileSystem {
    fn read(&self, path: &Path) -> AppResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::internal("memory filesystem lock poisoned"))?;

        if let Some(content) = inner.files.get(path) {
            return Ok(content.clone());
        }
        let kind = if inner.directories.contains(path) {
            FileSystemErrorKind::IsADirectory
        } else {
            FileSystemErrorKind::NotFound
        };
        Err(FileSystemError::new(kind, path, "no such file in memory filesystem").into())
    }
}

impl TextFileSystemWriter for MemoryTextFileSystem {
    fn write(&self, text: &str, path: &Path) -> AppResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::internal("memory filesystem lock poisoned"))?;

        if inner.directories.contains(path) {
            return Err(FileSystemError::new(
                FileSystemErrorKind::IsADirectory,
                path,
                "a directory exists at this path",
            )
            .into());
        }

        if let Some(parent) = path.parent() {
            if let Some(blocker) = parent.ancestors().find(|p| inner.files.contains_key(*p)) {
                return Err(FileSystemError::new(
                    FileSystemErrorKind::DirectoryCreation,
                    parent,
                    format!("'{}' is a file", blocker.display()),
                )
                .into());
            }
            inner.add_dir_all(parent);
        }

        inner.files.insert(path.to_path_buf(), text.to_string());
        Ok(())
    }
}
