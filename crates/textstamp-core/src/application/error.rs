//! File-system errors raised behind the driven ports.
//!
//! Every adapter that implements [`TextFileSystemReader`] or
//! [`TextFileSystemWriter`] reports failures as a [`FileSystemError`]: a
//! user-facing message plus a developer-facing [`ErrorCause`].
//!
//! [`TextFileSystemReader`]: crate::application::ports::TextFileSystemReader
//! [`TextFileSystemWriter`]: crate::application::ports::TextFileSystemWriter

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use std::sync::Arc;

use thiserror::Error;

/// What went wrong at the file-system boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileSystemErrorKind {
    /// The file to read does not exist.
    NotFound,
    /// Reading, writing, or creating a directory was refused.
    PermissionDenied,
    /// The file is not valid UTF-8.
    Decoding,
    /// The path points at an existing directory.
    IsADirectory,
    /// The parent directory of an output file could not be created.
    DirectoryCreation,
    /// Any other read failure.
    Read,
    /// Any other write failure.
    Write,
}

impl FileSystemErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not-found",
            Self::PermissionDenied => "permission-denied",
            Self::Decoding => "decoding",
            Self::IsADirectory => "is-a-directory",
            Self::DirectoryCreation => "directory-creation",
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

impl fmt::Display for FileSystemErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Developer-facing cause of an error: the underlying system error, or a
/// descriptive string when there is none.
#[derive(Debug, Clone, Error)]
pub enum ErrorCause {
    #[error(transparent)]
    Io(Arc<io::Error>),

    #[error(transparent)]
    Utf8(FromUtf8Error),

    #[error("{0}")]
    Detail(String),
}

impl ErrorCause {
    /// Fully qualified Rust type name of the cause, for structured logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Io(_) => std::any::type_name::<io::Error>(),
            Self::Utf8(_) => std::any::type_name::<FromUtf8Error>(),
            Self::Detail(_) => std::any::type_name::<String>(),
        }
    }
}

impl From<io::Error> for ErrorCause {
    fn from(err: io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<FromUtf8Error> for ErrorCause {
    fn from(err: FromUtf8Error) -> Self {
        Self::Utf8(err)
    }
}

impl From<&str> for ErrorCause {
    fn from(detail: &str) -> Self {
        Self::Detail(detail.to_owned())
    }
}

impl From<String> for ErrorCause {
    fn from(detail: String) -> Self {
        Self::Detail(detail)
    }
}

/// Error reported by file-system adapters.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct FileSystemError {
    kind: FileSystemErrorKind,
    path: PathBuf,
    message: String,
    #[source]
    cause: ErrorCause,
}

impl FileSystemError {
    /// Build an error whose message is derived from `kind` and `path`.
    pub fn new(
        kind: FileSystemErrorKind,
        path: impl Into<PathBuf>,
        cause: impl Into<ErrorCause>,
    ) -> Self {
        let path = path.into();
        let message = default_message(kind, &path);
        Self {
            kind,
            path,
            message,
            cause: cause.into(),
        }
    }

    /// Replace the user-facing message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> FileSystemErrorKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// User-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Developer-facing cause.
    pub fn cause(&self) -> &ErrorCause {
        &self.cause
    }

    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self.kind {
            FileSystemErrorKind::NotFound => vec![
                format!("Check that '{}' exists", self.path.display()),
                "Relative paths are resolved from the current directory".into(),
            ],
            FileSystemErrorKind::PermissionDenied => vec![
                format!("Check the permissions of '{}'", self.path.display()),
            ],
            FileSystemErrorKind::Decoding => vec![
                "Only UTF-8 encoded text files are supported".into(),
                "Convert the file to UTF-8 and try again".into(),
            ],
            FileSystemErrorKind::IsADirectory => vec![
                format!("'{}' is a directory", self.path.display()),
                "Remove the directory or choose another output directory with --tmp-dir".into(),
            ],
            FileSystemErrorKind::DirectoryCreation => vec![
                format!("Could not create '{}'", self.path.display()),
                "Check available disk space and parent directory permissions".into(),
            ],
            FileSystemErrorKind::Read | FileSystemErrorKind::Write => {
                vec!["Check the error details above".into()]
            }
        }
    }
}

fn default_message(kind: FileSystemErrorKind, path: &Path) -> String {
    let path = path.display();
    match kind {
        FileSystemErrorKind::NotFound => format!("File not found: {path}"),
        FileSystemErrorKind::PermissionDenied => format!("Permission denied: {path}"),
        FileSystemErrorKind::Decoding => format!("File is not valid UTF-8: {path}"),
        FileSystemErrorKind::IsADirectory => format!("Path is a directory: {path}"),
        FileSystemErrorKind::DirectoryCreation => {
            format!("Failed to create directory: {path}")
        }
        FileSystemErrorKind::Read => format!("Failed to read file: {path}"),
        FileSystemErrorKind::Write => format!("Failed to write file: {path}"),
    }
}
