//! Unified error handling for textstamp core.
//!
//! The core never catches or translates errors: adapters raise them, and the
//! reader, writer, and orchestrator pass them through unchanged with `?`.

use thiserror::Error;

use crate::application::{ErrorCause, FileSystemError};

/// Root error type for textstamp core operations.
///
/// Every variant carries a user-facing [`message`](Self::message) and a
/// developer-facing [`cause`](Self::cause).
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Errors raised at the file-system boundary.
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    /// Unexpected internal errors (bugs, poisoned locks).
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ApplicationError {
    /// User-facing message.
    pub fn message(&self) -> String {
        match self {
            Self::FileSystem(e) => e.message().to_owned(),
            Self::Internal { message } => message.clone(),
        }
    }

    /// Developer-facing cause, if any.
    pub fn cause(&self) -> Option<&ErrorCause> {
        match self {
            Self::FileSystem(e) => Some(e.cause()),
            Self::Internal { .. } => None,
        }
    }

    /// Fully qualified type name of the concrete error, for structured logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::FileSystem(_) => std::any::type_name::<FileSystemError>(),
            Self::Internal { .. } => std::any::type_name::<Self>(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileSystem(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in textstamp".into(),
                "Please report this issue together with the log output".into(),
            ],
        }
    }

    /// Build an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Convenient result type alias.
pub type AppResult<T> = Result<T, ApplicationError>;
