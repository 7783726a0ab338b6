//! Application layer for textstamp.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (TransformOrchestrator, TextReader, TextWriter)
//! - **Ports**: Interface definitions (traits) for the file system
//! - **Errors**: Errors raised behind the ports
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. The transformation rule lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{TextReader, TextWriter, TransformOrchestrator};

// Re-export port traits (for adapter implementation)
pub use ports::{TextFileSystemReader, TextFileSystemWriter};

pub use error::{ErrorCause, FileSystemError, FileSystemErrorKind};
