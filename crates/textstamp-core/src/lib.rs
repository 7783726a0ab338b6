//! textstamp Core - Onion Architecture Implementation
//!
//! This crate provides the domain and application layers of textstamp, a
//! tool that numbers the lines of a text file under a timestamp header.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │ textstamp-cli (CLI)                            │
//! │   config, logging, error boundary              │
//! └───────────────────┬────────────────────────────┘
//!                     │ calls
//!                     ▼
//! ┌────────────────────────────────────────────────┐
//! │ Application Services                           │
//! │   TransformOrchestrator                        │
//! │   TextReader → TextTransformer → TextWriter    │
//! └───────────────────┬────────────────────────────┘
//!                     │ uses
//!                     ▼
//! ┌────────────────────────────────────────────────┐
//! │ Application Ports (Traits)                     │
//! │   TextFileSystemReader / TextFileSystemWriter  │
//! └───────────────────┬────────────────────────────┘
//!                     │ implemented by
//!                     ▼
//! ┌────────────────────────────────────────────────┐
//! │ textstamp-adapters (Infrastructure)            │
//! │   LocalTextFileSystem, MemoryTextFileSystem    │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use textstamp_core::prelude::*;
//!
//! let orchestrator = TransformOrchestrator::new(
//!     TextReader::new(fs_reader),
//!     TextTransformer::new(),
//!     TextWriter::new(fs_writer),
//! );
//! let context = TransformContext::new("notes.txt", "tmp", chrono::Local::now().naive_local());
//! let result = orchestrator.orchestrate(&context)?;
//! println!("{result}");
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod trace;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FileSystemError, FileSystemErrorKind, TextReader, TextWriter, TransformOrchestrator,
        ports::{TextFileSystemReader, TextFileSystemWriter},
    };
    pub use crate::domain::{DstText, SrcText, TextTransformer, TransformContext, TransformResult};
    pub use crate::error::{AppResult, ApplicationError};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
