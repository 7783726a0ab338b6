//! Infrastructure adapters for textstamp.
//!
//! This crate implements the ports defined in `textstamp-core::application::ports`.
//! It contains all I/O operations.

pub mod filesystem;
pub mod provider;

// Re-export commonly used adapters
pub use filesystem::{LocalTextFileSystem, MemoryTextFileSystem};
pub use provider::TransformOrchestratorProvider;
