//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `textstamp-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TextFileSystemReader`: read a text file
//!   - `TextFileSystemWriter`: write a text file
//!
//! - **Driving (Input) Ports**: the CLI calls `TransformOrchestrator` directly

pub mod output;

pub use output::{TextFileSystemReader, TextFileSystemWriter};

#[cfg(test)]
pub use output::{MockTextFileSystemReader, MockTextFileSystemWriter};
