//! Filesystem adapters.

mod local;
mod memory;

pub use local::LocalTextFileSystem;
pub use memory::MemoryTextFileSystem;
