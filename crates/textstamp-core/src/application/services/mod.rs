//! Application services - orchestrate the transform use case.
//!
//! The reader and writer fix the pipeline's I/O boundary on top of the
//! driven ports; the orchestrator sequences them around the domain
//! transformer.

pub mod orchestrator;
pub mod reader;
pub mod writer;

pub use orchestrator::TransformOrchestrator;
pub use reader::TextReader;
pub use writer::TextWriter;
