//! Wiring of concrete adapters into a ready-to-run orchestrator.

use tracing::debug;

use textstamp_core::{
    application::{
        TextReader, TextWriter, TransformOrchestrator,
        ports::{TextFileSystemReader, TextFileSystemWriter},
    },
    domain::TextTransformer,
};

use crate::filesystem::LocalTextFileSystem;

/// Builds a [`TransformOrchestrator`] and its dependencies.
///
/// This is the one place that picks concrete adapters; callers only see the
/// orchestrator.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransformOrchestratorProvider;

impl TransformOrchestratorProvider {
    pub fn new() -> Self {
        Self
    }

    /// Orchestrator over the local file system.
    pub fn provide(&self) -> TransformOrchestrator {
        debug!("Providing orchestrator over the local filesystem");
        self.with_filesystem(LocalTextFileSystem::new())
    }

    /// Orchestrator over any adapter that can both read and write.
    pub fn with_filesystem<F>(&self, fs: F) -> TransformOrchestrator
    where
        F: TextFileSystemReader + TextFileSystemWriter + Clone + 'static,
    {
        TransformOrchestrator::new(
            TextReader::new(Box::new(fs.clone())),
            TextTransformer::new(),
            TextWriter::new(Box::new(fs)),
        )
    }
}
