//! Output boundary of the transform pipeline.

use std::path::Path;

use tracing::instrument;

use crate::{
    application::ports::TextFileSystemWriter, domain::DstText, error::AppResult, trace::traced,
};

/// Writes transformed text through the injected writer port.
///
/// Errors from the port are returned as-is.
pub struct TextWriter {
    fs_writer: Box<dyn TextFileSystemWriter>,
}

impl TextWriter {
    pub fn new(fs_writer: Box<dyn TextFileSystemWriter>) -> Self {
        Self { fs_writer }
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write(&self, text: &DstText, path: &Path) -> AppResult<()> {
        traced("TextWriter.write", &[text, &path], || {
            self.fs_writer.write(text.as_str(), path)
        })
    }
}
