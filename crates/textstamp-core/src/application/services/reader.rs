//! Input boundary of the transform pipeline.

use std::path::Path;

use tracing::instrument;

use crate::{
    application::ports::TextFileSystemReader, domain::SrcText, error::AppResult, trace::traced,
};

/// Reads the source file through the injected reader port.
///
/// Errors from the port are returned as-is.
pub struct TextReader {
    fs_reader: Box<dyn TextFileSystemReader>,
}

impl TextReader {
    pub fn new(fs_reader: Box<dyn TextFileSystemReader>) -> Self {
        Self { fs_reader }
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read(&self, path: &Path) -> AppResult<SrcText> {
        traced("TextReader.read", &[&path], || {
            self.fs_reader.read(path).map(SrcText::from)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        FileSystemError, FileSystemErrorKind, ports::MockTextFileSystemReader,
    };
    use crate::error::ApplicationError;

    #[test]
    fn wraps_port_output_in_src_text() {
        let mut port = MockTextFileSystemReader::new();
        port.expect_read()
            .withf(|p| p == Path::new("input.txt"))
            .times(1)
            .returning(|_| Ok("line1\nline2".to_string()));

        let text = TextReader::new(Box::new(port))
            .read(Path::new("input.txt"))
            .unwrap();
        assert_eq!(text, SrcText::new("line1\nline2"));
    }

    #[test]
    fn port_error_propagates_unchanged() {
        let mut port = MockTextFileSystemReader::new();
        port.expect_read().returning(|p| {
            Err(FileSystemError::new(FileSystemErrorKind::NotFound, p, "no such file").into())
        });

        let err = TextReader::new(Box::new(port))
            .read(Path::new("missing.txt"))
            .unwrap_err();
        match err {
            ApplicationError::FileSystem(e) => {
                assert_eq!(e.kind(), FileSystemErrorKind::NotFound);
                assert_eq!(e.path(), Path::new("missing.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
