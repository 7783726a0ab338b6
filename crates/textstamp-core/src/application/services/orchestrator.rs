//! Transform Orchestrator - main application use case.
//!
//! This service coordinates the whole transform workflow:
//! 1. Read the target file
//! 2. Number its lines under a timestamp header
//! 3. Write the result into the output directory
//! 4. Report line counts
//!
//! No step is retried and nothing is rolled back: the first error ends the
//! run and is returned to the caller as-is.

use tracing::{info, instrument};

use crate::{
    application::services::{TextReader, TextWriter},
    domain::{TextTransformer, TransformContext, TransformResult},
    error::AppResult,
    trace::traced,
};

/// Sequences read → transform → write for one context.
pub struct TransformOrchestrator {
    reader: TextReader,
    transformer: TextTransformer,
    writer: TextWriter,
}

impl TransformOrchestrator {
    /// Create an orchestrator from its three steps.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use textstamp_core::application::{TextReader, TextWriter, TransformOrchestrator};
    /// use textstamp_core::domain::TextTransformer;
    ///
    /// let orchestrator = TransformOrchestrator::new(
    ///     TextReader::new(fs_reader),  // Box<dyn TextFileSystemReader>
    ///     TextTransformer::new(),
    ///     TextWriter::new(fs_writer),  // Box<dyn TextFileSystemWriter>
    /// );
    /// ```
    pub fn new(reader: TextReader, transformer: TextTransformer, writer: TextWriter) -> Self {
        Self {
            reader,
            transformer,
            writer,
        }
    }

    /// Number the lines of `context.target_file()` and write the result to
    /// `context.output_path()`.
    #[instrument(
        skip_all,
        fields(
            target_file = %context.target_file().display(),
            tmp_dir = %context.tmp_dir().display()
        )
    )]
    pub fn orchestrate(&self, context: &TransformContext) -> AppResult<TransformResult> {
        traced("TransformOrchestrator.orchestrate", &[context], || {
            // 1. Read
            let text = self.reader.read(context.target_file())?;

            // 2. Transform
            let output = self
                .transformer
                .transform(&text, context.current_datetime());

            // 3. Write
            let output_path = context.output_path();
            self.writer.write(&output, &output_path)?;

            // 4. Report
            let result = TransformResult::new(text.length(), output.length());
            info!(
                src_length = result.src_length,
                dst_length = result.dst_length,
                output = %output_path.display(),
                "Transform completed"
            );
            Ok(result)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};


    use super::*;
    use crate::application::{
        FileSystemError, FileSystemErrorKind,
        ports::{MockTextFileSystemReader, MockTextFileSystemWriter},
    };
    use crate::domain::testing::at;
    use crate::error::ApplicationError;

    fn reader_returning(content: &'static str) -> MockTextFileSystemReader {
        let mut reader = MockTextFileSystemReader::new();
        reader
            .expect_read()
            .times(1)
            .returning(move |_| Ok(content.to_string()));
        reader
    }

    /// Writer mock that records every (text, path) it receives.
    fn recording_writer() -> (MockTextFileSystemWriter, Arc<Mutex<Vec<(String, PathBuf)>>>) {
        let written = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&written);
        let mut writer = MockTextFileSystemWriter::new();
        writer.expect_write().returning(move |text, path| {
            sink.lock().unwrap().push((text.to_string(), path.to_path_buf()));
            Ok(())
        });
        (writer, written)
    }

    fn orchestrator(
        reader: MockTextFileSystemReader,
        writer: MockTextFileSystemWriter,
    ) -> TransformOrchestrator {
        TransformOrchestrator::new(
            TextReader::new(Box::new(reader)),
            TextTransformer::new(),
            TextWriter::new(Box::new(writer)),
        )
    }

    #[test]
    fn writes_numbered_text_into_tmp_dir() {
        let mut reader = MockTextFileSystemReader::new();
        reader
            .expect_read()
            .withf(|p| p == Path::new("/data/input.txt"))
            .times(1)
            .returning(|_| Ok("a\nb\nc".to_string()));
        let (writer, written) = recording_writer();

        let context =
            TransformContext::new("/data/input.txt", "/out", at(2024, 12, 26, 15, 30, 45));
        let result = orchestrator(reader, writer).orchestrate(&context).unwrap();

        assert_eq!(result, TransformResult::new(3, 4));
        let written = written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, "2024-12-26 15:30:45\n1: a\n2: b\n3: c");
        assert_eq!(written[0].1, PathBuf::from("/out/input.txt"));
    }

    #[test]
    fn empty_input_reports_zero_and_one() {
        let (writer, written) = recording_writer();
        let context = TransformContext::new("empty.txt", "out", at(2025, 1, 15, 10, 20, 30));

        let result = orchestrator(reader_returning(""), writer)
            .orchestrate(&context)
            .unwrap();

        assert_eq!(result.src_length, 0);
        assert_eq!(result.dst_length, 1);
        assert_eq!(written.lock().unwrap()[0].0, "2025-01-15 10:20:30");
    }

    #[test]
    fn nested_source_path_is_flattened() {
        let (writer, written) = recording_writer();
        let context = TransformContext::new("docs/deep/nested/x.md", "tmp", at(2024, 1, 1, 0, 0, 0));

        orchestrator(reader_returning("x"), writer)
            .orchestrate(&context)
            .unwrap();

        assert_eq!(written.lock().unwrap()[0].1, PathBuf::from("tmp/x.md"));
    }

    #[test]
    fn read_failure_skips_write() {
        let mut reader = MockTextFileSystemReader::new();
        reader.expect_read().returning(|p| {
            Err(FileSystemError::new(FileSystemErrorKind::NotFound, p, "no such file").into())
        });
        let mut writer = MockTextFileSystemWriter::new();
        writer.expect_write().never();

        let context = TransformContext::new("missing.txt", "out", at(2024, 1, 1, 0, 0, 0));
        let err = orchestrator(reader, writer).orchestrate(&context).unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::FileSystem(ref e) if e.kind() == FileSystemErrorKind::NotFound
        ));
    }

    #[test]
    fn write_failure_propagates() {
        let mut writer = MockTextFileSystemWriter::new();
        writer.expect_write().times(1).returning(|_, p| {
            Err(FileSystemError::new(FileSystemErrorKind::PermissionDenied, p, "read-only").into())
        });

        let context = TransformContext::new("in.txt", "/ro", at(2024, 1, 1, 0, 0, 0));
        let err = orchestrator(reader_returning("line"), writer)
            .orchestrate(&context)
            .unwrap_err();

        assert_eq!(err.message(), "Permission denied: /ro/in.txt");
    }
}
