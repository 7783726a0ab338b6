//! Per-invocation parameters of a transform run.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::trace::Summarize;

/// Immutable parameters of one `orchestrate` call.
///
/// Built once by the caller before orchestration starts and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformContext {
    target_file: PathBuf,
    tmp_dir: PathBuf,
    current_datetime: NaiveDateTime,
}

impl TransformContext {
    pub fn new(
        target_file: impl Into<PathBuf>,
        tmp_dir: impl Into<PathBuf>,
        current_datetime: NaiveDateTime,
    ) -> Self {
        Self {
            target_file: target_file.into(),
            tmp_dir: tmp_dir.into(),
            current_datetime,
        }
    }

    /// Source file to transform.
    pub fn target_file(&self) -> &Path {
        &self.target_file
    }

    /// Directory the output file is written into.
    pub fn tmp_dir(&self) -> &Path {
        &self.tmp_dir
    }

    /// Timestamp written as the header line.
    pub fn current_datetime(&self) -> NaiveDateTime {
        self.current_datetime
    }

    /// `tmp_dir / <file name of target_file>`.
    ///
    /// Only the file name is kept; directories of the source path are not
    /// recreated under `tmp_dir`.
    pub fn output_path(&self) -> PathBuf {
        let name = self.target_file.file_name().unwrap_or(OsStr::new(""));
        self.tmp_dir.join(name)
    }
}

impl Summarize for TransformContext {
    fn summarize(&self) -> String {
        format!(
            "TransformContext(target_file={}, tmp_dir={}, current_datetime={})",
            self.target_file.summarize(),
            self.tmp_dir.summarize(),
            self.current_datetime,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testing::at;

    #[test]
    fn accessors_return_constructor_values() {
        let ts = at(2024, 12, 26, 15, 30, 45);
        let ctx = TransformContext::new("in/input.txt", "out", ts);
        assert_eq!(ctx.target_file(), Path::new("in/input.txt"));
        assert_eq!(ctx.tmp_dir(), Path::new("out"));
        assert_eq!(ctx.current_datetime(), ts);
    }

    #[test]
    fn output_path_keeps_only_the_file_name() {
        let ctx = TransformContext::new("/a/b/c/notes.md", "/tmp/out", at(2024, 1, 1, 0, 0, 0));
        assert_eq!(ctx.output_path(), PathBuf::from("/tmp/out/notes.md"));
    }

    #[test]
    fn summary_mentions_all_fields() {
        let ctx = TransformContext::new("x.txt", "tmp", at(2024, 6, 1, 8, 15, 0));
        let summary = ctx.summarize();
        assert!(summary.contains("x.txt"));
        assert!(summary.contains("tmp"));
        assert!(summary.contains("2024-06-01 08:15:00"));
    }
}
