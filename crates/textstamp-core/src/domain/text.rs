//! Source and destination text value objects.
//!
//! Both wrappers count lines with the same rule: `\n`, `\r\n`, and `\r` all
//! end a line, and a trailing separator does not start an extra empty line.

use std::fmt;

use crate::trace::Summarize;

/// Iterator over the lines of a string, without their separators.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(['\n', '\r']) {
            Some(idx) => {
                let line = &self.rest[..idx];
                let sep_len = if self.rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[idx + sep_len..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Split `text` into lines using the platform-independent rule.
pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Number of lines in `text`; 0 for the empty string.
pub fn count_lines(text: &str) -> usize {
    lines(text).count()
}

/// Raw text read from the input file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SrcText(String);

impl SrcText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lines of the text.
    pub fn lines(&self) -> Lines<'_> {
        lines(&self.0)
    }

    /// Every line prefixed with its 1-based number: `"N: <line>"`.
    pub fn numbered_lines(&self) -> Vec<String> {
        self.lines()
            .enumerate()
            .map(|(i, line)| format!("{}: {}", i + 1, line))
            .collect()
    }

    /// Number of lines.
    pub fn length(&self) -> usize {
        count_lines(&self.0)
    }
}

impl From<String> for SrcText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for SrcText {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl fmt::Display for SrcText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Summarize for SrcText {
    fn summarize(&self) -> String {
        self.0.summarize()
    }
}

/// Transformed text, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DstText(String);

impl DstText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of lines.
    pub fn length(&self) -> usize {
        count_lines(&self.0)
    }
}

impl From<String> for DstText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for DstText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Summarize for DstText {
    fn summarize(&self) -> String {
        self.0.summarize()
    }
}
