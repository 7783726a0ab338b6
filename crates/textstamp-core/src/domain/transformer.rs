//! The only piece of business logic: number the lines and stamp a header.

use chrono::NaiveDateTime;

use crate::domain::text::{DstText, SrcText};
use crate::trace::traced_pure;

/// `strftime` pattern of the header line. No sub-second part, no zone.
pub const HEADER_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prepends a timestamp header and numbers every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTransformer;

impl TextTransformer {
    pub fn new() -> Self {
        Self
    }

    /// Produce `"<timestamp>\n1: <line 1>\n2: <line 2>..."`.
    ///
    /// Empty input yields the header alone, with no trailing newline.
    pub fn transform(&self, text: &SrcText, current_datetime: NaiveDateTime) -> DstText {
        traced_pure(
            "TextTransformer.transform",
            &[text, &current_datetime],
            || {
                let header = current_datetime.format(HEADER_FORMAT).to_string();
                let output: Vec<String> = std::iter::once(header)
                    .chain(text.numbered_lines())
                    .collect();
                DstText::new(output.join("\n"))
            },
        )
    }
}
