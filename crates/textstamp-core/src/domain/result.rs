use std::fmt;

use serde::Serialize;

use crate::trace::Summarize;

/// Outcome of a successful transform run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransformResult {
    /// Line count of the input text.
    pub src_length: usize,
    /// Line count of the output text (header included).
    pub dst_length: usize,
}

impl TransformResult {
    pub fn new(src_length: usize, dst_length: usize) -> Self {
        Self {
            src_length,
            dst_length,
        }
    }
}

impl fmt::Display for TransformResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TransformResult(src_length={}, dst_length={})",
            self.src_length, self.dst_length
        )
    }
}

impl Summarize for TransformResult {
    fn summarize(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_both_lengths() {
        assert_eq!(
            TransformResult::new(3, 4).to_string(),
            "TransformResult(src_length=3, dst_length=4)"
        );
    }

    #[test]
    fn serializes_as_flat_object() {
        let json = serde_json::to_string(&TransformResult::new(0, 1)).unwrap();
        assert_eq!(json, r#"{"src_length":0,"dst_length":1}"#);
    }
}
