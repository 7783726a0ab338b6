//! Domain layer: pure values and the text transformation.
//!
//! Nothing in here performs I/O. The application layer feeds it text read
//! through the ports and hands its output back to them.

pub mod context;
pub mod result;
pub mod text;
pub mod transformer;

#[cfg(test)]
pub(crate) mod testing;

pub use context::TransformContext;
pub use result::TransformResult;
pub use text::{DstText, Lines, SrcText, count_lines, lines};
pub use transformer::{HEADER_FORMAT, TextTransformer};
