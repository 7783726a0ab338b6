//! Call/return tracing for pipeline steps.
//!
//! [`traced`] and [`traced_pure`] wrap a call and emit two INFO events:
//! `Qualifier(args)` before and `Qualifier returned: value` after. Errors are
//! returned untouched and are not logged here; the CLI boundary reports them.
//!
//! Large values are summarized through [`Summarize`] so a long input file
//! does not flood the log.

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

/// Strings with at least this many characters are truncated.
pub const STR_TRUNCATE_LENGTH: usize = 100;

/// Sequences with at least this many items are truncated.
pub const SEQ_TRUNCATE_THRESHOLD: usize = 10;

/// Compact, log-friendly rendering of a value.
pub trait Summarize {
    fn summarize(&self) -> String;
}

impl Summarize for str {
    fn summarize(&self) -> String {
        let count = self.chars().count();
        if count >= STR_TRUNCATE_LENGTH {
            let head: String = self.chars().take(STR_TRUNCATE_LENGTH).collect();
            format!("\"{head}... ({count} chars)\"")
        } else {
            format!("{self:?}")
        }
    }
}

impl Summarize for String {
    fn summarize(&self) -> String {
        self.as_str().summarize()
    }
}

impl<T: Debug> Summarize for [T] {
    fn summarize(&self) -> String {
        match self.first() {
            Some(first) if self.len() >= SEQ_TRUNCATE_THRESHOLD => {
                format!("[{first:?}, ... ({} items)]", self.len())
            }
            _ => format!("{self:?}"),
        }
    }
}

impl<T: Debug> Summarize for Vec<T> {
    fn summarize(&self) -> String {
        self.as_slice().summarize()
    }
}

impl Summarize for Path {
    fn summarize(&self) -> String {
        format!("{:?}", self.display().to_string())
    }
}

impl Summarize for PathBuf {
    fn summarize(&self) -> String {
        self.as_path().summarize()
    }
}

impl Summarize for NaiveDateTime {
    fn summarize(&self) -> String {
        self.to_string()
    }
}

impl Summarize for () {
    fn summarize(&self) -> String {
        "()".into()
    }
}

impl<T: Summarize + ?Sized> Summarize for &T {
    fn summarize(&self) -> String {
        (**self).summarize()
    }
}

/// Render an argument list as `a, b, c`.
pub fn format_args_list(args: &[&dyn Summarize]) -> String {
    args.iter()
        .map(|arg| arg.summarize())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Trace a fallible call. An `Err` propagates without a return event.
pub fn traced<T, E>(
    qualifier: &str,
    args: &[&dyn Summarize],
    call: impl FnOnce() -> Result<T, E>,
) -> Result<T, E>
where
    T: Summarize,
{
    info!("{qualifier}({})", format_args_list(args));
    let value = call()?;
    info!("{qualifier} returned: {}", value.summarize());
    Ok(value)
}

/// Trace an infallible call.
pub fn traced_pure<T: Summarize>(
    qualifier: &str,
    args: &[&dyn Summarize],
    call: impl FnOnce() -> T,
) -> T {
    info!("{qualifier}({})", format_args_list(args));
    let value = call();
    info!("{qualifier} returned: {}", value.summarize());
    value
}
