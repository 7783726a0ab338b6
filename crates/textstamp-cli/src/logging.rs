//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `textstamp-core`
//! and `textstamp-adapters` only *emit* spans and events.
//!
//! # Level mapping
//!
//! | Setting              | Console filter |
//! |----------------------|----------------|
//! | `CRITICAL`, `ERROR`  | ERROR          |
//! | `WARNING`            | WARN           |
//! | `INFO` (default)     | INFO           |
//! | `DEBUG`              | DEBUG          |
//! | `--quiet`            | ERROR          |
//!
//! `RUST_LOG` overrides the console filter if set.  The optional log file
//! always records DEBUG and above.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::NaiveDateTime;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogLevel;

/// Crates whose events are shown.
const CRATES: [&str; 3] = ["textstamp", "textstamp_core", "textstamp_adapters"];

/// Timestamp part of log file names.
const LOG_FILE_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

/// Inputs for [`init_logging`].
#[derive(Debug, Clone)]
pub struct LogSettings {
    pub level: LogLevel,
    pub quiet: bool,
    pub no_color: bool,
    /// Log file to append to, if file logging is enabled.
    pub file: Option<PathBuf>,
}

/// Keeps the background log-file writer alive; flushes on drop.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(settings: &LogSettings) -> anyhow::Result<LoggingGuard> {
    let level = derive_level(settings.quiet, settings.level);

    // RUST_LOG wins; otherwise every textstamp crate gets the same level.
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level)));

    let use_ansi = !settings.no_color && std::io::stderr().is_terminal();

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let (file_layer, file_guard) = match &settings.file {
        Some(path) => {
            let (dir, name) = split_log_path(path)?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer)
                .with_filter(EnvFilter::new(directives("debug")));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(LoggingGuard { _file: file_guard })
}

/// Translate the configured level and quiet flag to a filter level.
fn derive_level(quiet: bool, level: LogLevel) -> &'static str {
    if quiet {
        return "error";
    }
    level.as_directive()
}

fn directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// `<dir>/<command>_<YYYYmmdd_HHMMSS>.log`
pub fn log_file_path(dir: &Path, command: &str, started_at: NaiveDateTime) -> PathBuf {
    dir.join(format!(
        "{command}_{}.log",
        started_at.format(LOG_FILE_TIMESTAMP)
    ))
}

fn split_log_path(path: &Path) -> anyhow::Result<(&Path, &std::ffi::OsStr)> {
    let name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((dir, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn level_quiet() {
        assert_eq!(derive_level(true, LogLevel::Debug), "error");
    }

    #[test]
    fn level_default() {
        assert_eq!(derive_level(false, LogLevel::default()), "info");
    }

    #[test]
    fn level_critical_maps_to_error() {
        assert_eq!(derive_level(false, LogLevel::Critical), "error");
    }

    #[test]
    fn level_warning_maps_to_warn() {
        assert_eq!(derive_level(false, LogLevel::Warning), "warn");
    }

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            directives("debug"),
            "textstamp=debug,textstamp_core=debug,textstamp_adapters=debug"
        );
    }

    #[test]
    fn log_file_named_after_command_and_start_time() {
        let started = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 1)
            .unwrap();
        assert_eq!(
            log_file_path(Path::new("/var/log/ts"), "transform", started),
            PathBuf::from("/var/log/ts/transform_20240309_070501.log")
        );
    }

    #[test]
    fn split_bare_file_name_uses_current_dir() {
        let (dir, name) = split_log_path(Path::new("run.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "run.log");
    }
}
