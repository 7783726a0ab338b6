//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--log-level` here, `--tmp-dir` at the call-site)
//! 2. Environment variables prefixed with `TEXTSTAMP_`
//! 3. Config file given with `--config`
//! 4. Built-in defaults

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "TEXTSTAMP";

/// Output directory name used when nothing else is configured.
const DEFAULT_TMP_DIR_NAME: &str = "tmp";

/// Keys accepted by `textstamp config get`.
pub const KEYS: [&str; 3] = ["tmp_dir", "log_level", "log_dir"];

// ── LogLevel ──────────────────────────────────────────────────────────────────

/// Console log level, as named on the command line and in the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Critical,
    Error,
    Warning,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    ///
    /// `tracing` has no level above ERROR, so CRITICAL maps onto it.
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Critical | Self::Error => "error",
            Self::Warning => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CRITICAL" => Ok(Self::Critical),
            "ERROR" => Ok(Self::Error),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "INFO" => Ok(Self::Info),
            "DEBUG" => Ok(Self::Debug),
            _ => Err(CliError::ConfigError {
                message: format!(
                    "Invalid log level '{s}' (expected CRITICAL, ERROR, WARNING, INFO or DEBUG)"
                ),
                source: None,
            }),
        }
    }
}

// ── AppConfig ─────────────────────────────────────────────────────────────────

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    /// Directory the transformed file is written into.
    pub tmp_dir: PathBuf,
    /// Console log level.
    pub log_level: LogLevel,
    /// Directory for log files; file logging is off when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

/// Layered sources before defaults are applied.
///
/// Unknown keys are rejected; only the config file can carry them, since
/// the environment is filtered down to [`KEYS`] first.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    tmp_dir: Option<PathBuf>,
    log_level: Option<String>,
    log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from the process environment and an optional file.
    pub fn load(config_file: Option<&Path>, log_level: Option<LogLevel>) -> CliResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
            message: "Failed to determine the current directory".into(),
            source: e,
        })?;
        Self::from_sources(config_file, None, &cwd, log_level)
    }

    /// Load configuration with explicit inputs.
    ///
    /// `env` replaces the process environment when given; `base_dir` anchors
    /// the default `tmp_dir`.
    pub fn from_sources(
        config_file: Option<&Path>,
        env: Option<config::Map<String, String>>,
        base_dir: &Path,
        log_level: Option<LogLevel>,
    ) -> CliResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .ignore_empty(true)
                .source(Some(known_env_vars(env))),
        );

        let raw: RawConfig = builder
            .build()
            .and_then(|c| c.try_deserialize::<RawConfig>())
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to load configuration: {e}"),
                source: Some(e),
            })?;

        let log_level = match (log_level, raw.log_level) {
            (Some(level), _) => level,
            (None, Some(name)) => name.parse()?,
            (None, None) => LogLevel::default(),
        };

        Ok(Self {
            tmp_dir: raw
                .tmp_dir
                .unwrap_or_else(|| base_dir.join(DEFAULT_TMP_DIR_NAME)),
            log_level,
            log_dir: raw.log_dir,
        })
    }

    /// Value of a single key, rendered for display.
    pub fn get(&self, key: &str) -> CliResult<String> {
        match key {
            "tmp_dir" => Ok(self.tmp_dir.display().to_string()),
            "log_level" => Ok(self.log_level.to_string()),
            "log_dir" => Ok(self
                .log_dir
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_default()),
            _ => Err(CliError::ConfigError {
                message: format!(
                    "Unknown config key: '{key}' (expected one of: {})",
                    KEYS.join(", ")
                ),
                source: None,
            }),
        }
    }
}

/// `TEXTSTAMP_*` variables that name a known key.
///
/// Other variables sharing the prefix belong to someone else and are dropped.
fn known_env_vars(env: Option<config::Map<String, String>>) -> config::Map<String, String> {
    let vars: config::Map<String, String> = match env {
        Some(vars) => vars,
        None => std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect(),
    };
    vars.into_iter()
        .filter(|(name, _)| {
            KEYS.iter()
                .any(|key| name.eq_ignore_ascii_case(&format!("{ENV_PREFIX}_{key}")))
        })
        .collect()
}
