//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `--log-level`,
//! `-q`, etc. are available on any invocation without repetition

use clap::Args;
use std::path::PathBuf;

use crate::config::LogLevel;

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Console log level.
    ///
    /// Overrides `TEXTSTAMP_LOG_LEVEL` and the config file. `RUST_LOG`, when
    /// set, takes precedence over everything.
    #[arg(
        long = "log-level",
        global = true,
        value_enum,
        ignore_case = true,
        value_name = "LEVEL",
        help = "Log level (critical, error, warning, info, debug)"
    )]
    pub log_level: Option<LogLevel>,

    /// Only log errors and suppress informational output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "log_level",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path (TOML)"
    )]
    pub config: Option<PathBuf>,

    /// Machine-readable output format.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Human-readable with colors.
    Human,
    /// Plain text without colors.
    Plain,
    /// JSON output.
    Json,
}
