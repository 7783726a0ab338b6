//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "textstamp",
    bin_name = "textstamp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Number the lines of a text file under a timestamp header",
    long_about = "textstamp reads a text file, prepends the current date and time, \
                  numbers every line, and writes the result into an output directory.",
    after_help = "EXAMPLES:\n\
        \x20 textstamp transform notes.txt\n\
        \x20 textstamp transform notes.txt --tmp-dir out\n\
        \x20 TEXTSTAMP_TMP_DIR=/tmp/stamped textstamp transform notes.txt\n\
        \x20 textstamp completions bash > /usr/share/bash-completion/completions/textstamp",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Number the lines of a file and write it to the output directory.
    #[command(
        visible_alias = "t",
        about = "Stamp and number a text file",
        after_help = "EXAMPLES:\n\
            \x20 textstamp transform notes.txt\n\
            \x20 textstamp transform docs/readme.md --tmp-dir build/stamped"
    )]
    Transform(TransformArgs),

    /// Inspect the resolved configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 textstamp config get tmp_dir\n\
            \x20 textstamp config list"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 textstamp completions bash > ~/.local/share/bash-completion/completions/textstamp\n\
            \x20 textstamp completions zsh  > ~/.zfunc/_textstamp\n\
            \x20 textstamp completions fish > ~/.config/fish/completions/textstamp.fish"
    )]
    Completions(CompletionsArgs),
}

impl Commands {
    /// Subcommand name, used to label log files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transform(_) => "transform",
            Self::Config(_) => "config",
            Self::Completions(_) => "completions",
        }
    }
}

// ── transform ─────────────────────────────────────────────────────────────────

/// Arguments for `textstamp transform`.
#[derive(Debug, Args)]
pub struct TransformArgs {
    /// File to read.
    #[arg(value_name = "TARGET_FILE", help = "Path of the text file to transform")]
    pub target_file: PathBuf,

    /// Override the output directory.
    #[arg(
        long = "tmp-dir",
        value_name = "DIR",
        help = "Output directory (default: $TEXTSTAMP_TMP_DIR or ./tmp)"
    )]
    pub tmp_dir: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `textstamp completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `textstamp config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Key name: `tmp_dir`, `log_level`, or `log_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn parse_transform_command() {
        let cli = Cli::parse_from(["textstamp", "transform", "notes.txt"]);
        match cli.command {
            Commands::Transform(args) => {
                assert_eq!(args.target_file, PathBuf::from("notes.txt"));
                assert!(args.tmp_dir.is_none());
            }
            other => panic!("expected Transform, got {other:?}"),
        }
    }

    #[test]
    fn parse_tmp_dir_override() {
        let cli = Cli::parse_from(["textstamp", "transform", "a.txt", "--tmp-dir", "out"]);
        if let Commands::Transform(args) = cli.command {
            assert_eq!(args.tmp_dir, Some(PathBuf::from("out")));
        } else {
            panic!("expected Transform command");
        }
    }

    #[test]
    fn transform_alias() {
        let cli = Cli::parse_from(["textstamp", "t", "a.txt"]);
        assert!(matches!(cli.command, Commands::Transform(_)));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let cli = Cli::parse_from(["textstamp", "--log-level", "DEBUG", "transform", "a.txt"]);
        assert_eq!(cli.global.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn transform_requires_target_file() {
        assert!(Cli::try_parse_from(["textstamp", "transform"]).is_err());
    }

    #[test]
    fn quiet_and_log_level_conflict() {
        let result =
            Cli::try_parse_from(["textstamp", "--quiet", "--log-level", "info", "config", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_names() {
        let cli = Cli::parse_from(["textstamp", "config", "get", "tmp_dir"]);
        assert_eq!(cli.command.name(), "config");
    }
}
