//! # textstamp CLI
//!
//! Prepends a timestamp to a text file, numbers its lines, and writes the
//! result into an output directory.
//!
//! ## Startup sequence
//!
//! 1. Load `.env`, then parse CLI arguments (clap handles `--help` /
//!    `--version`).
//! 2. Load configuration (flags + env + file + defaults).
//! 3. Initialise the tracing subscriber (console, plus optional log file).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a log line, a user-facing message and
//!    an exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                   |
//! |------|---------------------------|
//! |  0   | Success                   |
//! |  1   | Any runtime error         |
//! |  2   | Invalid arguments         |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::{AppConfig, LogLevel},
    error::{CliError, CliResult},
    logging::{LogSettings, init_logging, log_file_path},
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine; real deployments use the environment directly.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too and go to stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Load configuration ─────────────────────────────────────────────
    let config = AppConfig::load(cli.global.config.as_deref(), cli.global.log_level);

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    // A broken config still gets a subscriber so its error is logged.
    let settings = LogSettings {
        level: config
            .as_ref()
            .map(|c| c.log_level)
            .unwrap_or_else(|_| cli.global.log_level.unwrap_or_default()),
        quiet: cli.global.quiet,
        no_color: cli.global.no_color,
        file: config.as_ref().ok().and_then(|c| c.log_dir.as_deref()).map(|dir| {
            log_file_path(dir, cli.command.name(), Local::now().naive_local())
        }),
    };
    let verbose = settings.level == LogLevel::Debug && !settings.quiet;

    let _guard = match init_logging(&settings) {
        Ok(guard) => guard,
        Err(e) => return handle_error(CliError::Logging(e), verbose),
    };

    let config = match config {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose),
    };

    debug!(
        log_level = %config.log_level,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        tmp_dir = %config.tmp_dir.display(),
        "CLI started"
    );

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, &output) {
        Ok(()) => {
            info!("textstamp completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all, fields(command = cli.command.name()))]
fn run(cli: Cli, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Transform(args) => commands::transform::execute(args, config, output),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// The single error boundary.
///
/// Logs the structured line, prints the message with suggestions to stderr,
/// and exits 1.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let msg = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::FAILURE
}

// ── tests ─────────────────────────────────────────────────────────────────────
