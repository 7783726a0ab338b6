//! Output management and formatting.

use std::fmt::Display;
use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::error::{CliError, CliResult};

/// Writes command output to stdout according to the global flags.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags.
    pub fn new(args: &GlobalArgs) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Bold cyan header line; omitted in JSON mode.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet || self.resolved_format == OutputFormat::Json {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// The product of a command.
    ///
    /// Printed as JSON in JSON mode and with `Display` otherwise.  Never
    /// suppressed by `--quiet`.
    pub fn result<T>(&self, value: &T) -> CliResult<()>
    where
        T: Serialize + Display,
    {
        let line = self.render(value)?;
        self.term.write_line(&line)?;
        Ok(())
    }

    fn render<T>(&self, value: &T) -> CliResult<String>
    where
        T: Serialize + Display,
    {
        match self.resolved_format {
            OutputFormat::Json => {
                serde_json::to_string(value).map_err(|e| CliError::Serialization {
                    message: "Failed to render output as JSON".into(),
                    detail: e.to_string(),
                })
            }
            _ => Ok(value.to_string()),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
