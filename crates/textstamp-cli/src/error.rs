//! Error handling for the textstamp CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - A single-line structured form for the log

use std::any::type_name;

use owo_colors::OwoColorize;
use thiserror::Error;

use textstamp_core::error::ApplicationError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `textstamp-core` or an adapter.
    #[error("Transform failed: {0}")]
    Core(#[from] ApplicationError),

    // ── Config errors ──────────────────────────────────────────────────────
    /// Configuration could not be read, parsed, or validated.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<config::ConfigError>,
    },

    /// A value could not be rendered in the requested output format.
    #[error("Serialization error: {message}")]
    Serialization { message: String, detail: String },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed (usually writing to stdout).
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {0:#}")]
    Logging(anyhow::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::ConfigError { .. } => vec![
                "Check the TEXTSTAMP_TMP_DIR, TEXTSTAMP_LOG_LEVEL and TEXTSTAMP_LOG_DIR variables"
                    .into(),
                "Check the file passed with --config".into(),
                "Run 'textstamp config list' to see the resolved values".into(),
            ],

            Self::Serialization { .. } => {
                vec!["Try a different --output-format".into()]
            }

            Self::IoError { .. } => vec![
                "Check that stdout and stderr are writable".into(),
                "Check available disk space".into(),
            ],

            Self::Logging(_) => vec![
                "Check that TEXTSTAMP_LOG_DIR points to a writable directory".into(),
                "Check the RUST_LOG filter syntax".into(),
            ],
        }
    }

    /// Fully qualified type name of the failure.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Core(core_err) => core_err.type_name(),
            _ => type_name::<Self>(),
        }
    }

    /// Message without the category prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Core(core_err) => core_err.message(),
            Self::ConfigError { message, .. }
            | Self::Serialization { message, .. }
            | Self::IoError { message, .. } => message.clone(),
            Self::Logging(e) => format!("{e:#}"),
        }
    }

    /// Type name and message of the underlying cause, if any.
    pub fn cause(&self) -> Option<(&'static str, String)> {
        match self {
            Self::Core(core_err) => core_err
                .cause()
                .map(|cause| (cause.type_name(), cause.to_string())),
            Self::ConfigError { source, .. } => source
                .as_ref()
                .map(|e| (type_name::<config::ConfigError>(), e.to_string())),
            Self::Serialization { detail, .. } => Some((type_name::<String>(), detail.clone())),
            Self::IoError { source, .. } => {
                Some((type_name::<std::io::Error>(), source.to_string()))
            }
            Self::Logging(_) => None,
        }
    }

    /// Single-line form for the log:
    /// `type=.. message=.. cause_type=.. cause_message=..`.
    pub fn structured_message(&self) -> String {
        let (cause_type, cause_message) = match self.cause() {
            Some((ty, msg)) => (ty, msg),
            None => ("none", "none".to_owned()),
        };
        format!(
            "type={} message={} cause_type={} cause_message={}",
            self.type_name(),
            self.message(),
            cause_type,
            cause_message
        )
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if let Some((cause_type, cause_message)) = self.cause().filter(|_| verbose) {
            output.push_str(&format!(
                "\n  {} {} {}\n",
                "→".dimmed(),
                cause_message.dimmed(),
                format!("({cause_type})").dimmed()
            ));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use --log-level debug for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] with no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if let Some((cause_type, cause_message)) = self.cause().filter(|_| verbose) {
            out.push_str(&format!("  Caused by: {cause_message} ({cause_type})\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse --log-level debug for more details.\n");
        }

        out
    }

    /// Emit the structured line at ERROR.
    pub fn log(&self) {
        tracing::error!("{}", self.structured_message());
    }
}
