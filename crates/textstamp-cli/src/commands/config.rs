//! `textstamp config`: inspect the resolved configuration.

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&render_list(&config, output.format())?)?;
        }
    }

    Ok(())
}

fn render_list(config: &AppConfig, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(config).map_err(|e| CliError::Serialization {
                message: "Failed to render configuration as JSON".into(),
                detail: e.to_string(),
            })
        }
        _ => toml::to_string_pretty(config).map_err(|e| CliError::Serialization {
            message: "Failed to render configuration as TOML".into(),
            detail: e.to_string(),
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use std::path::PathBuf;

    fn config(log_dir: Option<&str>) -> AppConfig {
        AppConfig {
            tmp_dir: PathBuf::from("/work/tmp"),
            log_level: LogLevel::Info,
            log_dir: log_dir.map(PathBuf::from),
        }
    }

    #[test]
    fn list_as_toml() {
        let rendered = render_list(&config(None), OutputFormat::Plain).unwrap();
        assert!(rendered.contains("tmp_dir = \"/work/tmp\""));
        assert!(rendered.contains("log_level = \"INFO\""));
        assert!(!rendered.contains("log_dir"));
    }

    #[test]
    fn list_as_toml_with_log_dir() {
        let rendered = render_list(&config(Some("/var/log")), OutputFormat::Human).unwrap();
        assert!(rendered.contains("log_dir = \"/var/log\""));
    }

    #[test]
    fn list_as_json() {
        let rendered = render_list(&config(None), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["tmp_dir"], "/work/tmp");
        assert_eq!(value["log_level"], "INFO");
    }
}
