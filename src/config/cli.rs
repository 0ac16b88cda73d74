use crate::config::toml_config::TomlConfig;
use crate::config::RunConfig;
use crate::domain::model::ReportFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ticket-stats")]
#[command(about = "Minimum flight time per carrier and price statistics for VVO -> TLV tickets")]
pub struct CliConfig {
    /// JSON document with a `tickets` array [default: tickets.json]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage after each stage")]
    pub monitor: bool,
}

impl CliConfig {
    /// Loads the TOML file, if any, and merges it underneath the command line.
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        if let Some(file) = &file {
            file.validate()?;
        }

        RunConfig::merge(self.input.clone(), self.format, self.monitor, file.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let cli = CliConfig::parse_from([
            "ticket-stats",
            "--input",
            "flights.json",
            "--format",
            "json",
            "-v",
        ]);

        assert_eq!(cli.input.as_deref(), Some("flights.json"));
        assert_eq!(cli.format, Some(ReportFormat::Json));
        assert!(cli.verbose);
        assert!(!cli.monitor);

        let config = cli.resolve().unwrap();
        assert_eq!(config.input_path, "flights.json");
        assert_eq!(config.report_format, ReportFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(CliConfig::try_parse_from(["ticket-stats", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliConfig::parse_from([
            "ticket-stats",
            "--config",
            "/nonexistent/ticket-stats.toml",
        ]);
        let err = cli.resolve().unwrap_err();
        assert_eq!(err.category(), "I/O error");
    }
}
