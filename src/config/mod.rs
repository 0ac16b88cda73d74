#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::ConfigProvider;
use crate::domain::model::ReportFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_INPUT_PATH: &str = "tickets.json";

/// Effective settings of one run, after command line and TOML file are merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub input_path: String,
    pub report_format: ReportFormat,
    pub monitor: bool,
}

impl RunConfig {
    pub fn new(input_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            report_format: ReportFormat::default(),
            monitor: false,
        }
    }

    /// Explicit values win over the file; the file wins over defaults.
    pub fn merge(
        input_path: Option<String>,
        report_format: Option<ReportFormat>,
        monitor: bool,
        file: Option<&TomlConfig>,
    ) -> Result<Self> {
        let file_format = match file {
            Some(config) => config.report_format()?,
            None => None,
        };

        Ok(Self {
            input_path: input_path
                .or_else(|| file.and_then(|c| c.input_path()).map(str::to_string))
                .unwrap_or_else(|| DEFAULT_INPUT_PATH.to_string()),
            report_format: report_format.or(file_format).unwrap_or_default(),
            monitor: monitor || file.map(|c| c.monitoring_enabled()).unwrap_or(false),
        })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH)
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn report_format(&self) -> ReportFormat {
        self.report_format
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input_path)
    }
}
