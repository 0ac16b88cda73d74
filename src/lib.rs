pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::{toml_config::TomlConfig, RunConfig};
pub use crate::core::{etl::EtlEngine, pipeline::TicketPipeline, report::render};
pub use domain::model::{ReportFormat, TicketReport};
pub use utils::error::{Result, TicketError};
