//! Configuration

use std::path::PathBuf;

use clap::Args;

use crate::fixtures::{Fixture, STOREFRONT_SET};

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

/// Storefront settings.
#[derive(Debug, Clone, Args)]
pub struct StorefrontConfig {
    /// Directory containing fixture files
    #[arg(long, env = "STOREFRONT_FIXTURES", default_value = "./fixtures")]
    pub fixtures: PathBuf,

    /// Catalog fixture set to load
    #[arg(long, env = "STOREFRONT_CATALOG", default_value = STOREFRONT_SET)]
    pub catalog: String,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Fixture loader rooted at the configured directory.
    pub fn fixture(&self) -> Fixture {
        Fixture::with_base_path(&self.fixtures)
    }
}
