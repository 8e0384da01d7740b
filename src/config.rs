//! Dashboard Configuration Module
//! Reads `dashboard.toml` (optional) on top of built-in defaults.

use crate::stats::DateRange;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "dashboard";
pub const DEFAULT_DATA_PATH: &str = "OrdersSmallest.csv";
const DEFAULT_START: &str = "2015-12-01";
const DEFAULT_END: &str = "2015-12-31";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Where the orders live and which range the dashboard opens with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub default_start: NaiveDate,
    pub default_end: NaiveDate,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let range = DateRange::dashboard_default();
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            default_start: range.start,
            default_end: range.end,
        }
    }
}

impl DashboardConfig {
    /// Load settings from `path`, or from `dashboard.toml` if it exists.
    ///
    /// An explicit path must exist; the implicit one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let source = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config: Self = config::Config::builder()
            .set_default("data_path", DEFAULT_DATA_PATH)?
            .set_default("default_start", DEFAULT_START)?
            .set_default("default_end", DEFAULT_END)?
            .add_source(source)
            .build()?
            .try_deserialize()?;

        config.validate()
    }

    /// Initial query range.
    pub fn default_range(&self) -> DateRange {
        DateRange::new(self.default_start, self.default_end)
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.data_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "data_path must not be empty".to_string(),
            ));
        }
        Ok(self)
    }
}
