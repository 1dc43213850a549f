//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::RateTable;

use super::types::{EngineConfig, InvoiceDefaults, RatesFile};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/
/// ├── rates.yaml     # default hourly rate table
/// └── defaults.yaml  # default GST flag and super rate
/// ```
///
/// # Example
///
/// ```no_run
/// use invoice_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// let ordinary = loader
///     .rate_table()
///     .rate_for(invoice_engine::models::RateCategory::Ordinary);
/// println!("Ordinary rate: ${}", ordinary);
/// # Ok::<(), invoice_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if either file is
    /// missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rates_file = Self::load_yaml::<RatesFile>(&path.join("rates.yaml"))?;
        let defaults = Self::load_yaml::<InvoiceDefaults>(&path.join("defaults.yaml"))?;

        Ok(Self {
            config: EngineConfig::new(rates_file.rates, defaults),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the default rate table.
    pub fn rate_table(&self) -> &RateTable {
        self.config.rate_table()
    }

    /// Returns the invoice defaults.
    pub fn defaults(&self) -> &InvoiceDefaults {
        self.config.defaults()
    }
}
