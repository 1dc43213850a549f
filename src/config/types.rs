//! Configuration types for the invoice engine.
//!
//! This module contains the strongly-typed structures that are
//! deserialized from the YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::RateTable;

/// Structure of `rates.yaml`: the default hourly rate table.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesFile {
    /// Hourly rates by category.
    pub rates: RateTable,
}

/// Structure of `defaults.yaml`: invoice-level defaults applied when a
/// request does not specify its own adjustments.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceDefaults {
    /// Whether GST is charged by default.
    #[serde(default)]
    pub gst_enabled: bool,
    /// Default superannuation rate as a percentage of gross pay.
    #[serde(default)]
    pub super_rate_percent: Decimal,
}

/// The complete engine configuration loaded from a config directory.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    rate_table: RateTable,
    defaults: InvoiceDefaults,
}

impl EngineConfig {
    /// Creates a config from its component parts.
    pub fn new(rate_table: RateTable, defaults: InvoiceDefaults) -> Self {
        Self {
            rate_table,
            defaults,
        }
    }

    /// Returns the default rate table.
    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }

    /// Returns the invoice defaults.
    pub fn defaults(&self) -> &InvoiceDefaults {
        &self.defaults
    }
}
