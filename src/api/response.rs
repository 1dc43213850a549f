//! Response types for the invoice engine API.
//!
//! The calculation itself never fails, so the error surface is limited to
//! request decoding. Successful `/calculate` responses are the
//! [`InvoiceResult`](crate::models::InvoiceResult) model serialized
//! directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::models::RateTable;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// Response body for `GET /rates`: the configured defaults a form
/// front-end pre-fills its rate and adjustment fields with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsResponse {
    /// The default hourly rate table.
    pub rates: RateTable,
    /// Whether GST is charged by default.
    pub gst_enabled: bool,
    /// Default superannuation rate percentage.
    pub super_rate_percent: Decimal,
}

impl From<&EngineConfig> for DefaultsResponse {
    fn from(config: &EngineConfig) -> Self {
        Self {
            rates: config.rate_table().clone(),
            gst_enabled: config.defaults().gst_enabled,
            super_rate_percent: config.defaults().super_rate_percent,
        }
    }
}
