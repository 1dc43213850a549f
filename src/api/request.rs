//! Request types for the invoice engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint. Row fields mirror the form exactly: everything arrives as
//! free text and nothing is validated server-side.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::InvoiceDefaults;
use crate::models::{AdjustmentInputs, RateCategory, RateTable, ShiftRecord};

/// Request body for the `/calculate` endpoint.
///
/// `rates` and `adjustments` are optional; when omitted the defaults from
/// the loaded configuration apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRequest {
    /// The shift rows, in table order.
    #[serde(default)]
    pub shifts: Vec<ShiftRowRequest>,
    /// Hourly rates to use for this invoice, overriding the configured
    /// defaults.
    #[serde(default)]
    pub rates: Option<RateTable>,
    /// Invoice-level adjustments.
    #[serde(default)]
    pub adjustments: Option<AdjustmentsRequest>,
}

/// One shift row in a calculation request.
///
/// All fields are optional free text; a missing field is the same as an
/// empty form cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftRowRequest {
    /// Display date (e.g. "14/11/2025").
    #[serde(default)]
    pub date: String,
    /// Day-of-week label.
    #[serde(default)]
    pub day: String,
    /// Participant name.
    #[serde(default)]
    pub participant: String,
    /// Start time.
    #[serde(default)]
    pub start: String,
    /// End time.
    #[serde(default)]
    pub end: String,
    /// Hours worked.
    #[serde(default)]
    pub hours: String,
    /// Kilometres travelled.
    #[serde(default)]
    pub kilometres: String,
    /// Explicit rate category; omit for automatic classification.
    #[serde(default)]
    pub rate_category: Option<RateCategory>,
}

/// Invoice-level adjustments in a calculation request.
///
/// Each field is optional; missing values fall back to the configured
/// defaults (travel and reimbursement default to zero).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjustmentsRequest {
    /// Total travel charge.
    #[serde(default)]
    pub travel_total: Option<Decimal>,
    /// Total reimbursement.
    #[serde(default)]
    pub reimbursement_total: Option<Decimal>,
    /// Whether GST applies.
    #[serde(default)]
    pub gst_enabled: Option<bool>,
    /// Superannuation rate percentage.
    #[serde(default)]
    pub super_rate_percent: Option<Decimal>,
}

impl AdjustmentsRequest {
    /// Resolves the request against the configured defaults.
    pub fn resolve(self, defaults: &InvoiceDefaults) -> AdjustmentInputs {
        AdjustmentInputs {
            travel_total: self.travel_total.unwrap_or(Decimal::ZERO),
            reimbursement_total: self.reimbursement_total.unwrap_or(Decimal::ZERO),
            gst_enabled: self.gst_enabled.unwrap_or(defaults.gst_enabled),
            super_rate_percent: self
                .super_rate_percent
                .unwrap_or(defaults.super_rate_percent),
        }
    }
}

impl From<ShiftRowRequest> for ShiftRecord {
    fn from(req: ShiftRowRequest) -> Self {
        ShiftRecord {
            date: req.date,
            day: req.day,
            participant: req.participant,
            start: req.start,
            end: req.end,
            hours: req.hours,
            kilometres: req.kilometres,
            rate_override: req.rate_category,
        }
    }
}
