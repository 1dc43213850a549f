//! Invoice-level adjustment inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Adjustments applied on top of the shift totals.
///
/// Travel and reimbursement are entered pre-aggregated for the whole
/// invoice, not per row. Non-negative values are expected but not
/// enforced; negative inputs propagate arithmetically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentInputs {
    /// Total travel charge for the invoice.
    #[serde(default)]
    pub travel_total: Decimal,
    /// Total reimbursement for the invoice.
    #[serde(default)]
    pub reimbursement_total: Decimal,
    /// Whether 10% GST applies to the subtotal.
    #[serde(default)]
    pub gst_enabled: bool,
    /// Superannuation rate as a percentage of gross pay, typically 0-15.
    #[serde(default)]
    pub super_rate_percent: Decimal,
}
