//! Invoice calculation result models.
//!
//! This module contains the [`InvoiceResult`] type and its associated
//! structures capturing all outputs of an invoice calculation: per-row
//! lines, per-category hour sums and the financial totals.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RateCategory;

/// A single calculated line, one per ledger record.
///
/// Captures the category the record resolved to, the coerced hours, the
/// applied hourly rate and the resulting amount. Consumed by the external
/// rendering sink for the per-row line total column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// The record's insertion position in the ledger, zero-based.
    pub position: usize,
    /// The resolved rate category (explicit override or inferred).
    pub category: RateCategory,
    /// Hours billed on this line, coerced from the record's text.
    pub hours: Decimal,
    /// The hourly rate applied.
    pub rate: Decimal,
    /// The line amount (hours * rate).
    pub amount: Decimal,
}

/// Aggregated totals for an invoice calculation.
///
/// A pure projection with no independent lifecycle: it is discarded and
/// rebuilt wholesale on every recalculation, never patched incrementally.
/// All values are kept at full precision; rounding happens only at
/// presentation time via [`InvoiceTotals::rounded`] or [`format_amount`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Hours billed at the ordinary rate.
    pub ordinary_hours: Decimal,
    /// Hours billed at the afternoon rate.
    pub afternoon_hours: Decimal,
    /// Hours billed at the Saturday rate.
    pub saturday_hours: Decimal,
    /// Hours billed at the Sunday rate.
    pub sunday_hours: Decimal,
    /// Total kilometres across all records.
    pub total_kilometres: Decimal,
    /// Sum of all line amounts, before adjustments.
    pub gross_pay: Decimal,
    /// Gross pay plus travel and reimbursement.
    pub subtotal: Decimal,
    /// GST on the subtotal (zero when GST is disabled).
    pub gst_amount: Decimal,
    /// Subtotal plus GST.
    pub total_with_gst: Decimal,
    /// Superannuation withheld, computed on gross pay only.
    pub super_contribution: Decimal,
    /// Final amount payable to the bank account.
    pub bank_payable: Decimal,
}

impl InvoiceTotals {
    /// Returns the hour sum for a category.
    pub fn hours_for(&self, category: RateCategory) -> Decimal {
        match category {
            RateCategory::Ordinary => self.ordinary_hours,
            RateCategory::Afternoon => self.afternoon_hours,
            RateCategory::Saturday => self.saturday_hours,
            RateCategory::Sunday => self.sunday_hours,
        }
    }

    /// Returns a copy with every value rounded for display.
    ///
    /// Rounds to 2 decimal places, half away from zero. Internal
    /// accumulation stays at full precision so rounding error never
    /// compounds across rows; only this presentation copy is rounded.
    pub fn rounded(&self) -> Self {
        Self {
            ordinary_hours: round_display(self.ordinary_hours),
            afternoon_hours: round_display(self.afternoon_hours),
            saturday_hours: round_display(self.saturday_hours),
            sunday_hours: round_display(self.sunday_hours),
            total_kilometres: round_display(self.total_kilometres),
            gross_pay: round_display(self.gross_pay),
            subtotal: round_display(self.subtotal),
            gst_amount: round_display(self.gst_amount),
            total_with_gst: round_display(self.total_with_gst),
            super_contribution: round_display(self.super_contribution),
            bank_payable: round_display(self.bank_payable),
        }
    }
}

/// The complete result of an invoice calculation.
///
/// Built fresh by every call to
/// [`calculate_invoice`](crate::calculation::calculate_invoice) and handed
/// to the rendering collaborator on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// One line per ledger record, in insertion order.
    pub lines: Vec<InvoiceLine>,
    /// Aggregated totals.
    pub totals: InvoiceTotals,
}

fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a value for display with exactly two decimal places,
/// rounding half away from zero.
///
/// # Example
///
/// ```
/// use invoice_engine::models::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_amount(Decimal::from_str("157.5").unwrap()), "157.50");
/// assert_eq!(format_amount(Decimal::from_str("107.005").unwrap()), "107.01");
/// ```
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_display(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_amount_pads_to_two_places() {
        assert_eq!(format_amount(dec("120")), "120.00");
        assert_eq!(format_amount(dec("157.5")), "157.50");
        assert_eq!(format_amount(dec("0")), "0.00");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(dec("1.005")), "1.01");
        assert_eq!(format_amount(dec("1.004")), "1.00");
        assert_eq!(format_amount(dec("-1.005")), "-1.01");
    }

    #[test]
    fn test_rounded_does_not_mutate_original() {
        let totals = InvoiceTotals {
            gross_pay: dec("100.005"),
            ..Default::default()
        };
        let display = totals.rounded();
        assert_eq!(display.gross_pay, dec("100.01"));
        assert_eq!(totals.gross_pay, dec("100.005"));
    }

    #[test]
    fn test_hours_for_maps_each_category() {
        let totals = InvoiceTotals {
            ordinary_hours: dec("1"),
            afternoon_hours: dec("2"),
            saturday_hours: dec("3"),
            sunday_hours: dec("4"),
            ..Default::default()
        };
        assert_eq!(totals.hours_for(RateCategory::Ordinary), dec("1"));
        assert_eq!(totals.hours_for(RateCategory::Afternoon), dec("2"));
        assert_eq!(totals.hours_for(RateCategory::Saturday), dec("3"));
        assert_eq!(totals.hours_for(RateCategory::Sunday), dec("4"));
    }

    #[test]
    fn test_totals_serialization_uses_string_decimals() {
        let totals = InvoiceTotals {
            gross_pay: dec("1500.00"),
            subtotal: dec("1570.00"),
            ..Default::default()
        };
        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"gross_pay\":\"1500.00\""));
        assert!(json.contains("\"subtotal\":\"1570.00\""));
    }

    #[test]
    fn test_result_serialization_round_trip() {
        let result = InvoiceResult {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2025-11-20T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            lines: vec![InvoiceLine {
                position: 0,
                category: RateCategory::Saturday,
                hours: dec("3"),
                rate: dec("40"),
                amount: dec("120"),
            }],
            totals: InvoiceTotals::default(),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"category\":\"saturday\""));

        let deserialized: InvoiceResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
