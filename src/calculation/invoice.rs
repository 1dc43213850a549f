//! The aggregate invoice computation.
//!
//! A single pure function over a ledger snapshot, a rate table and the
//! adjustment inputs. There is no incremental state: every call rebuilds
//! the whole [`InvoiceResult`], which sidesteps any staleness from
//! selective field updates.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    AdjustmentInputs, InvoiceLine, InvoiceResult, InvoiceTotals, RateCategory, RateTable,
    ShiftLedger,
};

use super::category::resolve_category;

/// The GST rate applied when GST is enabled (10%).
pub fn gst_rate() -> Decimal {
    // 0.10
    Decimal::new(10, 2)
}

/// Calculates an invoice from a ledger snapshot.
///
/// For every record, in insertion order: the rate category is resolved
/// (explicit override, else inferred), the line amount is
/// `hours x rate(category)`, and hours, kilometres and the amount are
/// accumulated into the totals. Then:
///
/// - `subtotal = gross_pay + travel_total + reimbursement_total`
/// - `gst_amount = subtotal x 10%` when GST is enabled, else zero
/// - `total_with_gst = subtotal + gst_amount`
/// - `super_contribution = gross_pay x super_rate_percent / 100`,
///   computed on gross pay only - travel, reimbursement and GST are
///   excluded from the superannuation base
/// - `bank_payable = total_with_gst - super_contribution`
///
/// Every path is total: unparseable numeric fields coerce to zero,
/// unparseable start times classify as ordinary, and negative inputs
/// propagate arithmetically instead of being rejected. Accumulation stays
/// at full precision; display rounding is the caller's concern.
///
/// # Example
///
/// ```
/// use invoice_engine::calculation::calculate_invoice;
/// use invoice_engine::models::{
///     AdjustmentInputs, RateCategory, RateTable, ShiftLedger, ShiftRecord,
/// };
/// use rust_decimal::Decimal;
///
/// let mut ledger = ShiftLedger::new();
/// ledger.add_record(ShiftRecord {
///     day: "Saturday".to_string(),
///     start: "10:00am".to_string(),
///     hours: "3".to_string(),
///     ..Default::default()
/// });
///
/// let mut rates = RateTable::new();
/// rates.set(RateCategory::Saturday, Decimal::new(40, 0));
///
/// let result = calculate_invoice(&ledger, &rates, &AdjustmentInputs::default());
/// assert_eq!(result.lines[0].category, RateCategory::Saturday);
/// assert_eq!(result.lines[0].amount, Decimal::new(120, 0));
/// assert_eq!(result.totals.gross_pay, Decimal::new(120, 0));
/// ```
pub fn calculate_invoice(
    ledger: &ShiftLedger,
    rates: &RateTable,
    adjustments: &AdjustmentInputs,
) -> InvoiceResult {
    let mut totals = InvoiceTotals::default();
    let mut lines = Vec::with_capacity(ledger.len());

    for (position, record) in ledger.records().enumerate() {
        let category = resolve_category(record);
        let hours = record.hours_value();
        let rate = rates.rate_for(category);
        let amount = hours * rate;

        match category {
            RateCategory::Ordinary => totals.ordinary_hours += hours,
            RateCategory::Afternoon => totals.afternoon_hours += hours,
            RateCategory::Saturday => totals.saturday_hours += hours,
            RateCategory::Sunday => totals.sunday_hours += hours,
        }
        totals.total_kilometres += record.kilometres_value();
        totals.gross_pay += amount;

        lines.push(InvoiceLine {
            position,
            category,
            hours,
            rate,
            amount,
        });
    }

    totals.subtotal = totals.gross_pay + adjustments.travel_total + adjustments.reimbursement_total;
    totals.gst_amount = if adjustments.gst_enabled {
        totals.subtotal * gst_rate()
    } else {
        Decimal::ZERO
    };
    totals.total_with_gst = totals.subtotal + totals.gst_amount;
    totals.super_contribution =
        totals.gross_pay * adjustments.super_rate_percent / Decimal::ONE_HUNDRED;
    totals.bank_payable = totals.total_with_gst - totals.super_contribution;

    InvoiceResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        lines,
        totals,
    }
}
