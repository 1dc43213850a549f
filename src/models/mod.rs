//! Core data models for the invoice engine.
//!
//! This module contains all the domain models used throughout the engine.

mod adjustments;
mod invoice_result;
mod ledger;
mod rate_table;
mod shift_record;

pub use adjustments::AdjustmentInputs;
pub use invoice_result::{InvoiceLine, InvoiceResult, InvoiceTotals, format_amount};
pub use ledger::{RecordHandle, ShiftLedger};
pub use rate_table::{RateCategory, RateTable};
pub use shift_record::ShiftRecord;
