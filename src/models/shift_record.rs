//! Shift record model.
//!
//! This module defines the [`ShiftRecord`] struct representing one logged
//! block of work exactly as it was entered on the invoice form.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RateCategory;

/// One logged shift, the atomic billable unit of an invoice.
///
/// Every field holds the raw text the form delivered. Nothing is validated
/// at entry time: numeric fields are coerced to zero at calculation time if
/// they do not parse, and an unparseable start time simply falls back to
/// the ordinary rate category during classification.
///
/// # Example
///
/// ```
/// use invoice_engine::models::ShiftRecord;
/// use rust_decimal::Decimal;
///
/// let record = ShiftRecord {
///     date: "15/11/2025".to_string(),
///     day: "Saturday".to_string(),
///     participant: "Shady Omerie".to_string(),
///     start: "10:00am".to_string(),
///     end: "1:00pm".to_string(),
///     hours: "3".to_string(),
///     kilometres: "10".to_string(),
///     rate_override: None,
/// };
/// assert_eq!(record.hours_value(), Decimal::new(3, 0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Display date as entered (e.g. "15/11/2025"); never parsed.
    pub date: String,
    /// Free-text day-of-week label; drives rate classification.
    pub day: String,
    /// Participant name, display-only.
    pub participant: String,
    /// Free-text start time; feeds afternoon-rate classification.
    pub start: String,
    /// Free-text end time, display-only.
    pub end: String,
    /// Hours worked as entered; quarter-hour granularity by convention.
    pub hours: String,
    /// Kilometres travelled as entered; blank is distinct from zero for
    /// display but counts as zero in sums.
    pub kilometres: String,
    /// Explicit rate category; `None` means infer from `day` and `start`.
    #[serde(default)]
    pub rate_override: Option<RateCategory>,
}

impl ShiftRecord {
    /// Returns the hours field coerced to a decimal.
    ///
    /// Blank or non-numeric text coerces to zero rather than failing.
    /// Negative values are not rejected; they propagate arithmetically.
    pub fn hours_value(&self) -> Decimal {
        coerce_decimal(&self.hours)
    }

    /// Returns the kilometres field coerced to a decimal.
    ///
    /// Blank or non-numeric text coerces to zero rather than failing.
    pub fn kilometres_value(&self) -> Decimal {
        coerce_decimal(&self.kilometres)
    }
}

/// Coerces free-form field text to a decimal, treating anything that does
/// not parse (including blank) as zero.
fn coerce_decimal(text: &str) -> Decimal {
    Decimal::from_str(text.trim()).unwrap_or(Decimal::ZERO)
}
