//! Rate categories and the hourly rate table.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The pay category of a shift.
///
/// Each category has its own hourly rate in the [`RateTable`]. A shift is
/// either assigned a category explicitly or classified from its day label
/// and start time.
///
/// # Example
///
/// ```
/// use invoice_engine::models::RateCategory;
///
/// let category = RateCategory::Saturday;
/// assert_eq!(serde_json::to_string(&category).unwrap(), "\"saturday\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateCategory {
    /// Weekday daytime hours.
    Ordinary,
    /// Weekday hours starting at or after 3pm.
    Afternoon,
    /// Saturday hours.
    Saturday,
    /// Sunday hours.
    Sunday,
}

impl RateCategory {
    /// All categories, in display order.
    pub const ALL: [RateCategory; 4] = [
        RateCategory::Ordinary,
        RateCategory::Afternoon,
        RateCategory::Saturday,
        RateCategory::Sunday,
    ];
}

impl std::fmt::Display for RateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateCategory::Ordinary => write!(f, "ordinary"),
            RateCategory::Afternoon => write!(f, "afternoon"),
            RateCategory::Saturday => write!(f, "saturday"),
            RateCategory::Sunday => write!(f, "sunday"),
        }
    }
}

/// Hourly rates by category.
///
/// A category missing from the table falls back to the ordinary rate; if
/// that is also missing the rate is zero. An explicitly configured zero
/// rate is honoured as zero, not treated as missing.
///
/// # Example
///
/// ```
/// use invoice_engine::models::{RateCategory, RateTable};
/// use rust_decimal::Decimal;
///
/// let mut table = RateTable::new();
/// table.set(RateCategory::Ordinary, Decimal::new(30, 0));
/// table.set(RateCategory::Saturday, Decimal::new(40, 0));
///
/// assert_eq!(table.rate_for(RateCategory::Saturday), Decimal::new(40, 0));
/// // Missing category falls back to ordinary.
/// assert_eq!(table.rate_for(RateCategory::Sunday), Decimal::new(30, 0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: HashMap<RateCategory, Decimal>,
}

impl RateTable {
    /// Creates an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hourly rate for a category.
    pub fn set(&mut self, category: RateCategory, rate: Decimal) {
        self.rates.insert(category, rate);
    }

    /// Returns the configured rate for a category, if present.
    pub fn get(&self, category: RateCategory) -> Option<Decimal> {
        self.rates.get(&category).copied()
    }

    /// Resolves the hourly rate to apply for a category.
    ///
    /// Falls back to the ordinary rate when the category is absent, and to
    /// zero when ordinary is absent too.
    pub fn rate_for(&self, category: RateCategory) -> Decimal {
        self.get(category)
            .or_else(|| self.get(RateCategory::Ordinary))
            .unwrap_or(Decimal::ZERO)
    }
}

impl FromIterator<(RateCategory, Decimal)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (RateCategory, Decimal)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}
