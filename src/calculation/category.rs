//! Rate-category classification.
//!
//! Given a record without an explicit override, decides which pay category
//! its hours bill at. The day label wins over the start time: Saturday and
//! Sunday are recognised from the label alone, and only weekday shifts can
//! qualify for the afternoon rate.

use chrono::Timelike;

use crate::models::{RateCategory, ShiftRecord};

use super::time_of_day::parse_time_of_day;

/// Shifts starting at or after this hour of day bill at the afternoon rate.
pub const AFTERNOON_START_HOUR: u32 = 15;

/// Infers the rate category from a record's day label and start time.
///
/// The rules, applied in order:
///
/// 1. A blank day label means `Ordinary` (the label is checked before
///    trimming, so a whitespace-only label is not blank).
/// 2. A label starting with `"sun"` or containing `"sunday"` (trimmed,
///    case-insensitive) means `Sunday`.
/// 3. A label starting with `"sat"` or containing `"saturday"` means
///    `Saturday`.
/// 4. Otherwise the start time is parsed; a start at hour
///    [`AFTERNOON_START_HOUR`] or later means `Afternoon`.
/// 5. Anything else, including an unparseable start time, means
///    `Ordinary`.
///
/// # Examples
///
/// ```
/// use invoice_engine::calculation::infer_category;
/// use invoice_engine::models::RateCategory;
///
/// assert_eq!(infer_category("Saturday", "10:00am"), RateCategory::Saturday);
/// assert_eq!(infer_category("Monday", "3:00pm"), RateCategory::Afternoon);
/// assert_eq!(infer_category("Monday", "2:30pm"), RateCategory::Ordinary);
/// // Blank day wins over the start time.
/// assert_eq!(infer_category("", "4:35pm"), RateCategory::Ordinary);
/// ```
pub fn infer_category(day: &str, start: &str) -> RateCategory {
    if day.is_empty() {
        return RateCategory::Ordinary;
    }

    let day = day.trim().to_ascii_lowercase();
    if day.starts_with("sun") || day.contains("sunday") {
        return RateCategory::Sunday;
    }
    if day.starts_with("sat") || day.contains("saturday") {
        return RateCategory::Saturday;
    }

    if let Some(start) = parse_time_of_day(start) {
        if start.hour() >= AFTERNOON_START_HOUR {
            return RateCategory::Afternoon;
        }
    }

    RateCategory::Ordinary
}

/// Resolves the category for a record: the explicit override when set,
/// otherwise the inferred category.
pub fn resolve_category(record: &ShiftRecord) -> RateCategory {
    record
        .rate_override
        .unwrap_or_else(|| infer_category(&record.day, &record.start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_day_is_ordinary_regardless_of_start() {
        assert_eq!(infer_category("", ""), RateCategory::Ordinary);
        assert_eq!(infer_category("", "4:35pm"), RateCategory::Ordinary);
    }

    #[test]
    fn test_whitespace_day_is_not_blank() {
        // The blank check runs before trimming, so a whitespace-only label
        // falls through to time-based inference.
        assert_eq!(infer_category("  ", "4:35pm"), RateCategory::Afternoon);
        assert_eq!(infer_category("  ", "9:00am"), RateCategory::Ordinary);
    }

    #[test]
    fn test_sunday_labels() {
        assert_eq!(infer_category("Sunday", ""), RateCategory::Sunday);
        assert_eq!(infer_category("sun", ""), RateCategory::Sunday);
        assert_eq!(infer_category("SUN 23rd", ""), RateCategory::Sunday);
        assert_eq!(infer_category(" sunday ", ""), RateCategory::Sunday);
    }

    #[test]
    fn test_saturday_labels() {
        assert_eq!(infer_category("Saturday", ""), RateCategory::Saturday);
        assert_eq!(infer_category("Sat", "10:00am"), RateCategory::Saturday);
        assert_eq!(infer_category("sat 22nd", ""), RateCategory::Saturday);
    }

    #[test]
    fn test_sunday_checked_before_saturday() {
        // A label matching both rules takes the Sunday branch first.
        assert_eq!(
            infer_category("saturday and sunday", ""),
            RateCategory::Sunday
        );
    }

    #[test]
    fn test_weekend_label_ignores_start_time() {
        assert_eq!(infer_category("Saturday", "4:00pm"), RateCategory::Saturday);
        assert_eq!(infer_category("Sunday", "8:00pm"), RateCategory::Sunday);
    }

    #[test]
    fn test_afternoon_boundary() {
        assert_eq!(infer_category("Monday", "2:30pm"), RateCategory::Ordinary);
        assert_eq!(infer_category("Monday", "3:00pm"), RateCategory::Afternoon);
        assert_eq!(infer_category("Monday", "14:59"), RateCategory::Ordinary);
        assert_eq!(infer_category("Monday", "15:00"), RateCategory::Afternoon);
        assert_eq!(infer_category("Friday", "11pm"), RateCategory::Afternoon);
    }

    #[test]
    fn test_unparseable_start_is_ordinary() {
        assert_eq!(infer_category("Monday", ""), RateCategory::Ordinary);
        assert_eq!(infer_category("Monday", "evening"), RateCategory::Ordinary);
        assert_eq!(infer_category("Monday", "25:00"), RateCategory::Ordinary);
    }

    #[test]
    fn test_override_wins_over_inference() {
        let record = ShiftRecord {
            day: "Saturday".to_string(),
            start: "10:00am".to_string(),
            rate_override: Some(RateCategory::Ordinary),
            ..Default::default()
        };
        assert_eq!(resolve_category(&record), RateCategory::Ordinary);
    }

    #[test]
    fn test_resolve_falls_back_to_inference() {
        let record = ShiftRecord {
            day: "Sunday".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_category(&record), RateCategory::Sunday);
    }
}
