//! Free-text time-of-day parsing.
//!
//! Start times arrive as whatever the contractor typed into the form, so
//! the accepted grammar matches the form's conventions rather than a
//! strict timestamp format: `4:35pm`, `16:30` and `4pm` are all valid.

use chrono::NaiveTime;

#[derive(Clone, Copy)]
enum Meridiem {
    Am,
    Pm,
}

/// Parses a free-text time of day.
///
/// Accepts, case-insensitively and with surrounding whitespace ignored:
///
/// - `H:MM` or `H:MM am|pm` - 1-2 digit hour, exactly 2-digit minute.
///   An `am`/`pm` suffix converts 12-hour input (`pm` adds 12 to hours
///   below 12, `am` maps hour 12 to 0); without a suffix the value is
///   taken as already 24-hour.
/// - `H am|pm` - minutes default to 0, same conversion.
///
/// Anything else is `None`, including bare hours without a suffix and
/// out-of-range components (`NaiveTime` cannot hold hour 25 or minute 60).
///
/// # Examples
///
/// ```
/// use invoice_engine::calculation::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time_of_day("4:35pm"), NaiveTime::from_hms_opt(16, 35, 0));
/// assert_eq!(parse_time_of_day("16:30"), NaiveTime::from_hms_opt(16, 30, 0));
/// assert_eq!(parse_time_of_day("4pm"), NaiveTime::from_hms_opt(16, 0, 0));
/// assert_eq!(parse_time_of_day("12:10am"), NaiveTime::from_hms_opt(0, 10, 0));
/// assert_eq!(parse_time_of_day("late morning"), None);
/// ```
pub fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    let text = text.trim().to_ascii_lowercase();

    let (body, meridiem) = if let Some(stripped) = text.strip_suffix("am") {
        (stripped.trim_end(), Some(Meridiem::Am))
    } else if let Some(stripped) = text.strip_suffix("pm") {
        (stripped.trim_end(), Some(Meridiem::Pm))
    } else {
        (text.as_str(), None)
    };

    let (hour_text, minute_text) = match body.split_once(':') {
        Some((hour, minute)) => (hour, Some(minute)),
        None => (body, None),
    };

    // A bare number is only a time when an am/pm suffix says so.
    if minute_text.is_none() && meridiem.is_none() {
        return None;
    }

    let hour = parse_component(hour_text, 1)?;
    let minute = match minute_text {
        Some(minute) => parse_component(minute, 2)?,
        None => 0,
    };

    let hour = match meridiem {
        Some(Meridiem::Pm) if hour < 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Parses a digits-only component of `min_len..=2` characters.
fn parse_component(text: &str, min_len: usize) -> Option<u32> {
    if text.len() < min_len || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
