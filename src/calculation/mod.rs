//! Calculation logic for the invoice engine.
//!
//! This module contains the business rules: free-text time-of-day parsing,
//! rate-category classification from a record's day label and start time,
//! and the aggregate invoice computation producing gross pay, GST,
//! superannuation and the bank payable amount.

mod category;
mod invoice;
mod time_of_day;

pub use category::{AFTERNOON_START_HOUR, infer_category, resolve_category};
pub use invoice::{calculate_invoice, gst_rate};
pub use time_of_day::parse_time_of_day;
