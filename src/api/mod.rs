//! HTTP API module for the invoice engine.
//!
//! This module provides the REST endpoint through which the form front-end
//! submits its rows and receives a finished calculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AdjustmentsRequest, InvoiceRequest, ShiftRowRequest};
pub use response::{ApiError, DefaultsResponse};
pub use state::AppState;
