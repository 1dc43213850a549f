//! HTTP request handlers for the invoice engine API.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_invoice;
use crate::models::ShiftLedger;

use super::request::InvoiceRequest;
use super::response::{ApiError, DefaultsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Handler for GET /rates.
///
/// Returns the configured rate and adjustment defaults so the form can
/// pre-fill its fields.
async fn rates_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(DefaultsResponse::from(state.config().config())),
    )
}

/// Handler for POST /calculate.
///
/// Accepts the form's rows plus optional rates and adjustments, and
/// returns the calculated invoice. The calculation is total, so the only
/// failure mode is an undecodable request body.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<InvoiceRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing invoice calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Assemble the ledger in table order.
    let mut ledger = ShiftLedger::new();
    for row in request.shifts {
        ledger.add_record(row.into());
    }

    // Missing rates/adjustments fall back to the loaded configuration.
    let config = state.config();
    let rates = request
        .rates
        .unwrap_or_else(|| config.rate_table().clone());
    let adjustments = request
        .adjustments
        .unwrap_or_default()
        .resolve(config.defaults());

    let result = calculate_invoice(&ledger, &rates, &adjustments);
    info!(
        correlation_id = %correlation_id,
        calculation_id = %result.calculation_id,
        records = result.lines.len(),
        gross_pay = %result.totals.gross_pay,
        bank_payable = %result.totals.bank_payable,
        "Invoice calculation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}
