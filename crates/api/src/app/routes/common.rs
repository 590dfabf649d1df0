use axum::{extract::rejection::JsonRejection, Json};

use bankledger_core::CustomerId;

use crate::app::errors;

/// Unwrap a JSON body, turning extractor rejections into `message` responses.
pub fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, axum::response::Response> {
    body.map(|Json(v)| v)
        .map_err(errors::json_rejection_to_response)
}

/// Validate the raw `customer_id` field.
pub fn parse_customer_id(raw: String) -> Result<CustomerId, axum::response::Response> {
    CustomerId::new(raw).map_err(|e| {
        tracing::warn!("rejected request: {e}");
        errors::ledger_error_to_response(e)
    })
}
