use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use bankledger_core::Amount;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub customer_id: String,
}

/// Body shared by `/fund` and `/withdraw`.
///
/// `amount` accepts a JSON number or a numeric string.
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    pub customer_id: String,
    pub amount: Amount,
}

pub type FundAccountRequest = AmountRequest;
pub type WithdrawRequest = AmountRequest;

// -------------------------
// Response DTOs
// -------------------------

/// Every response body, success or failure: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn message(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(MessageResponse {
            message: message.into(),
        }),
    )
        .into_response()
}
