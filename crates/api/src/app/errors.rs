use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use bankledger_core::LedgerError;

use crate::app::dto;

pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Map a ledger outcome to its fixed status + message.
///
/// Store failures get a generic body; the detail only goes to the log.
pub fn ledger_error_to_response(err: LedgerError) -> axum::response::Response {
    let status = match &err {
        LedgerError::AccountAlreadyExists => StatusCode::BAD_REQUEST,
        LedgerError::AccountNotFound => StatusCode::NOT_FOUND,
        LedgerError::InsufficientBalance => StatusCode::BAD_REQUEST,
        LedgerError::InvalidAmount => StatusCode::BAD_REQUEST,
        LedgerError::AmountOverflow => StatusCode::BAD_REQUEST,
        LedgerError::InvalidCustomerId => StatusCode::BAD_REQUEST,
        LedgerError::Store(detail) => {
            tracing::error!(%detail, "unexpected ledger failure");
            return internal_error();
        }
    };
    dto::message(status, err.to_string())
}

pub fn internal_error() -> axum::response::Response {
    dto::message(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}

/// Malformed or mistyped JSON bodies keep axum's status (400 / 415 / 422) but
/// use the common `message` body.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    tracing::warn!(status = %rejection.status(), "rejected request body: {}", rejection.body_text());
    dto::message(rejection.status(), rejection.body_text())
}
