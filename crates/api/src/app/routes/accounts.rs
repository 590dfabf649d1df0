use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use bankledger_core::display_amount;

use crate::app::routes::common::{parse_body, parse_customer_id};
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/create-account", post(create_account))
        .route("/fund", post(fund_account))
        .route("/withdraw", post(withdraw_from_account))
}

/// Open an account with a zero balance.
pub async fn create_account(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let customer_id = match parse_customer_id(body.customer_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.ledger().create(&customer_id) {
        Ok(account) => dto::message(
            StatusCode::OK,
            format!(
                "Customer {} created with {} Balance",
                customer_id,
                display_amount(account.balance())
            ),
        ),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn fund_account(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::FundAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let customer_id = match parse_customer_id(body.customer_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.ledger().fund(&customer_id, body.amount) {
        Ok(balance) => dto::message(
            StatusCode::OK,
            format!(
                "Funded customer account with id {} with amount {} and balance is {}",
                customer_id,
                display_amount(body.amount),
                display_amount(balance)
            ),
        ),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn withdraw_from_account(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::WithdrawRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let customer_id = match parse_customer_id(body.customer_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.ledger().withdraw(&customer_id, body.amount) {
        Ok(balance) => dto::message(
            StatusCode::OK,
            format!(
                "Amount of Rs. {} is withdrawn for customer {} final balance is {}",
                display_amount(body.amount),
                customer_id,
                display_amount(balance)
            ),
        ),
        Err(e) => errors::ledger_error_to_response(e),
    }
}
