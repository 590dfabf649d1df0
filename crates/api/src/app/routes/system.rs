use axum::http::StatusCode;

use crate::app::dto;

pub async fn root() -> axum::response::Response {
    dto::message(StatusCode::OK, "Bank API is running")
}

pub async fn health() -> axum::response::Response {
    dto::message(StatusCode::OK, "Bank API is running as expected")
}

pub async fn not_found() -> axum::response::Response {
    dto::message(StatusCode::NOT_FOUND, "Not Found")
}
