use axum::{routing::get, Router};

pub mod accounts;
pub mod common;
pub mod system;

/// API versions served. Each prefix mounts the same account routes.
pub const API_PREFIXES: [&str; 2] = ["/api/v1", "/api/v2"];

/// Router for every endpoint.
pub fn router() -> Router {
    let mut router = Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health));

    for prefix in API_PREFIXES {
        router = router.nest(prefix, accounts::router());
    }

    router.fallback(system::not_found)
}
