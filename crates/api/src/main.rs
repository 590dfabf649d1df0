use std::sync::Arc;

use anyhow::Context;

use bankledger_api::{app, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    let _log_guard = bankledger_observability::init(&config.log)?;

    let services = Arc::new(app::services::AppServices::new(config.amount_policy));
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    let local_addr = listener.local_addr()?;
    tracing::info!(
        amount_policy = config.amount_policy.as_str(),
        "listening on {local_addr}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Ctrl+C received, shutting down");
}
