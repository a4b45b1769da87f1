//! HTTP surface: a single GitHub webhook endpoint.

use axum::{Router, body::Bytes, extract::{DefaultBodyLimit, State}, http::StatusCode, routing::post};
use tokio::net::TcpListener;

use crate::{interaction::webhook::handle_webhook, prelude::*, runtime::Runtime};

/// Path GitHub delivers pull request events to.
pub const WEBHOOK_PATH: &str = "/github-webhook";

/// Largest delivery accepted; GitHub caps webhook payloads at 25 MB.
pub const WEBHOOK_BODY_LIMIT: usize = 25 * 1024 * 1024;

/// Builds the router for the webhook server.
pub fn router(runtime: Runtime) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(github_webhook))
        .layer(DefaultBodyLimit::max(WEBHOOK_BODY_LIMIT))
        .with_state(runtime)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(runtime: Runtime) -> Void {
    let listener = TcpListener::bind(&runtime.config.listen_addr).await?;

    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, router(runtime)).with_graceful_shutdown(shutdown_signal()).await?;

    info!("Server stopped.");

    Ok(())
}

/// Every delivery is acknowledged; failures are only logged.
async fn github_webhook(State(runtime): State<Runtime>, body: Bytes) -> StatusCode {
    handle_webhook(&body, &runtime).await;

    StatusCode::OK
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }

    info!("Shutting down ...");
}
