//! HTTP server wiring
//!
//! Built on axum; see `handlers` for the endpoints.

use crate::config::ServerConfig;
use crate::server::handlers::{convert_text, index, upload, AppState};
use crate::server::types::ServerError;
use axum::{
    extract::{ConnectInfo, DefaultBodyLimit, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::timeout::TimeoutLayer;

/// Logs one line per request: method, URI, peer, status and latency.
async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %uri,
        %remote,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload))
        .route("/api/convert", post(convert_text))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// Starts the upload service and runs until Ctrl-C.
pub async fn start_api_server(config: ServerConfig) -> Result<(), ServerError> {
    match serde_json::to_string(&config) {
        Ok(json) => tracing::info!(config = %json, "starting Morse API"),
        Err(e) => tracing::warn!("could not render config: {e}"),
    }

    let state = Arc::new(AppState::from_config(&config)?);
    tracing::info!(dir = %state.store.dir().display(), "transcripts directory ready");

    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("Morse API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
