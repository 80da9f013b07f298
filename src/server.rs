//! Server initialization and routing.
//!
//! Router layout:
//! - HTML pages: `/`, `/article/{id}`, plus the not-found fallback
//! - JSON API: `/api/articles` (list, create), `/api/articles/{id}`
//! - Operational: `/health`
//!
//! Middleware stack: request-id injection, request logging, inbound
//! timeout, compression, CORS (API consumers), HTTP tracing.

use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::{articles, health, pages};
use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(pages::home))
        .route("/article/{id}", get(pages::article))
        .route(
            "/api/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/api/articles/{id}", get(articles::get_article))
        .route("/health", get(health::health_check))
        .fallback(pages::not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout(),
        ))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(request_id))
        .layer(from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the content server and block until shutdown.
///
/// Handles graceful shutdown on SIGTERM (Unix) and Ctrl+C.
pub async fn start_server(config: AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = config.socket_addr()?;
    crate::analytics::init(config.analytics_enabled);
    let state = AppState::new(config)?;

    tracing::info!(%addr, "starting deepam server");

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
