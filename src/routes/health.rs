use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::time::SystemTime;

use crate::content::bundle;
use crate::state::AppState;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

/// Health check endpoint (liveness)
///
/// Also reports which content tiers this deployment carries; the bundle is
/// always present.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(json!({
        "status": "healthy",
        "service": "deepam",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime,
        "sources": {
            "remote_api": state.config.rest_configured(),
            "content_table": state.config.table_configured(),
            "bundled_articles": bundle::article_set().articles.len(),
        },
        "analytics_enabled": crate::analytics::is_enabled(),
    }))
}
