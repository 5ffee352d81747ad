use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    arguments::is_debug_webserver_enabled,
    logger::{log, LogTag},
    webserver::{
        models::responses::{HealthResponse, ServiceInfoResponse},
        state::AppState,
    },
};

/// Create status routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
}

/// GET /
async fn service_info(State(state): State<Arc<AppState>>) -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        service: "Loan Risk Prediction Service".to_string(),
        version: state.engine.model().version().to_string(),
        status: "operational".to_string(),
    })
}

/// GET /health
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    if is_debug_webserver_enabled() {
        log(LogTag::Webserver, "DEBUG", "Health check endpoint called");
    }

    Json(HealthResponse {
        status: "healthy".to_string(),
        model_version: state.engine.model().version().to_string(),
        uptime_seconds: state.uptime_seconds(),
        timestamp: Utc::now(),
    })
}
