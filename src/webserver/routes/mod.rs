use crate::webserver::state::AppState;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod predict;
pub mod status;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Browser clients are unrestricted, matching the original deployment
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(status::routes())
        .merge(predict::routes())
        .layer(cors)
        .with_state(state)
}
