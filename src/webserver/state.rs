/// Shared application state for the webserver
///
/// The prediction engine is built once in main and handed to every route
/// handler through this context object. Nothing here is mutated after
/// startup, so handlers can run concurrently without coordination.
use crate::engine::PredictionEngine;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Immutable prediction context (model, vocabulary, explainer)
    pub engine: Arc<PredictionEngine>,

    /// Server startup time
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(engine: Arc<PredictionEngine>) -> Self {
        Self {
            engine,
            startup_time: chrono::Utc::now(),
        }
    }

    /// Server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.startup_time).num_seconds().max(0) as u64
    }
}
