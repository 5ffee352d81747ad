/// API response type definitions
///
/// The prediction body itself is `engine::PredictionResult`, which already
/// serializes in the wire shape; only the service/health envelopes live
/// here.
use chrono::{DateTime, Utc};
use serde::Serialize;

/// GET / response
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
    pub service: String,
    pub version: String,
    pub status: String,
}

/// GET /health response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_version: String,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
}
