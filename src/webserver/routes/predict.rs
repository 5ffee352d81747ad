use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;

use crate::{
    arguments::is_debug_webserver_enabled,
    errors::RiskError,
    logger::{self, log, LogTag},
    webserver::{models::requests::LoanApplicationRequest, state::AppState, utils::error_response},
};

/// Create prediction routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/predict", post(predict_handler))
}

/// POST /predict
///
/// Validates the application at the boundary, then runs the prediction
/// pipeline. Validation failures never invoke the core.
async fn predict_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoanApplicationRequest>,
) -> Response {
    if let Err(problems) = request.validate() {
        if is_debug_webserver_enabled() {
            log(
                LogTag::Webserver,
                "VALIDATION_REJECTED",
                &format!("Rejected /predict request: {}", problems.join("; ")),
            );
        }
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "VALIDATION_FAILED",
            "Request failed range validation",
            Some(&problems.join("; ")),
        );
    }

    let application = request.into_application();

    match state.engine.predict(&application) {
        Ok(result) => {
            if is_debug_webserver_enabled() {
                log(
                    LogTag::Webserver,
                    "PREDICTION_SERVED",
                    &format!(
                        "p={:.4} band={} explanations={}",
                        result.probability,
                        result.risk_band.as_str(),
                        result.explanations.len()
                    ),
                );
            }
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => {
            logger::error(LogTag::Webserver, &format!("Prediction failed: {}", e));

            let (status, code) = match &e {
                RiskError::ModelUnavailable(_) => {
                    (StatusCode::SERVICE_UNAVAILABLE, "MODEL_UNAVAILABLE")
                }
                RiskError::FeatureMismatch(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "FEATURE_MISMATCH")
                }
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "COMPUTATION_FAILED"),
            };
            error_response(status, code, "Prediction error", Some(&e.to_string()))
        }
    }
}
