use thiserror::Error;

/// Service-wide error taxonomy.
///
/// The upstream prediction path used to collapse every failure into one
/// generic internal error; these kinds are kept distinct so the webserver
/// can map them to different status codes and startup can tell a fatal
/// missing model from a per-request computation failure.
#[derive(Error, Debug)]
pub enum RiskError {
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Feature schema mismatch: {0}")]
    FeatureMismatch(String),

    #[error("Computation failed: {0}")]
    Computation(String),

    #[error("Model artifact error: {0}")]
    Artifact(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RiskError {
    /// True for errors that mean the process cannot serve at all, as
    /// opposed to a single request failing.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RiskError::ModelUnavailable(_) | RiskError::Artifact(_) | RiskError::Io(_)
        )
    }
}
