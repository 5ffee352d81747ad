//! Risk banding
//!
//! Deterministic thresholding of the default probability into three
//! ordered buckets. Boundary values belong to the band whose inclusive
//! lower bound they hit: 0.30 is MEDIUM, 0.60 is HIGH.

use serde::{Deserialize, Serialize};

/// Probabilities below this are LOW
pub const MEDIUM_THRESHOLD: f64 = 0.30;
/// Probabilities at or above this are HIGH
pub const HIGH_THRESHOLD: f64 = 0.60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Band for a default probability. No hysteresis, no state.
    pub fn from_probability(probability: f64) -> Self {
        if probability < MEDIUM_THRESHOLD {
            RiskBand::Low
        } else if probability < HIGH_THRESHOLD {
            RiskBand::Medium
        } else {
            RiskBand::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "LOW",
            RiskBand::Medium => "MEDIUM",
            RiskBand::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
