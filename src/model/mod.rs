//! Risk model wrapper
//!
//! Owns the fitted forest, the category vocabulary and the background
//! feature vector. Constructed once at startup and read-only afterwards;
//! every method takes `&self`, so concurrent requests share it freely.

use chrono::{DateTime, Utc};
use smartcore::api::Predictor;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::errors::RiskError;
use crate::features::FEATURE_COUNT;
use crate::vocab::CategoryVocabulary;

pub mod artifact;
pub mod training;

/// Static model version tag reported in every prediction
pub const MODEL_VERSION: &str = "v1.0";

pub(crate) type Forest = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Batch probability source.
///
/// The explainer (and tests with fakes) depend on this seam instead of the
/// concrete ensemble; anything that maps feature rows to [0,1] outputs can
/// be explained.
pub trait ProbabilityModel {
    fn predict_rows(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, RiskError>;
}

pub struct RiskModel {
    forest: Forest,
    vocabulary: CategoryVocabulary,
    background: Vec<f64>,
    trained_at: DateTime<Utc>,
}

impl RiskModel {
    pub(crate) fn new(
        forest: Forest,
        vocabulary: CategoryVocabulary,
        background: Vec<f64>,
        trained_at: DateTime<Utc>,
    ) -> Self {
        Self {
            forest,
            vocabulary,
            background,
            trained_at,
        }
    }

    pub fn vocabulary(&self) -> &CategoryVocabulary {
        &self.vocabulary
    }

    /// Training-set column means; the explainer's reference point
    pub fn background(&self) -> &[f64] {
        &self.background
    }

    pub fn version(&self) -> &'static str {
        MODEL_VERSION
    }

    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }

    /// Probability of the default class for one feature vector
    pub fn predict_probability(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, RiskError> {
        let outputs = self.predict_rows(&[features.to_vec()])?;
        Ok(outputs[0])
    }
}

impl ProbabilityModel for RiskModel {
    fn predict_rows(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, RiskError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        for row in rows {
            if row.len() != FEATURE_COUNT {
                return Err(RiskError::FeatureMismatch(format!(
                    "model expects {} features, got {}",
                    FEATURE_COUNT,
                    row.len()
                )));
            }
        }

        // Non-finite inputs would poison the whole batch
        let sanitized: Vec<Vec<f64>> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| if v.is_finite() { *v } else { 0.0 })
                    .collect()
            })
            .collect();

        let matrix = DenseMatrix::from_2d_vec(&sanitized)
            .map_err(|e| RiskError::Computation(format!("failed to build feature matrix: {}", e)))?;

        let predictions = self
            .forest
            .predict(&matrix)
            .map_err(|e| RiskError::Computation(format!("prediction failed: {:?}", e)))?;

        // The forest is fit on 0/1 targets; its mean can still drift a hair
        // outside the unit interval, so clamp before anything downstream.
        Ok(predictions.into_iter().map(|p| p.clamp(0.0, 1.0)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::training::{generate_training_set, TrainingConfig};
    use super::*;

    fn small_model() -> RiskModel {
        let config = TrainingConfig {
            seed: 42,
            samples: 200,
        };
        let set = generate_training_set(&config).expect("dataset");
        let forest = training::fit_forest(&set.rows, &set.targets).expect("fit");
        RiskModel::new(forest, set.vocabulary, set.background, Utc::now())
    }

    #[test]
    fn probabilities_stay_in_unit_interval() {
        let model = small_model();
        let features = [
            100_000.0, 4_000_000.0, 24.0, 1.0, 40_000.0, 320.0, 25.0, 4.0, 480.0, 40.0,
        ];
        let p = model.predict_probability(&features).expect("predict");
        assert!((0.0..=1.0).contains(&p), "probability {} out of range", p);
    }

    #[test]
    fn wrong_width_vector_is_a_feature_mismatch() {
        let model = small_model();
        let result = model.predict_rows(&[vec![1.0, 2.0, 3.0]]);
        assert!(matches!(result, Err(RiskError::FeatureMismatch(_))));
    }

    #[test]
    fn empty_batch_is_empty_output() {
        let model = small_model();
        assert!(model.predict_rows(&[]).expect("predict").is_empty());
    }
}
