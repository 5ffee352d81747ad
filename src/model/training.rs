//! Synthetic training stand-in
//!
//! Generates a deterministic synthetic applicant population and fits the
//! forest on it. This is a placeholder for a real training pipeline: the
//! value here is that the dataset is reproducible from (seed, samples)
//! alone, which is what lets the artifact loader rebuild the exact same
//! model without serializing the ensemble.
//!
//! Rows are derived through `features::derive_features`, the same function
//! the inference path uses. Bypassing it here would reintroduce the silent
//! train/serve drift this schema exists to prevent.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use smartcore::api::SupervisedEstimator;
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::Forest;
use crate::arguments::is_debug_training_enabled;
use crate::errors::RiskError;
use crate::features::{derive_features, LoanApplication, FEATURE_COUNT};
use crate::logger::{log, LogTag};
use crate::vocab::CategoryVocabulary;

/// Seed for both the synthetic population and the forest itself
pub const TRAINING_SEED: u64 = 42;
/// Default synthetic population size
pub const TRAINING_SAMPLES: usize = 1000;

/// Employment types present in the synthetic population
pub const EMPLOYMENT_TYPES: [&str; 3] = ["SALARIED", "SELF_EMPLOYED", "BUSINESS"];

/// Deterministic training configuration, persisted in the artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub seed: u64,
    pub samples: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            seed: TRAINING_SEED,
            samples: TRAINING_SAMPLES,
        }
    }
}

/// Generated dataset plus the fitted vocabulary and background vector
pub struct TrainingSet {
    pub rows: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
    pub vocabulary: CategoryVocabulary,
    pub background: Vec<f64>,
}

/// Generate the synthetic population.
///
/// Ranges mirror typical loan applications. The default label is a noisy
/// mix of the three strongest risk drivers: low credit score, high
/// debt-to-income, high loan-to-income.
pub fn generate_training_set(config: &TrainingConfig) -> Result<TrainingSet, RiskError> {
    if config.samples == 0 {
        return Err(RiskError::Computation(
            "training sample count must be positive".to_string(),
        ));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let vocabulary = CategoryVocabulary::fit(EMPLOYMENT_TYPES.iter().map(|s| s.to_string()))?;

    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(config.samples);
    let mut targets: Vec<f64> = Vec::with_capacity(config.samples);

    for _ in 0..config.samples {
        let application = LoanApplication {
            income: rng.gen_range(15_000.0..200_000.0),
            loan_amount: rng.gen_range(50_000.0..5_000_000.0),
            tenure: rng.gen_range(12u32..120),
            employment_type: EMPLOYMENT_TYPES[rng.gen_range(0..EMPLOYMENT_TYPES.len())]
                .to_string(),
            existing_emis: rng.gen_range(0.0..50_000.0),
            credit_score: rng.gen_range(300u32..850),
            age: rng.gen_range(21u32..70),
            dependents: rng.gen_range(0u32..5),
        };

        let code = vocabulary.encode(&application.employment_type);
        let row = derive_features(&application, code);

        let credit_component =
            0.3 * (1.0 - (application.credit_score as f64 - 300.0) / 550.0);
        let dti_component = 0.3 * (row[8] / 100.0).clamp(0.0, 1.0);
        let lti_component = 0.2 * (row[9] / 5.0).clamp(0.0, 1.0);
        let noise = 0.2 * rng.gen::<f64>();
        let default_score = credit_component + dti_component + lti_component + noise;

        targets.push(if default_score > 0.5 { 1.0 } else { 0.0 });
        rows.push(row.to_vec());
    }

    let background = column_means(&rows);

    if is_debug_training_enabled() {
        let positives = targets.iter().filter(|t| **t > 0.5).count();
        log(
            LogTag::Training,
            "DATASET_READY",
            &format!(
                "📊 Generated {} samples (seed {}), {} defaults",
                rows.len(),
                config.seed,
                positives
            ),
        );
    }

    Ok(TrainingSet {
        rows,
        targets,
        vocabulary,
        background,
    })
}

/// Fit the forest on prepared rows. Hyperparameters are fixed; tuning them
/// is out of scope for this stand-in.
pub fn fit_forest(rows: &[Vec<f64>], targets: &[f64]) -> Result<Forest, RiskError> {
    if rows.is_empty() {
        return Err(RiskError::Computation(
            "no rows available for training".to_string(),
        ));
    }

    let data: Vec<Vec<f64>> = rows.to_vec();
    let features = DenseMatrix::from_2d_vec(&data)
        .map_err(|e| RiskError::Computation(format!("failed to create feature matrix: {}", e)))?;
    let targets: Vec<f64> = targets.to_vec();

    let parameters = RandomForestRegressorParameters {
        n_trees: 100,
        max_depth: Some(10), // Limit depth to prevent overfitting
        min_samples_leaf: 3,
        min_samples_split: 5,
        m: Some(3), // sqrt of the feature count
        keep_samples: false,
        seed: TRAINING_SEED,
    };

    let forest = RandomForestRegressor::fit(&features, &targets, parameters)
        .map_err(|e| RiskError::Computation(format!("failed to train model: {:?}", e)))?;

    log(
        LogTag::Training,
        "TRAINING_SUCCESS",
        &format!(
            "🎓 Trained random forest: {} records, {} features, 100 trees",
            rows.len(),
            FEATURE_COUNT
        ),
    );

    Ok(forest)
}

fn column_means(rows: &[Vec<f64>]) -> Vec<f64> {
    let mut means = vec![0.0; FEATURE_COUNT];
    for row in rows {
        for (i, value) in row.iter().enumerate() {
            means[i] += value;
        }
    }
    let count = rows.len().max(1) as f64;
    for mean in &mut means {
        *mean /= count;
    }
    means
}
