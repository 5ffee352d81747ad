//! Model artifact persistence
//!
//! One JSON document bundles everything needed to reconstruct the model:
//! the feature name order, the vocabulary classes, the deterministic
//! training configuration and the background vector. The ensemble itself
//! is not serialized; it is refit from the persisted configuration on
//! load, which reproduces the same forest because both the dataset and
//! the forest are seeded.
//!
//! Saves write to a temp file and rename so a crash never leaves a
//! half-written artifact behind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::training::{fit_forest, generate_training_set, TrainingConfig};
use super::{RiskModel, MODEL_VERSION};
use crate::arguments::is_debug_training_enabled;
use crate::errors::RiskError;
use crate::features::{FEATURE_COUNT, FEATURE_NAMES};
use crate::logger::{log, LogTag};

/// Bumped when the artifact layout changes incompatibly
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub model_version: String,
    pub feature_names: Vec<String>,
    pub classes: Vec<String>,
    pub training: TrainingConfig,
    pub background: Vec<f64>,
    pub trained_at: DateTime<Utc>,
}

/// Write the artifact atomically (temp file + rename)
pub fn save_artifact(path: &Path, artifact: &ModelArtifact) -> Result<(), RiskError> {
    let json = serde_json::to_string_pretty(artifact)?;

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, json)?;
    std::fs::rename(&temp_path, path)?;

    if is_debug_training_enabled() {
        log(
            LogTag::Training,
            "ARTIFACT_SAVED",
            &format!("💾 Saved model artifact to {}", path.display()),
        );
    }

    Ok(())
}

/// Read and structurally validate an artifact
pub fn load_artifact(path: &Path) -> Result<ModelArtifact, RiskError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| RiskError::Artifact(format!("failed to read {}: {}", path.display(), e)))?;

    let artifact: ModelArtifact = serde_json::from_str(&content)
        .map_err(|e| RiskError::Artifact(format!("failed to parse {}: {}", path.display(), e)))?;

    if artifact.format_version > ARTIFACT_FORMAT_VERSION {
        return Err(RiskError::Artifact(format!(
            "unsupported artifact format version {}",
            artifact.format_version
        )));
    }

    Ok(artifact)
}

/// Rebuild the model from a loaded artifact.
///
/// The persisted feature order must match the compiled schema exactly; a
/// model trained against a different order would silently mis-assign
/// every feature, so drift fails the load instead.
pub fn rebuild_from_artifact(artifact: &ModelArtifact) -> Result<RiskModel, RiskError> {
    let expected: Vec<String> = FEATURE_NAMES.iter().map(|n| n.to_string()).collect();
    if artifact.feature_names != expected {
        return Err(RiskError::FeatureMismatch(format!(
            "artifact feature order {:?} does not match schema {:?}",
            artifact.feature_names, FEATURE_NAMES
        )));
    }

    if artifact.background.len() != FEATURE_COUNT {
        return Err(RiskError::FeatureMismatch(format!(
            "artifact background has {} entries, schema has {}",
            artifact.background.len(),
            FEATURE_COUNT
        )));
    }

    let set = generate_training_set(&artifact.training)?;

    if set.vocabulary.classes() != artifact.classes.as_slice() {
        return Err(RiskError::Artifact(format!(
            "artifact classes {:?} do not match regenerated vocabulary {:?}",
            artifact.classes,
            set.vocabulary.classes()
        )));
    }

    let forest = fit_forest(&set.rows, &set.targets)?;

    if is_debug_training_enabled() {
        log(
            LogTag::Training,
            "ARTIFACT_REBUILT",
            &format!(
                "🔄 Rebuilt model from artifact (trained_at {})",
                artifact.trained_at.format("%Y-%m-%d %H:%M:%S")
            ),
        );
    }

    Ok(RiskModel::new(
        forest,
        set.vocabulary,
        artifact.background.clone(),
        artifact.trained_at,
    ))
}

/// Train a fresh model with the default configuration and persist it
pub fn train_and_save(path: &Path) -> Result<RiskModel, RiskError> {
    let config = TrainingConfig::default();
    let set = generate_training_set(&config)?;
    let forest = fit_forest(&set.rows, &set.targets)?;
    let trained_at = Utc::now();

    let artifact = ModelArtifact {
        format_version: ARTIFACT_FORMAT_VERSION,
        model_version: MODEL_VERSION.to_string(),
        feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
        classes: set.vocabulary.classes().to_vec(),
        training: config,
        background: set.background.clone(),
        trained_at,
    };
    save_artifact(path, &artifact)?;

    Ok(RiskModel::new(
        forest,
        set.vocabulary,
        set.background,
        trained_at,
    ))
}

/// Startup entry point: load the artifact if present, otherwise train and
/// save a fresh one. Any failure here means the process cannot serve.
pub fn load_or_train(path: &Path) -> Result<RiskModel, RiskError> {
    if path.exists() {
        let artifact = load_artifact(path)?;
        let model = rebuild_from_artifact(&artifact)?;
        log(
            LogTag::Model,
            "MODEL_READY",
            &format!(
                "📂 Loaded model artifact from {} ({})",
                path.display(),
                model.version()
            ),
        );
        Ok(model)
    } else {
        log(
            LogTag::Model,
            "MODEL_MISSING",
            &format!(
                "📁 No artifact at {} - training a fresh model",
                path.display()
            ),
        );
        let model = train_and_save(path)
            .map_err(|e| RiskError::ModelUnavailable(format!("initial training failed: {}", e)))?;
        Ok(model)
    }
}
