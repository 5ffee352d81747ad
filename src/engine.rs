//! Prediction orchestrator
//!
//! One request-scoped pipeline: encode the category, derive the canonical
//! feature vector, predict, attribute, band, rank the explanation and
//! assemble the result. The engine is an explicit immutable context built
//! once at startup and shared read-only across concurrent requests; there
//! is no global model state to reach for.

use serde::Serialize;

use crate::arguments::is_debug_model_enabled;
use crate::banding::RiskBand;
use crate::errors::RiskError;
use crate::explain::ShapleyExplainer;
use crate::features::{derive_features, LoanApplication, FEATURE_NAMES};
use crate::logger::{log, LogTag};
use crate::model::RiskModel;

/// Direction of a feature's influence, from the applicant's point of view.
///
/// Sign convention: a negative contribution pushes the default probability
/// *down* and is labeled `positive` (favourable); zero or positive
/// contributions are labeled `negative`. This is the labeling the service
/// has always shown to end users and is pinned by a test; flipping it
/// would invert every "positive impact" badge downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
}

impl Impact {
    pub fn from_contribution(contribution: f64) -> Self {
        if contribution < 0.0 {
            Impact::Positive
        } else {
            Impact::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Positive => "positive",
            Impact::Negative => "negative",
        }
    }
}

/// One entry of the ranked explanation
#[derive(Debug, Clone, Serialize)]
pub struct FeatureExplanation {
    pub feature: &'static str,
    pub impact: Impact,
    pub value: f64,
    pub contribution: f64,
}

/// Complete prediction outcome, serialized verbatim onto the wire
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    pub probability: f64,
    pub risk_band: RiskBand,
    pub explanations: Vec<FeatureExplanation>,
    pub model_version: String,
}

/// Immutable prediction context: model plus its explainer
pub struct PredictionEngine {
    model: RiskModel,
    explainer: ShapleyExplainer,
}

impl PredictionEngine {
    pub fn new(model: RiskModel) -> Result<Self, RiskError> {
        let explainer = ShapleyExplainer::new(model.background().to_vec())?;
        Ok(Self { model, explainer })
    }

    pub fn model(&self) -> &RiskModel {
        &self.model
    }

    /// Run the full pipeline for one validated application.
    ///
    /// The boundary has already range-checked the numeric fields; the only
    /// open input here is the employment type, which the vocabulary
    /// resolves with its fallback.
    pub fn predict(&self, application: &LoanApplication) -> Result<PredictionResult, RiskError> {
        let employment_code = self.model.vocabulary().encode(&application.employment_type);
        let features = derive_features(application, employment_code);

        let probability = self.model.predict_probability(&features)?;
        let contributions = self.explainer.explain(&self.model, &features)?;
        if contributions.len() != FEATURE_NAMES.len() {
            return Err(RiskError::FeatureMismatch(format!(
                "expected {} contributions, got {}",
                FEATURE_NAMES.len(),
                contributions.len()
            )));
        }

        let risk_band = RiskBand::from_probability(probability);

        let mut explanations: Vec<FeatureExplanation> = FEATURE_NAMES
            .iter()
            .zip(features.iter().zip(contributions.iter()))
            .map(|(name, (value, contribution))| FeatureExplanation {
                feature: *name,
                impact: Impact::from_contribution(*contribution),
                value: *value,
                contribution: *contribution,
            })
            .collect();

        // Most impactful first; the sort is stable, so ties keep schema order
        explanations.sort_by(|a, b| {
            b.contribution
                .abs()
                .partial_cmp(&a.contribution.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if is_debug_model_enabled() {
            log(
                LogTag::Model,
                "PREDICTION",
                &format!(
                    "🔮 p={:.4} band={} top_feature={}",
                    probability,
                    risk_band.as_str(),
                    explanations[0].feature
                ),
            );
        }

        Ok(PredictionResult {
            probability,
            risk_band,
            explanations,
            model_version: self.model.version().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::training::{fit_forest, generate_training_set, TrainingConfig};
    use crate::model::{ProbabilityModel, MODEL_VERSION};

    fn test_engine() -> PredictionEngine {
        let config = TrainingConfig {
            seed: 42,
            samples: 200,
        };
        let set = generate_training_set(&config).expect("dataset");
        let forest = fit_forest(&set.rows, &set.targets).expect("fit");
        let model = RiskModel::new(forest, set.vocabulary, set.background, chrono::Utc::now());
        PredictionEngine::new(model).expect("engine")
    }

    fn reference_application() -> LoanApplication {
        LoanApplication {
            income: 500_000.0,
            loan_amount: 2_000_000.0,
            tenure: 60,
            employment_type: "SALARIED".to_string(),
            existing_emis: 15_000.0,
            credit_score: 750,
            age: 35,
            dependents: 2,
        }
    }

    #[test]
    fn reference_scenario_produces_a_complete_result() {
        let engine = test_engine();
        let result = engine.predict(&reference_application()).expect("predict");

        assert!((0.0..=1.0).contains(&result.probability));
        assert_eq!(result.risk_band, RiskBand::from_probability(result.probability));
        assert_eq!(result.explanations.len(), FEATURE_NAMES.len());
        assert_eq!(result.model_version, MODEL_VERSION);
        assert_eq!(result.model_version, "v1.0");
    }

    #[test]
    fn explanations_are_ranked_by_descending_magnitude() {
        let engine = test_engine();
        let result = engine.predict(&reference_application()).expect("predict");

        for pair in result.explanations.windows(2) {
            assert!(
                pair[0].contribution.abs() >= pair[1].contribution.abs(),
                "{} ({}) ranked above {} ({})",
                pair[0].feature,
                pair[0].contribution,
                pair[1].feature,
                pair[1].contribution
            );
        }
    }

    #[test]
    fn every_schema_feature_appears_exactly_once() {
        let engine = test_engine();
        let result = engine.predict(&reference_application()).expect("predict");

        let mut seen: Vec<&str> = result.explanations.iter().map(|e| e.feature).collect();
        seen.sort();
        let mut expected: Vec<&str> = FEATURE_NAMES.to_vec();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn contributions_plus_baseline_match_the_model_output() {
        let engine = test_engine();
        let application = reference_application();

        let code = engine.model().vocabulary().encode(&application.employment_type);
        let features = derive_features(&application, code);
        let direct = engine
            .model()
            .predict_probability(&features)
            .expect("predict");

        let result = engine.predict(&application).expect("predict");
        let baseline = engine
            .explainer
            .baseline(engine.model() as &dyn ProbabilityModel)
            .expect("baseline");
        let total: f64 = result.explanations.iter().map(|e| e.contribution).sum();

        assert!(
            (baseline + total - direct).abs() < 1e-6,
            "additivity violated: baseline {} + contributions {} != output {}",
            baseline,
            total,
            direct
        );
    }

    #[test]
    fn impact_label_matches_sign_convention() {
        let engine = test_engine();
        let result = engine.predict(&reference_application()).expect("predict");

        for explanation in &result.explanations {
            if explanation.contribution < 0.0 {
                assert_eq!(explanation.impact, Impact::Positive);
            } else {
                assert_eq!(explanation.impact, Impact::Negative);
            }
        }
    }

    #[test]
    fn identical_applications_get_identical_results() {
        let engine = test_engine();
        let application = reference_application();

        let first = engine.predict(&application).expect("predict");
        let second = engine.predict(&application).expect("predict");

        assert_eq!(first.probability, second.probability);
        assert_eq!(first.risk_band, second.risk_band);
        assert_eq!(first.model_version, second.model_version);
        for (a, b) in first.explanations.iter().zip(second.explanations.iter()) {
            assert_eq!(a.feature, b.feature);
            assert_eq!(a.contribution, b.contribution);
            assert_eq!(a.value, b.value);
            assert_eq!(a.impact, b.impact);
        }
    }

    #[test]
    fn unseen_employment_type_predicts_like_salaried() {
        let engine = test_engine();
        let mut application = reference_application();
        let salaried = engine.predict(&application).expect("predict");

        application.employment_type = "GIG_WORKER".to_string();
        let unseen = engine.predict(&application).expect("predict");

        assert_eq!(salaried.probability, unseen.probability);
    }

    #[test]
    fn result_serializes_with_the_wire_field_names() {
        let engine = test_engine();
        let result = engine.predict(&reference_application()).expect("predict");
        let json = serde_json::to_value(&result).expect("serialize");

        assert!(json.get("probability").is_some());
        assert!(json.get("risk_band").is_some());
        assert!(json.get("model_version").is_some());
        let explanations = json
            .get("explanations")
            .and_then(|e| e.as_array())
            .expect("explanations array");
        let entry = &explanations[0];
        assert!(entry.get("feature").is_some());
        assert!(entry.get("impact").is_some());
        assert!(entry.get("value").is_some());
        assert!(entry.get("contribution").is_some());
        let impact = entry.get("impact").and_then(|i| i.as_str()).unwrap();
        assert!(impact == "positive" || impact == "negative");
    }
}
