//! Additive local attribution
//!
//! Computes exact Shapley values for one prediction over a
//! single-background value function: a coalition of features is evaluated
//! by predicting on a synthetic row that takes the candidate's value for
//! features inside the coalition and the background value elsewhere. With
//! the canonical 10-feature schema that is 2^10 rows, evaluated in one
//! batched prediction, followed by the factorial-weighted marginal sums.
//!
//! Two properties carry the whole explanation contract and are pinned by
//! tests:
//! - the attribution is local (specific to the explained row), and
//! - it is additive: the contributions plus the baseline reproduce the
//!   model output for the explained row to float precision.

use crate::arguments::is_debug_explain_enabled;
use crate::errors::RiskError;
use crate::logger::{log, LogTag};
use crate::model::ProbabilityModel;

/// Subset enumeration is 2^n rows; wider schemas need a different method
const MAX_FEATURES: usize = 16;

pub struct ShapleyExplainer {
    background: Vec<f64>,
    /// Shapley kernel weight per coalition size, fixed for this width
    weights: Vec<f64>,
}

impl ShapleyExplainer {
    /// Build an explainer around a reference point, usually the
    /// training-set column means.
    pub fn new(background: Vec<f64>) -> Result<Self, RiskError> {
        let n = background.len();
        if n == 0 || n > MAX_FEATURES {
            return Err(RiskError::Computation(format!(
                "unsupported feature width {} for exact attribution",
                n
            )));
        }
        Ok(Self {
            weights: coalition_weights(n),
            background,
        })
    }

    pub fn background(&self) -> &[f64] {
        &self.background
    }

    /// Model output at the background point. Contributions are measured
    /// relative to this value.
    pub fn baseline(&self, model: &dyn ProbabilityModel) -> Result<f64, RiskError> {
        let outputs = model.predict_rows(&[self.background.clone()])?;
        Ok(outputs[0])
    }

    /// One signed contribution per feature for `features`.
    ///
    /// Positive contributions push the model output up (toward default),
    /// negative ones push it down. Summing all contributions and the
    /// baseline reproduces the model output for `features`.
    pub fn explain(
        &self,
        model: &dyn ProbabilityModel,
        features: &[f64],
    ) -> Result<Vec<f64>, RiskError> {
        let n = self.background.len();
        if features.len() != n {
            return Err(RiskError::FeatureMismatch(format!(
                "explainer expects {} features, got {}",
                n,
                features.len()
            )));
        }

        let mask_count = 1usize << n;
        let mut rows: Vec<Vec<f64>> = Vec::with_capacity(mask_count);
        for mask in 0..mask_count {
            let row = (0..n)
                .map(|i| {
                    if mask & (1usize << i) != 0 {
                        features[i]
                    } else {
                        self.background[i]
                    }
                })
                .collect();
            rows.push(row);
        }

        let outputs = model.predict_rows(&rows)?;
        if outputs.len() != mask_count {
            return Err(RiskError::Computation(format!(
                "model returned {} outputs for {} coalition rows",
                outputs.len(),
                mask_count
            )));
        }

        let mut contributions = vec![0.0; n];
        for (i, contribution) in contributions.iter_mut().enumerate() {
            let bit = 1usize << i;
            let mut phi = 0.0;
            for mask in 0..mask_count {
                if mask & bit != 0 {
                    continue;
                }
                let size = (mask as u32).count_ones() as usize;
                phi += self.weights[size] * (outputs[mask | bit] - outputs[mask]);
            }
            *contribution = phi;
        }

        if is_debug_explain_enabled() {
            let total: f64 = contributions.iter().sum();
            log(
                LogTag::Explain,
                "ATTRIBUTION",
                &format!(
                    "🔍 {} coalition rows, contribution sum {:+.6}",
                    mask_count, total
                ),
            );
        }

        Ok(contributions)
    }
}

/// |S|! (n-1-|S|)! / n! for every coalition size |S| in 0..n
fn coalition_weights(n: usize) -> Vec<f64> {
    let factorial = |k: usize| -> f64 { (1..=k).map(|v| v as f64).product() };
    (0..n)
        .map(|s| factorial(s) * factorial(n - 1 - s) / factorial(n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Linear model: output = intercept + Σ slope_i * x_i.
    /// Shapley values of a linear function have the closed form
    /// slope_i * (x_i - background_i), which makes every assertion exact.
    struct LinearModel {
        slopes: Vec<f64>,
        intercept: f64,
    }

    impl ProbabilityModel for LinearModel {
        fn predict_rows(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, RiskError> {
            Ok(rows
                .iter()
                .map(|row| {
                    self.intercept
                        + row
                            .iter()
                            .zip(self.slopes.iter())
                            .map(|(x, s)| x * s)
                            .sum::<f64>()
                })
                .collect())
        }
    }

    #[test]
    fn linear_model_recovers_closed_form_attributions() {
        let model = LinearModel {
            slopes: vec![0.5, -1.0, 2.0],
            intercept: 0.1,
        };
        let explainer = ShapleyExplainer::new(vec![1.0, 2.0, 3.0]).expect("explainer");
        let features = [2.0, 2.0, 0.0];

        let contributions = explainer.explain(&model, &features).expect("explain");

        assert!((contributions[0] - 0.5).abs() < 1e-12); // 0.5 * (2 - 1)
        assert!(contributions[1].abs() < 1e-12); // unchanged feature
        assert!((contributions[2] + 6.0).abs() < 1e-12); // 2.0 * (0 - 3)
    }

    #[test]
    fn contributions_plus_baseline_reproduce_the_output() {
        let model = LinearModel {
            slopes: vec![0.3, 0.7, -0.2, 0.05],
            intercept: 0.4,
        };
        let explainer =
            ShapleyExplainer::new(vec![0.5, -1.5, 2.0, 10.0]).expect("explainer");
        let features = [1.0, 0.0, -3.0, 12.5];

        let baseline = explainer.baseline(&model).expect("baseline");
        let contributions = explainer.explain(&model, &features).expect("explain");
        let reconstructed: f64 = baseline + contributions.iter().sum::<f64>();

        let direct = model.predict_rows(&[features.to_vec()]).expect("predict")[0];
        assert!(
            (reconstructed - direct).abs() < 1e-9,
            "additivity violated: {} vs {}",
            reconstructed,
            direct
        );
    }

    #[test]
    fn attribution_is_local() {
        let model = LinearModel {
            slopes: vec![1.0, 1.0],
            intercept: 0.0,
        };
        let explainer = ShapleyExplainer::new(vec![0.0, 0.0]).expect("explainer");

        let first = explainer.explain(&model, &[1.0, 0.0]).expect("explain");
        let second = explainer.explain(&model, &[0.0, 1.0]).expect("explain");
        assert_ne!(first, second);
    }

    #[test]
    fn wrong_width_input_is_rejected() {
        let model = LinearModel {
            slopes: vec![1.0, 1.0],
            intercept: 0.0,
        };
        let explainer = ShapleyExplainer::new(vec![0.0, 0.0]).expect("explainer");
        let result = explainer.explain(&model, &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(RiskError::FeatureMismatch(_))));
    }

    #[test]
    fn unsupported_widths_are_rejected_up_front() {
        assert!(ShapleyExplainer::new(vec![]).is_err());
        assert!(ShapleyExplainer::new(vec![0.0; MAX_FEATURES + 1]).is_err());
    }

    #[test]
    fn coalition_weights_sum_to_one_over_marginal_positions() {
        // Σ_s C(n-1, s) * w(s) = 1 for any n; this is what makes each
        // feature's weighted marginals a proper average.
        for n in 1..=10 {
            let weights = coalition_weights(n);
            let choose = |n: usize, k: usize| -> f64 {
                (0..k).map(|i| (n - i) as f64 / (i + 1) as f64).product()
            };
            let total: f64 = (0..n).map(|s| choose(n - 1, s) * weights[s]).sum();
            assert!((total - 1.0).abs() < 1e-9, "n={} total={}", n, total);
        }
    }
}
