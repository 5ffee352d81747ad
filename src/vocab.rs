//! Employment-type vocabulary
//!
//! Fitted once at training time and immutable afterwards. Codes are
//! assigned over the sorted unique labels, which reproduces the code
//! assignment of the label encoder the model was originally trained with.

use std::collections::HashMap;

use crate::errors::RiskError;

/// Fallback label for employment types that were not seen at fit time.
/// Unseen categories must not break prediction; they are encoded as this
/// category instead. Policy, not a bug.
pub const DEFAULT_EMPLOYMENT_TYPE: &str = "SALARIED";

#[derive(Debug, Clone)]
pub struct CategoryVocabulary {
    classes: Vec<String>,
    codes: HashMap<String, usize>,
    fallback_code: usize,
}

impl CategoryVocabulary {
    /// Fit a vocabulary over training labels. Labels are deduplicated and
    /// sorted before codes are assigned, so the mapping is independent of
    /// input order. Fails if the fallback label is missing.
    pub fn fit<I>(labels: I) -> Result<Self, RiskError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut classes: Vec<String> = labels.into_iter().collect();
        classes.sort();
        classes.dedup();
        Self::from_classes(classes)
    }

    /// Rebuild a vocabulary from persisted classes (artifact load path)
    pub fn from_classes(classes: Vec<String>) -> Result<Self, RiskError> {
        if classes.is_empty() {
            return Err(RiskError::Artifact(
                "category vocabulary has no classes".to_string(),
            ));
        }

        let mut sorted = classes.clone();
        sorted.sort();
        if sorted != classes {
            return Err(RiskError::Artifact(
                "category vocabulary classes are not in code order".to_string(),
            ));
        }

        let codes: HashMap<String, usize> = classes
            .iter()
            .enumerate()
            .map(|(code, label)| (label.clone(), code))
            .collect();

        let fallback_code = match codes.get(DEFAULT_EMPLOYMENT_TYPE) {
            Some(code) => *code,
            None => {
                return Err(RiskError::Artifact(format!(
                    "category vocabulary is missing the fallback label {}",
                    DEFAULT_EMPLOYMENT_TYPE
                )))
            }
        };

        Ok(Self {
            classes,
            codes,
            fallback_code,
        })
    }

    /// Encode an employment type. Unknown labels get the fallback code.
    pub fn encode(&self, employment_type: &str) -> f64 {
        let code = self
            .codes
            .get(employment_type)
            .copied()
            .unwrap_or(self.fallback_code);
        code as f64
    }

    /// Known classes in code order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted() -> CategoryVocabulary {
        CategoryVocabulary::fit(
            ["SALARIED", "SELF_EMPLOYED", "BUSINESS"]
                .iter()
                .map(|s| s.to_string()),
        )
        .expect("fit succeeds")
    }

    #[test]
    fn codes_follow_sorted_label_order() {
        let vocab = fitted();
        assert_eq!(vocab.encode("BUSINESS"), 0.0);
        assert_eq!(vocab.encode("SALARIED"), 1.0);
        assert_eq!(vocab.encode("SELF_EMPLOYED"), 2.0);
    }

    #[test]
    fn unseen_label_falls_back_to_salaried() {
        let vocab = fitted();
        let salaried = vocab.encode("SALARIED");
        assert_eq!(vocab.encode("FREELANCE"), salaried);
        assert_eq!(vocab.encode(""), salaried);
        assert_eq!(vocab.encode("salaried"), salaried); // lookup is case-sensitive
    }

    #[test]
    fn fit_requires_fallback_label() {
        let result = CategoryVocabulary::fit(
            ["BUSINESS", "SELF_EMPLOYED"].iter().map(|s| s.to_string()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn from_classes_rejects_unsorted_input() {
        let result = CategoryVocabulary::from_classes(vec![
            "SALARIED".to_string(),
            "BUSINESS".to_string(),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn fit_deduplicates_labels() {
        let vocab = CategoryVocabulary::fit(
            ["SALARIED", "SALARIED", "BUSINESS"]
                .iter()
                .map(|s| s.to_string()),
        )
        .expect("fit succeeds");
        assert_eq!(vocab.len(), 2);
    }
}
