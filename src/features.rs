//! Canonical feature schema shared by training and inference
//!
//! The model is only valid for the exact feature order it was trained on.
//! That order lives here, once: both the synthetic training pipeline and
//! the per-request derivation go through `FEATURE_NAMES` and
//! `derive_features`, so the two can never drift apart silently.

/// Number of engineered features
pub const FEATURE_COUNT: usize = 10;

/// Canonical feature order. Index positions are load-bearing: the trained
/// forest, the persisted artifact and every explanation entry depend on
/// this exact sequence.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "income",
    "loan_amount",
    "tenure",
    "employment_type",
    "existing_emis",
    "credit_score",
    "age",
    "dependents",
    "debt_to_income",
    "loan_to_income",
];

/// A validated loan application
///
/// Numeric bounds are enforced at the HTTP boundary before this struct is
/// constructed; the core assumes valid ranges. `employment_type` is the
/// exception and may be any string (unseen values fall back at encoding).
#[derive(Debug, Clone, PartialEq)]
pub struct LoanApplication {
    /// Annual income
    pub income: f64,
    /// Requested loan amount
    pub loan_amount: f64,
    /// Loan tenure in months
    pub tenure: u32,
    /// Employment type label
    pub employment_type: String,
    /// Existing monthly debt obligations
    pub existing_emis: f64,
    /// Credit score in [300, 850]
    pub credit_score: u32,
    /// Applicant age
    pub age: u32,
    /// Number of dependents
    pub dependents: u32,
}

/// Existing monthly obligations as a percentage of monthly income.
///
/// Income is constrained positive upstream; the zero guard only exists so
/// a bad caller cannot produce a NaN/Infinity feature.
pub fn debt_to_income(income: f64, existing_emis: f64) -> f64 {
    if income <= 0.0 {
        return 0.0;
    }
    let monthly_income = income / 12.0;
    (existing_emis / monthly_income) * 100.0
}

/// Requested loan amount relative to annual income. Same guard as above.
pub fn loan_to_income(income: f64, loan_amount: f64) -> f64 {
    if income <= 0.0 {
        return 0.0;
    }
    loan_amount / income
}

/// Map an application and its resolved employment code to the canonical
/// feature vector. Pure; no I/O.
pub fn derive_features(
    application: &LoanApplication,
    employment_code: f64,
) -> [f64; FEATURE_COUNT] {
    [
        application.income,
        application.loan_amount,
        application.tenure as f64,
        employment_code,
        application.existing_emis,
        application.credit_score as f64,
        application.age as f64,
        application.dependents as f64,
        debt_to_income(application.income, application.existing_emis),
        loan_to_income(application.income, application.loan_amount),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_application() -> LoanApplication {
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
    fn loan_to_income_reproduces_reference_value() {
        assert_eq!(loan_to_income(500_000.0, 2_000_000.0), 4.0);
    }

    #[test]
    fn debt_to_income_reproduces_reference_value() {
        // monthly income 41666.67 -> ratio ~36%
        let dti = debt_to_income(500_000.0, 15_000.0);
        assert!((dti - 36.0).abs() < 0.01, "got {}", dti);
    }

    #[test]
    fn ratios_guard_against_zero_income() {
        assert_eq!(debt_to_income(0.0, 15_000.0), 0.0);
        assert_eq!(loan_to_income(0.0, 2_000_000.0), 0.0);
    }

    #[test]
    fn derived_vector_follows_canonical_order() {
        let application = sample_application();
        let features = derive_features(&application, 1.0);

        assert_eq!(features.len(), FEATURE_NAMES.len());
        assert_eq!(features[0], 500_000.0); // income
        assert_eq!(features[1], 2_000_000.0); // loan_amount
        assert_eq!(features[2], 60.0); // tenure
        assert_eq!(features[3], 1.0); // employment_type code
        assert_eq!(features[4], 15_000.0); // existing_emis
        assert_eq!(features[5], 750.0); // credit_score
        assert_eq!(features[6], 35.0); // age
        assert_eq!(features[7], 2.0); // dependents
        assert!((features[8] - 36.0).abs() < 0.01); // debt_to_income
        assert_eq!(features[9], 4.0); // loan_to_income
    }

    #[test]
    fn schema_names_derived_ratios_last() {
        assert_eq!(FEATURE_NAMES[8], "debt_to_income");
        assert_eq!(FEATURE_NAMES[9], "loan_to_income");
    }
}
