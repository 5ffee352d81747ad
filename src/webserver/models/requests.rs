/// API request type definitions
///
/// Wire field names match the upstream service (camelCase). All range
/// validation happens here, at the boundary; the core pipeline is only
/// invoked with an application that already passed.
use serde::{Deserialize, Serialize};

use crate::features::LoanApplication;

/// Prediction request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplicationRequest {
    /// Annual income, must be > 0
    pub income: f64,
    /// Requested loan amount, must be > 0
    pub loan_amount: f64,
    /// Loan tenure in months, must be > 0
    pub tenure: u32,
    /// Employment type; any string is accepted
    pub employment_type: String,
    /// Existing monthly obligations, must be >= 0
    pub existing_emis: f64,
    /// Credit score in [300, 850]
    pub credit_score: u32,
    /// Applicant age, must be > 0
    pub age: u32,
    /// Number of dependents (unsigned on the wire)
    pub dependents: u32,
}

impl LoanApplicationRequest {
    /// Range validation. Returns every problem at once so the caller sees
    /// the full list, not just the first field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if !self.income.is_finite() || self.income <= 0.0 {
            problems.push("income must be a positive number".to_string());
        }
        if !self.loan_amount.is_finite() || self.loan_amount <= 0.0 {
            problems.push("loanAmount must be a positive number".to_string());
        }
        if self.tenure == 0 {
            problems.push("tenure must be a positive number of months".to_string());
        }
        if !self.existing_emis.is_finite() || self.existing_emis < 0.0 {
            problems.push("existingEmis must be zero or positive".to_string());
        }
        if !(300..=850).contains(&self.credit_score) {
            problems.push("creditScore must be between 300 and 850".to_string());
        }
        if self.age == 0 {
            problems.push("age must be a positive number".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }

    /// Convert into the core application type. Only call after validate().
    pub fn into_application(self) -> LoanApplication {
        LoanApplication {
            income: self.income,
            loan_amount: self.loan_amount,
            tenure: self.tenure,
            employment_type: self.employment_type,
            existing_emis: self.existing_emis,
            credit_score: self.credit_score,
            age: self.age,
            dependents: self.dependents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> LoanApplicationRequest {
        LoanApplicationRequest {
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
    fn valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn out_of_range_credit_score_never_reaches_the_core() {
        let mut request = valid_request();
        request.credit_score = 900;
        let problems = request.validate().unwrap_err();
        assert!(problems.iter().any(|p| p.contains("creditScore")));

        request.credit_score = 299;
        assert!(request.validate().is_err());
    }

    #[test]
    fn boundary_credit_scores_are_accepted() {
        let mut request = valid_request();
        request.credit_score = 300;
        assert!(request.validate().is_ok());
        request.credit_score = 850;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let mut request = valid_request();
        request.income = 0.0;
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.loan_amount = -1.0;
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.existing_emis = -0.01;
        assert!(request.validate().is_err());
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let mut request = valid_request();
        request.income = f64::NAN;
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.existing_emis = f64::INFINITY;
        assert!(request.validate().is_err());
    }

    #[test]
    fn all_problems_are_reported_together() {
        let mut request = valid_request();
        request.income = 0.0;
        request.credit_score = 900;
        request.age = 0;
        let problems = request.validate().unwrap_err();
        assert_eq!(problems.len(), 3);
    }

    #[test]
    fn any_employment_type_string_is_accepted_at_the_boundary() {
        let mut request = valid_request();
        request.employment_type = String::new();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = r#"{
            "income": 500000,
            "loanAmount": 2000000,
            "tenure": 60,
            "employmentType": "SALARIED",
            "existingEmis": 15000,
            "creditScore": 750,
            "age": 35,
            "dependents": 2
        }"#;
        let request: LoanApplicationRequest = serde_json::from_str(json).expect("parse");
        assert_eq!(request.loan_amount, 2_000_000.0);
        assert_eq!(request.credit_score, 750);
    }
}
