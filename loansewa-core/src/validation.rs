//! Form Validation
//!
//! Client-side checks mirroring the constraints the API enforces on signup,
//! login and loan applications, so forms can flag every bad field before a
//! round trip.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::models::{LoanApplicationRequest, LoginRequest, SignupRequest};

pub const RESIDENCE_TYPES: [&str; 3] = ["Owned", "Rented", "Mortgage"];
pub const LOAN_PURPOSES: [&str; 4] = ["Education", "Home", "Auto", "Personal"];
pub const LOAN_TYPES: [&str; 2] = ["Secured", "Unsecured"];

/// A single invalid form field
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every invalid field of a submitted form
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for a field, if it failed
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
    })
}

fn all_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_digit())
}

pub fn is_email(s: &str) -> bool {
    email_regex().is_match(s)
}

pub fn is_mobile(s: &str) -> bool {
    all_digits(s, 10)
}

pub fn is_aadhar(s: &str) -> bool {
    all_digits(s, 12)
}

/// What kind of identifier a login form was given
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentifierKind {
    Email,
    Mobile,
    Aadhar,
    Unknown,
}

impl IdentifierKind {
    pub fn classify(identifier: &str) -> Self {
        let identifier = identifier.trim();
        if is_email(identifier) {
            Self::Email
        } else if is_mobile(identifier) {
            Self::Mobile
        } else if is_aadhar(identifier) {
            Self::Aadhar
        } else {
            Self::Unknown
        }
    }
}

/// Validate an applicant login
pub fn validate_login(request: &LoginRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if IdentifierKind::classify(&request.identifier) == IdentifierKind::Unknown {
        errors.push(
            "identifier",
            "Enter an email, 10-digit mobile number or 12-digit Aadhaar number",
        );
    }
    if request.password.is_empty() {
        errors.push("password", "Password is required");
    }

    errors.into_result(())
}

/// Validate a signup form
pub fn validate_signup(request: &SignupRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name_len = request.full_name.trim().chars().count();
    if !(2..=100).contains(&name_len) {
        errors.push("full_name", "Full name must be 2 to 100 characters");
    }
    if !is_email(request.email.trim()) {
        errors.push("email", "Enter a valid email address");
    }
    if !is_mobile(request.mobile_number.trim()) {
        errors.push("mobile_number", "Mobile number must be 10 digits");
    }
    if !is_aadhar(request.aadhar.trim()) {
        errors.push("aadhar", "Aadhaar number must be 12 digits");
    }
    if request.password.is_empty() {
        errors.push("password", "Password is required");
    }
    if request.password != request.confirm_password {
        errors.push("confirm_password", "Passwords do not match");
    }

    errors.into_result(())
}

/// Raw text of the loan application form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoanApplicationForm {
    pub age: String,
    pub income: String,
    pub loan_amount: String,
    pub loan_tenure_months: String,
    pub avg_dpd_per_delinquency: String,
    pub delinquency_ratio: String,
    pub credit_utilization_ratio: String,
    pub num_open_accounts: String,
    pub residence_type: String,
    pub loan_purpose: String,
    pub loan_type: String,
}

impl Default for LoanApplicationForm {
    fn default() -> Self {
        Self {
            age: String::new(),
            income: String::new(),
            loan_amount: String::new(),
            loan_tenure_months: String::new(),
            avg_dpd_per_delinquency: "0".to_string(),
            delinquency_ratio: "0".to_string(),
            credit_utilization_ratio: "0".to_string(),
            num_open_accounts: "1".to_string(),
            residence_type: RESIDENCE_TYPES[0].to_string(),
            loan_purpose: LOAN_PURPOSES[0].to_string(),
            loan_type: LOAN_TYPES[0].to_string(),
        }
    }
}

fn parse_field<T: std::str::FromStr>(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
) -> Option<T> {
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(field, "Enter a number");
            None
        }
    }
}

fn parse_decimal(errors: &mut ValidationErrors, field: &'static str, raw: &str) -> Option<f64> {
    match parse_field::<f64>(errors, field, raw) {
        Some(value) if value.is_finite() => Some(value),
        Some(_) => {
            errors.push(field, "Enter a finite number");
            None
        }
        None => None,
    }
}

fn check_range<T: PartialOrd + Copy>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<T>,
    ok: impl Fn(T) -> bool,
    message: &str,
) {
    if let Some(v) = value {
        if !ok(v) {
            errors.push(field, message);
        }
    }
}

fn check_choice(errors: &mut ValidationErrors, field: &'static str, value: &str, choices: &[&str]) {
    if !choices.contains(&value) {
        errors.push(field, format!("Choose one of: {}", choices.join(", ")));
    }
}

impl LoanApplicationForm {
    /// Parse and range-check the form into an API request
    pub fn parse(&self) -> Result<LoanApplicationRequest, ValidationErrors> {
        let mut e = ValidationErrors::default();

        let age = parse_field::<u32>(&mut e, "age", &self.age);
        let income = parse_decimal(&mut e, "income", &self.income);
        let loan_amount = parse_decimal(&mut e, "loan_amount", &self.loan_amount);
        let tenure = parse_field::<u32>(&mut e, "loan_tenure_months", &self.loan_tenure_months);
        let avg_dpd = parse_decimal(&mut e, "avg_dpd_per_delinquency", &self.avg_dpd_per_delinquency);
        let delinquency = parse_decimal(&mut e, "delinquency_ratio", &self.delinquency_ratio);
        let utilization = parse_decimal(&mut e, "credit_utilization_ratio", &self.credit_utilization_ratio);
        let accounts = parse_field::<u32>(&mut e, "num_open_accounts", &self.num_open_accounts);

        check_range(&mut e, "age", age, |v| (18..=100).contains(&v), "Age must be between 18 and 100");
        check_range(&mut e, "income", income, |v| v > 0.0, "Income must be greater than 0");
        check_range(&mut e, "loan_amount", loan_amount, |v| v > 0.0, "Loan amount must be greater than 0");
        check_range(&mut e, "loan_tenure_months", tenure, |v| v > 0, "Tenure must be at least 1 month");
        check_range(&mut e, "avg_dpd_per_delinquency", avg_dpd, |v| v >= 0.0, "Average DPD cannot be negative");
        check_range(&mut e, "delinquency_ratio", delinquency, |v| (0.0..=100.0).contains(&v), "Delinquency ratio must be between 0 and 100");
        check_range(&mut e, "credit_utilization_ratio", utilization, |v| (0.0..=100.0).contains(&v), "Credit utilization must be between 0 and 100");
        check_range(&mut e, "num_open_accounts", accounts, |v| (1..=10).contains(&v), "Open accounts must be between 1 and 10");

        check_choice(&mut e, "residence_type", &self.residence_type, &RESIDENCE_TYPES);
        check_choice(&mut e, "loan_purpose", &self.loan_purpose, &LOAN_PURPOSES);
        check_choice(&mut e, "loan_type", &self.loan_type, &LOAN_TYPES);

        match (age, income, loan_amount, tenure, avg_dpd, delinquency, utilization, accounts) {
            (
                Some(age),
                Some(income),
                Some(loan_amount),
                Some(loan_tenure_months),
                Some(avg_dpd_per_delinquency),
                Some(delinquency_ratio),
                Some(credit_utilization_ratio),
                Some(num_open_accounts),
            ) if e.is_empty() => Ok(LoanApplicationRequest {
                age,
                income,
                loan_amount,
                loan_tenure_months,
                avg_dpd_per_delinquency,
                delinquency_ratio,
                credit_utilization_ratio,
                num_open_accounts,
                residence_type: self.residence_type.clone(),
                loan_purpose: self.loan_purpose.clone(),
                loan_type: self.loan_type.clone(),
            }),
            _ => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> LoanApplicationForm {
        LoanApplicationForm {
            age: "32".to_string(),
            income: "1200000".to_string(),
            loan_amount: "2500000".to_string(),
            loan_tenure_months: "36".to_string(),
            avg_dpd_per_delinquency: "4.5".to_string(),
            delinquency_ratio: "10".to_string(),
            credit_utilization_ratio: "35".to_string(),
            num_open_accounts: "3".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_identifier_classification() {
        assert_eq!(IdentifierKind::classify("asha@example.com"), IdentifierKind::Email);
        assert_eq!(IdentifierKind::classify("9876543210"), IdentifierKind::Mobile);
        assert_eq!(IdentifierKind::classify("123412341234"), IdentifierKind::Aadhar);
        assert_eq!(IdentifierKind::classify("98765"), IdentifierKind::Unknown);
        assert_eq!(IdentifierKind::classify("not@an"), IdentifierKind::Unknown);
    }

    #[test]
    fn test_login_requires_password() {
        let err = validate_login(&LoginRequest {
            identifier: "9876543210".to_string(),
            password: String::new(),
        })
        .unwrap_err();
        assert_eq!(err.fields(), vec!["password"]);
    }

    #[test]
    fn test_signup_reports_every_field() {
        let err = validate_signup(&SignupRequest {
            full_name: "A".to_string(),
            email: "bad".to_string(),
            mobile_number: "12345".to_string(),
            aadhar: "1234".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret!".to_string(),
        })
        .unwrap_err();

        assert_eq!(
            err.fields(),
            vec!["full_name", "email", "mobile_number", "aadhar", "confirm_password"]
        );
        assert_eq!(err.for_field("confirm_password"), Some("Passwords do not match"));
    }

    #[test]
    fn test_signup_accepts_valid_request() {
        let ok = validate_signup(&SignupRequest {
            full_name: "Asha Rai".to_string(),
            email: "asha.rai@example.co.in".to_string(),
            mobile_number: "9876543210".to_string(),
            aadhar: "123412341234".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        });
        assert!(ok.is_ok());
    }

    #[test]
    fn test_loan_form_parses() {
        let request = filled_form().parse().unwrap();
        assert_eq!(request.age, 32);
        assert_eq!(request.loan_amount, 2_500_000.0);
        assert_eq!(request.residence_type, "Owned");
        assert_eq!(request.loan_type, "Secured");
    }

    #[test]
    fn test_loan_form_range_errors() {
        let form = LoanApplicationForm {
            age: "17".to_string(),
            delinquency_ratio: "101".to_string(),
            num_open_accounts: "0".to_string(),
            loan_purpose: "Holiday".to_string(),
            ..filled_form()
        };
        let err = form.parse().unwrap_err();
        assert_eq!(
            err.fields(),
            vec!["age", "delinquency_ratio", "num_open_accounts", "loan_purpose"]
        );
    }

    #[test]
    fn test_loan_form_non_numeric() {
        let form = LoanApplicationForm {
            income: "lots".to_string(),
            ..filled_form()
        };
        let err = form.parse().unwrap_err();
        assert_eq!(err.for_field("income"), Some("Enter a number"));
    }

    #[test]
    fn test_loan_form_rejects_non_finite() {
        let form = LoanApplicationForm {
            income: "inf".to_string(),
            loan_amount: "Infinity".to_string(),
            avg_dpd_per_delinquency: "NaN".to_string(),
            ..filled_form()
        };
        let err = form.parse().unwrap_err();
        assert_eq!(err.fields(), vec!["income", "loan_amount", "avg_dpd_per_delinquency"]);
        assert_eq!(err.for_field("income"), Some("Enter a finite number"));
    }
}
