//! Booking form rules
//!
//! Field rules the derived `Validate` impls cannot express, plus the
//! conversion from `validator` errors into flat `FieldError`s.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::booking::{PaymentDetails, TravelerDetails};

/// A failed rule on one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn all_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_card_number(value: &str) -> Result<(), ValidationError> {
    if all_digits(value, 16) {
        Ok(())
    } else {
        Err(rule("card_number", "Card number must be 16 digits."))
    }
}

pub fn validate_cvc(value: &str) -> Result<(), ValidationError> {
    if all_digits(value, 3) {
        Ok(())
    } else {
        Err(rule("cvc", "CVC must be 3 digits."))
    }
}

/// MM/YY with month 01-12
pub fn validate_expiry(value: &str) -> Result<(), ValidationError> {
    let valid = value
        .split_once('/')
        .filter(|(mm, yy)| all_digits(mm, 2) && all_digits(yy, 2))
        .and_then(|(mm, _)| mm.parse::<u8>().ok())
        .is_some_and(|month| (1..=12).contains(&month));

    if valid {
        Ok(())
    } else {
        Err(rule("expiry", "Invalid format. Use MM/YY."))
    }
}

/// local@domain.tld, where the top-level label is at least two letters
pub fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    let has_tld = value
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .is_some_and(|(host, tld)| {
            !host.is_empty() && tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic())
        });

    if has_tld && validator::validate_email(value) {
        Ok(())
    } else {
        Err(rule("email", "Please enter a valid email address."))
    }
}

/// Flatten validator errors, ordered by field name
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

pub fn check_traveler(details: &TravelerDetails) -> Result<(), Vec<FieldError>> {
    details.validate().map_err(|e| field_errors(&e))
}

pub fn check_payment(payment: &PaymentDetails) -> Result<(), Vec<FieldError>> {
    let mut errors = match payment.validate() {
        Ok(()) => Vec::new(),
        Err(e) => field_errors(&e),
    };
    if !payment.agree_terms {
        errors.push(FieldError {
            field: "agree_terms".to_string(),
            message: "You must agree to the terms and conditions.".to_string(),
        });
        errors.sort_by(|a, b| a.field.cmp(&b.field));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
