//! Booking models
//!
//! Form payloads for the two booking steps, the confirmation handed back
//! when both pass, and the records listed on the dashboard.
//!
//! CRITICAL: All money values are i64 (whole rupees)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::booking::validation::{
    validate_card_number, validate_cvc, validate_email_address, validate_expiry,
};

/// Primary traveler step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TravelerDetails {
    #[validate(length(min = 2, message = "Full name must be at least 2 characters."))]
    pub full_name: String,

    #[validate(custom = "validate_email_address")]
    pub email: String,

    #[validate(length(min = 10, message = "Phone number must be at least 10 digits."))]
    pub phone: String,

    /// 4 stands for "4+"
    #[validate(range(min = 1, max = 4, message = "Please select number of adults."))]
    pub adults: u8,

    /// 3 stands for "3+"
    #[validate(range(max = 3, message = "Please select number of children."))]
    #[serde(default)]
    pub children: u8,
}

impl TravelerDetails {
    pub fn party_size(&self) -> u32 {
        u32::from(self.adults) + u32::from(self.children)
    }
}

/// Card payment step
///
/// No payment is taken; these fields are only checked for shape.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PaymentDetails {
    #[validate(length(min = 2, message = "Name on card is required."))]
    pub card_name: String,

    #[validate(custom = "validate_card_number")]
    pub card_number: String,

    /// MM/YY
    #[validate(custom = "validate_expiry")]
    pub expiry: String,

    #[validate(custom = "validate_cvc")]
    pub cvc: String,

    /// Checked by the booking flow alongside the derived rules
    pub agree_terms: bool,
}

impl PaymentDetails {
    /// Card number with all but the last four digits masked
    pub fn masked_card_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().collect();
        let visible = digits.len().saturating_sub(4);
        digits
            .iter()
            .enumerate()
            .map(|(i, c)| if i < visible { '*' } else { *c })
            .collect()
    }
}

impl std::fmt::Debug for PaymentDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentDetails")
            .field("card_name", &self.card_name)
            .field("card_number", &self.masked_card_number())
            .field("expiry", &self.expiry)
            .field("cvc", &"***")
            .field("agree_terms", &self.agree_terms)
            .finish()
    }
}

/// Issued when both booking steps pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// e.g. "IV-837KDG"
    pub reference: String,
    pub package_title: String,
    pub amount_due: i64,
    pub travelers: u32,
    pub lead_traveler: String,
}

/// Lifecycle of a past or upcoming booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "Upcoming",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

/// One row of the booking history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub details: String,
    pub date: NaiveDate,
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment() -> PaymentDetails {
        PaymentDetails {
            card_name: "Ananya Sharma".into(),
            card_number: "4111111111111111".into(),
            expiry: "09/27".into(),
            cvc: "123".into(),
            agree_terms: true,
        }
    }

    #[test]
    fn test_masked_card_number() {
        assert_eq!(payment().masked_card_number(), "************1111");
    }

    #[test]
    fn test_debug_never_prints_card_or_cvc() {
        let debug = format!("{:?}", payment());
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("123"));
        assert!(debug.contains("1111"));
    }

    #[test]
    fn test_party_size() {
        let details = TravelerDetails {
            full_name: "Ravi Kumar".into(),
            email: "ravi@example.com".into(),
            phone: "9876543210".into(),
            adults: 2,
            children: 1,
        };
        assert_eq!(details.party_size(), 3);
    }
}
