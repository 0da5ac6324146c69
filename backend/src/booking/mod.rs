//! Booking Flow
//!
//! Two-step checkout: traveler details, then payment. Each step must pass
//! its field rules before the flow advances.
//!
//! ```text
//! TravelerDetails ──submit_traveler──▶ Payment ──submit_payment──▶ Confirmed
//! ```
//!
//! Nothing is charged and nothing is stored; a confirmed flow only carries
//! the `BookingConfirmation` it issued.

pub mod validation;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::estimator::Estimate;
use crate::models::booking::{BookingConfirmation, PaymentDetails, TravelerDetails};
use crate::models::package::TourPackage;
pub use validation::FieldError;

/// Prefix for issued booking references
pub const REFERENCE_PREFIX: &str = "IV-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStep {
    TravelerDetails,
    Payment,
    Confirmed,
}

#[derive(Debug, Error, PartialEq)]
pub enum BookingError {
    #[error("Expected step {expected:?}, flow is at {actual:?}")]
    WrongStep {
        expected: BookingStep,
        actual: BookingStep,
    },

    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),
}

/// Generate a booking reference such as "IV-3F9A1C"
pub fn new_reference() -> String {
    let id = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{}{}", REFERENCE_PREFIX, &id[..6])
}

/// Checkout state for one trip
#[derive(Debug, Clone)]
pub struct BookingFlow {
    package_title: String,
    amount_due: i64,
    step: BookingStep,
    traveler: Option<TravelerDetails>,
    confirmation: Option<BookingConfirmation>,
}

impl BookingFlow {
    pub fn new(package_title: impl Into<String>, amount_due: i64) -> Self {
        Self {
            package_title: package_title.into(),
            amount_due: amount_due.max(0),
            step: BookingStep::TravelerDetails,
            traveler: None,
            confirmation: None,
        }
    }

    /// Book a listed package at its "starts from" price
    pub fn for_package(package: &TourPackage) -> Self {
        Self::new(package.title.clone(), package.price)
    }

    /// Book a custom trip at its estimated total
    pub fn for_estimate(title: impl Into<String>, estimate: &Estimate) -> Self {
        Self::new(title, estimate.total)
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn amount_due(&self) -> i64 {
        self.amount_due
    }

    pub fn traveler(&self) -> Option<&TravelerDetails> {
        self.traveler.as_ref()
    }

    pub fn confirmation(&self) -> Option<&BookingConfirmation> {
        self.confirmation.as_ref()
    }

    fn expect_step(&self, expected: BookingStep) -> Result<(), BookingError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(BookingError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    /// Validate the traveler step and move on to payment
    pub fn submit_traveler(
        &mut self,
        details: TravelerDetails,
    ) -> Result<BookingStep, BookingError> {
        self.expect_step(BookingStep::TravelerDetails)?;
        validation::check_traveler(&details).map_err(BookingError::Invalid)?;

        self.traveler = Some(details);
        self.step = BookingStep::Payment;
        Ok(self.step)
    }

    /// Validate the payment step and issue a confirmation
    pub fn submit_payment(
        &mut self,
        payment: &PaymentDetails,
    ) -> Result<BookingConfirmation, BookingError> {
        self.expect_step(BookingStep::Payment)?;
        validation::check_payment(payment).map_err(BookingError::Invalid)?;

        let (travelers, lead_traveler) = self
            .traveler
            .as_ref()
            .map(|t| (t.party_size(), t.full_name.clone()))
            .unwrap_or_default();

        let confirmation = BookingConfirmation {
            reference: new_reference(),
            package_title: self.package_title.clone(),
            amount_due: self.amount_due,
            travelers,
            lead_traveler,
        };
        info!(
            reference = %confirmation.reference,
            amount_due = confirmation.amount_due,
            card = %payment.masked_card_number(),
            "booking confirmed"
        );

        self.step = BookingStep::Confirmed;
        self.confirmation = Some(confirmation.clone());
        Ok(confirmation)
    }
}
