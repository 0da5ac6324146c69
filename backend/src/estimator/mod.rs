//! Trip Cost Estimation
//!
//! Pure functions from a `TripCostInputs` snapshot to an `Estimate`.
//!
//! # Variants
//!
//! - **party** (`party.rs`): per-traveler fares, star-tier hotel, lump-sum
//!   activities budget, subtotal optionally scaled by the traveler count
//! - **package** (`package.rs`): one flat fare, nightly hotel budget,
//!   pick-list of activities
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (whole rupees), arithmetic saturates
//! 2. The total depends only on the inputs and the rate card passed in
//! 3. Invalid counts are clamped, never rejected; the estimate always exists

pub mod package;
pub mod party;
pub mod sanitize;

use serde::{Deserialize, Serialize};

use crate::costs::RateCard;
use crate::models::trip::TripCostInputs;

pub use package::estimate_package;
pub use party::estimate_party;
pub use sanitize::{clamp_amount, clamp_count, parse_amount, parse_count, InputAdjustment};

/// Which part of the trip a line item prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    Flights,
    Hotel,
    Cab,
    Activities,
}

/// One priced component of an estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub kind: LineItemKind,
    pub label: String,
    pub amount: i64,
}

impl LineItem {
    pub fn new(kind: LineItemKind, label: impl Into<String>, amount: i64) -> Self {
        Self {
            kind,
            label: label.into(),
            amount,
        }
    }
}

/// Result of pricing one input snapshot
///
/// `total` is the only value with contractual meaning; the breakdown lists
/// the included components in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub breakdown: Vec<LineItem>,
    /// Sum of the breakdown
    pub subtotal: i64,
    /// Factor applied to the subtotal (1 unless the party multiplier is on)
    pub multiplier: i64,
    pub total: i64,
    /// Form values that were clamped before pricing
    pub adjustments: Vec<InputAdjustment>,
}

impl Estimate {
    pub(crate) fn from_parts(
        breakdown: Vec<LineItem>,
        multiplier: i64,
        adjustments: Vec<InputAdjustment>,
    ) -> Self {
        let subtotal = breakdown
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.amount));
        Self {
            total: subtotal.saturating_mul(multiplier),
            breakdown,
            subtotal,
            multiplier,
            adjustments,
        }
    }

    /// Combined amount of all line items of a kind (0 when excluded)
    pub fn component(&self, kind: LineItemKind) -> i64 {
        self.breakdown
            .iter()
            .filter(|item| item.kind == kind)
            .fold(0i64, |acc, item| acc.saturating_add(item.amount))
    }

    pub fn was_adjusted(&self) -> bool {
        !self.adjustments.is_empty()
    }
}

/// Estimate a trip with the default rate card
///
/// # Example
/// ```
/// use trip_planner_core_rs::{estimate, PartyTripInputs, TripCostInputs};
///
/// let inputs = TripCostInputs::Party(PartyTripInputs::default());
/// assert_eq!(estimate(&inputs), 120_400);
/// ```
pub fn estimate(inputs: &TripCostInputs) -> i64 {
    estimate_with(inputs, &RateCard::default()).total
}

/// Estimate a trip with an explicit rate card, keeping the breakdown
pub fn estimate_with(inputs: &TripCostInputs, rates: &RateCard) -> Estimate {
    match inputs {
        TripCostInputs::Party(party) => estimate_party(party, &rates.party),
        TripCostInputs::Package(package) => estimate_package(package, &rates.package),
    }
}

/// Negative rates never price a component below zero
pub(crate) fn rate(value: i64) -> i64 {
    value.max(0)
}
