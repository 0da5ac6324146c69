//! Rate Card and Related Types
//!
//! Flat rates used by both estimator variants. Rates are configuration:
//! every field has a default and a partial JSON document overrides only
//! the rates it names.
//! All monetary values in whole rupees.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::trip::FlightClass;

/// Errors found when validating a rate card
#[derive(Debug, Error, PartialEq)]
pub enum RateCardError {
    #[error("Rate '{name}' must not be negative (got {value})")]
    NegativeRate { name: &'static str, value: i64 },
}

/// Rates for the per-traveler party quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyRates {
    /// Return fare per traveler, economy cabin
    pub economy_flight_per_person: i64,
    /// Return fare per traveler, business cabin
    pub business_flight_per_person: i64,
    /// Return fare per traveler, first class
    pub first_flight_per_person: i64,

    /// Room rate per star per night
    ///
    /// A 3-star room for 7 nights costs 3 × rate × 7.
    pub hotel_per_star_per_night: i64,

    /// Local cab hire per day
    pub cab_per_day: i64,

    /// Multiply the whole subtotal by the traveler count
    ///
    /// The flight fare is already per traveler, so enabling this counts
    /// travelers twice for flights. The quote widget has always done this
    /// and published totals depend on it, so it stays on by default.
    pub reapply_traveler_multiplier: bool,
}

impl Default for PartyRates {
    fn default() -> Self {
        Self {
            economy_flight_per_person: 15_000,
            business_flight_per_person: 40_000,
            first_flight_per_person: 80_000,
            hotel_per_star_per_night: 1_200,
            cab_per_day: 800,
            reapply_traveler_multiplier: true,
        }
    }
}

impl PartyRates {
    /// Per-traveler fare for a cabin class
    pub fn flight_rate(&self, class: FlightClass) -> i64 {
        match class {
            FlightClass::Economy => self.economy_flight_per_person,
            FlightClass::Business => self.business_flight_per_person,
            FlightClass::First => self.first_flight_per_person,
        }
    }

    fn amounts(&self) -> [(&'static str, i64); 5] {
        [
            ("party.economy_flight_per_person", self.economy_flight_per_person),
            ("party.business_flight_per_person", self.business_flight_per_person),
            ("party.first_flight_per_person", self.first_flight_per_person),
            ("party.hotel_per_star_per_night", self.hotel_per_star_per_night),
            ("party.cab_per_day", self.cab_per_day),
        ]
    }
}

/// Rates for the flat package quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageRates {
    /// One flat fare regardless of party size
    pub flight_flat: i64,
    /// Full-trip cab service per day
    pub cab_per_day: i64,
}

impl Default for PackageRates {
    fn default() -> Self {
        Self {
            flight_flat: 12_500,
            cab_per_day: 2_800,
        }
    }
}

impl PackageRates {
    fn amounts(&self) -> [(&'static str, i64); 2] {
        [
            ("package.flight_flat", self.flight_flat),
            ("package.cab_per_day", self.cab_per_day),
        ]
    }
}

/// Rate Card Configuration
///
/// Every estimator surface reads its rates from one of these.
///
/// # Example
/// ```
/// use trip_planner_core_rs::RateCard;
///
/// let card: RateCard = serde_json::from_str(r#"{"party": {"cab_per_day": 1000}}"#).unwrap();
/// assert_eq!(card.party.cab_per_day, 1000);
/// assert_eq!(card.party.hotel_per_star_per_night, 1200);
/// assert_eq!(card.package.flight_flat, 12_500);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateCard {
    pub party: PartyRates,
    pub package: PackageRates,
}

impl RateCard {
    /// Reject rate cards that could produce a negative estimate
    pub fn validate(&self) -> Result<(), RateCardError> {
        self.party
            .amounts()
            .into_iter()
            .chain(self.package.amounts())
            .find(|(_, value)| *value < 0)
            .map_or(Ok(()), |(name, value)| {
                Err(RateCardError::NegativeRate { name, value })
            })
    }
}
