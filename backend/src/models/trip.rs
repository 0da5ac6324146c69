//! Trip option model
//!
//! The structured set of options a traveler picks in the estimator form.
//! Two input shapes exist:
//! - **Party**: per-traveler quote (flight class, hotel star tier, traveler count,
//!   lump-sum activities budget)
//! - **Package**: flat package (one flight fare, nightly hotel budget, pick-list
//!   of activities)
//!
//! CRITICAL: All money values are i64 (whole rupees)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing trip options from raw values
#[derive(Debug, Error, PartialEq)]
pub enum TripInputError {
    #[error("Hotel star rating {0} outside supported tiers 2-5")]
    InvalidStarRating(u8),

    #[error("Unknown flight class '{0}'")]
    UnknownFlightClass(String),
}

/// Cabin class for the per-traveler flight fare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightClass {
    #[default]
    Economy,
    Business,
    First,
}

impl FlightClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightClass::Economy => "economy",
            FlightClass::Business => "business",
            FlightClass::First => "first",
        }
    }
}

impl std::str::FromStr for FlightClass {
    type Err = TripInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(FlightClass::Economy),
            "business" => Ok(FlightClass::Business),
            "first" | "first class" | "first_class" => Ok(FlightClass::First),
            _ => Err(TripInputError::UnknownFlightClass(s.to_string())),
        }
    }
}

/// Hotel star tier (2-5)
///
/// # Example
/// ```
/// use trip_planner_core_rs::HotelStars;
///
/// let stars = HotelStars::new(3).unwrap();
/// assert_eq!(stars.get(), 3);
/// assert!(HotelStars::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HotelStars(u8);

impl HotelStars {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Result<Self, TripInputError> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(TripInputError::InvalidStarRating(stars))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for HotelStars {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for HotelStars {
    type Error = TripInputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HotelStars> for u8 {
    fn from(value: HotelStars) -> Self {
        value.0
    }
}

/// Options for a per-traveler party quote
///
/// Counts are kept as the raw values the user typed; the estimator clamps
/// them, so a zero or negative entry never reaches the arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyTripInputs {
    pub include_flights: bool,
    /// Only consulted when `include_flights` is set
    pub flight_class: FlightClass,
    pub include_hotel: bool,
    /// Only consulted when `include_hotel` is set
    pub hotel_stars: HotelStars,
    pub nights: i64,
    pub travelers: i64,
    pub include_cab: bool,
    /// Lump sum for the whole party, slider range 0-50,000
    pub activities_budget: i64,
}

impl Default for PartyTripInputs {
    fn default() -> Self {
        Self {
            include_flights: true,
            flight_class: FlightClass::Economy,
            include_hotel: true,
            hotel_stars: HotelStars::default(),
            nights: 7,
            travelers: 2,
            include_cab: false,
            activities_budget: 5000,
        }
    }
}

/// A bookable add-on activity with a flat price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub cost: i64,
    #[serde(default)]
    pub selected: bool,
}

impl Activity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// The activity pick-list offered on the standalone estimator page
pub fn default_activities() -> Vec<Activity> {
    vec![
        Activity::new("city-tour", "Guided City Tour", 3000).selected(true),
        Activity::new("trekking", "Mountain Trekking", 5500),
        Activity::new("boating", "Houseboat Cruise", 8000),
    ]
}

/// Options for a flat package quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageTripInputs {
    pub include_flights: bool,
    /// Nightly hotel budget, slider range 1,500-15,000
    pub hotel_budget_per_night: i64,
    pub nights: i64,
    pub include_cab: bool,
    pub activities: Vec<Activity>,
}

impl Default for PackageTripInputs {
    fn default() -> Self {
        Self {
            include_flights: true,
            hotel_budget_per_night: 4000,
            nights: 5,
            include_cab: true,
            activities: default_activities(),
        }
    }
}

impl PackageTripInputs {
    pub fn selected_activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter().filter(|a| a.selected)
    }
}

/// Snapshot of everything the estimator reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum TripCostInputs {
    Party(PartyTripInputs),
    Package(PackageTripInputs),
}

impl TripCostInputs {
    pub fn variant_name(&self) -> &'static str {
        match self {
            TripCostInputs::Party(_) => "party",
            TripCostInputs::Package(_) => "package",
        }
    }
}

impl From<PartyTripInputs> for TripCostInputs {
    fn from(inputs: PartyTripInputs) -> Self {
        TripCostInputs::Party(inputs)
    }
}

impl From<PackageTripInputs> for TripCostInputs {
    fn from(inputs: PackageTripInputs) -> Self {
        TripCostInputs::Package(inputs)
    }
}
